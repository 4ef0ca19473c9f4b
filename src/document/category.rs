//! Category catalog.
//!
//! Artifacts carry raw category ids such as `ly` or `m_bac`. The catalog
//! maps each id to its group and to a display name in every supported
//! locale. Display names are what free-text search matches against.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::error::{CurioError, Result};

/// Display languages of the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Vi,
    En,
    Zh,
    Ja,
    Ko,
}

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::Vi, Locale::En, Locale::Zh, Locale::Ja, Locale::Ko];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Vi => "vi",
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = CurioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vi" => Ok(Locale::Vi),
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            "ja" => Ok(Locale::Ja),
            "ko" => Ok(Locale::Ko),
            other => Err(CurioError::invalid_argument(format!(
                "unknown locale '{other}', expected one of vi, en, zh, ja, ko"
            ))),
        }
    }
}

/// A name in every supported locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub vi: String,
    pub en: String,
    pub zh: String,
    pub ja: String,
    pub ko: String,
}

impl LocalizedName {
    pub fn new(vi: &str, en: &str, zh: &str, ja: &str, ko: &str) -> Self {
        LocalizedName {
            vi: vi.to_string(),
            en: en.to_string(),
            zh: zh.to_string(),
            ja: ja.to_string(),
            ko: ko.to_string(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Vi => &self.vi,
            Locale::En => &self.en,
            Locale::Zh => &self.zh,
            Locale::Ja => &self.ja,
            Locale::Ko => &self.ko,
        }
    }
}

/// One selectable category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: LocalizedName,
}

/// A named group of categories (religion, genre, era, region).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub id: String,
    pub title: LocalizedName,
    pub options: Vec<Category>,
}

/// All known categories, indexed by id.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    groups: Vec<CategoryGroup>,
    /// Category id → (group index, option index).
    index: HashMap<String, (usize, usize), RandomState>,
}

impl CategoryCatalog {
    /// Build a catalog from groups. Category ids must be unique across all
    /// groups.
    pub fn from_groups(groups: Vec<CategoryGroup>) -> Result<Self> {
        let mut index = HashMap::default();
        for (group_idx, group) in groups.iter().enumerate() {
            for (option_idx, category) in group.options.iter().enumerate() {
                if index
                    .insert(category.id.clone(), (group_idx, option_idx))
                    .is_some()
                {
                    return Err(CurioError::data(format!(
                        "duplicate category id '{}'",
                        category.id
                    )));
                }
            }
        }
        Ok(CategoryCatalog { groups, index })
    }

    /// Parse a JSON array of groups.
    pub fn from_json(json: &str) -> Result<Self> {
        let groups: Vec<CategoryGroup> = serde_json::from_str(json)?;
        Self::from_groups(groups)
    }

    /// Load a JSON array of groups from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// An empty catalog that knows no categories.
    pub fn empty() -> Self {
        CategoryCatalog {
            groups: Vec::new(),
            index: HashMap::default(),
        }
    }

    /// The museum's category scheme.
    pub fn builtin() -> Self {
        let groups = BUILTIN_GROUPS
            .iter()
            .map(|(id, title, options)| CategoryGroup {
                id: id.to_string(),
                title: localized(title),
                options: options
                    .iter()
                    .map(|(id, name)| Category {
                        id: id.to_string(),
                        name: localized(name),
                    })
                    .collect(),
            })
            .collect();

        // The builtin table has unique ids.
        Self::from_groups(groups).unwrap_or_else(|_| Self::empty())
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.index
            .get(id)
            .map(|&(group, option)| &self.groups[group].options[option])
    }

    /// The group a category id belongs to.
    pub fn group_of(&self, id: &str) -> Option<&CategoryGroup> {
        self.index.get(id).map(|&(group, _)| &self.groups[group])
    }

    /// Display name of a category id, `None` for unknown ids.
    pub fn display_name(&self, id: &str, locale: Locale) -> Option<&str> {
        self.get(id).map(|category| category.name.get(locale))
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

type Names = [&'static str; 5];

fn localized(names: &Names) -> LocalizedName {
    LocalizedName::new(names[0], names[1], names[2], names[3], names[4])
}

#[rustfmt::skip]
const BUILTIN_GROUPS: &[(&str, Names, &[(&str, Names)])] = &[
    ("religion", ["Phong tục & Tôn giáo", "Customs & Religion", "习俗与宗教", "風習と宗教", "풍습 및 종교"], &[
        ("p", ["Phật giáo", "Buddhism", "佛教", "仏教", "불교"]),
        ("tg", ["Tôn giáo khác", "Other religions", "其他宗教", "その他の宗教", "기타 종교"]),
        ("pt", ["Phong tục", "Customs", "风俗", "風習", "풍습"]),
        ("tn", ["Tín ngưỡng", "Beliefs", "信仰", "信仰", "신앙"]),
    ]),
    ("genre", ["Thể loại", "Genre", "类型", "ジャンル", "장르"], &[
        ("kt", ["Kiến trúc", "Architecture", "建筑", "建築", "건축"]),
        ("tp", ["Trang phục", "Clothing", "服装", "衣装", "의상"]),
        ("hv", ["Hoa văn", "Patterns", "图案", "文様", "문양"]),
        ("vt", ["Văn thư", "Records", "文书", "文書", "문서"]),
        ("qs", ["Quân sự", "Military", "军事", "軍事", "군사"]),
        ("nc", ["Nhạc cụ", "Musical instrument", "乐器", "楽器", "악기"]),
        ("dc", ["Dụng cụ", "Utensils", "器具", "器具", "기구"]),
        ("dk", ["Điêu khắc", "Sculpture", "雕塑", "彫刻", "조각"]),
        ("bvqg", ["Bảo vật quốc gia", "National Treasure", "国宝", "国宝", "국보"]),
        ("dtqg", ["Di tích quốc gia", "National site", "国家古迹", "国家指定史跡", "국가 지정 문화재"]),
        ("dtqgdb", ["Di tích quốc gia đặc biệt", "Special national site", "全国重点文物保护单位", "特別史跡", "국가지정문화재"]),
        ("dstg", ["Di sản thế giới", "World Heritage", "世界遗产", "世界遺産", "세계 유산"]),
    ]),
    ("era", ["Thời đại", "Era", "时代", "時代", "시대"], &[
        ("cd", ["Cổ đại", "Antiquity", "古代", "古代", "고대"]),
        ("cp", ["Champa", "Champa", "占婆", "チャンパ", "참파"]),
        ("dl", ["Thời kỳ độc lập sau Bắc thuộc", "Post-Chinese rule", "越南独立时期", "北属期後の独立時期", "북속기 이후의 독립기"]),
        ("ly", ["Nhà Lý", "Ly Dynasty", "李朝", "李朝", "리 왕조"]),
        ("tran", ["Nhà Trần", "Tran Dynasty", "陈朝", "陳朝", "쩐 왕조"]),
        ("ho", ["Nhà Hồ", "Ho Dynasty", "胡朝", "胡朝", "호 왕조"]),
        ("le_so", ["Nhà Lê sơ", "Early Le Dynasty", "黎初朝", "黎朝", "레 왕조"]),
        ("mac", ["Nhà Mạc", "Mac Dynasty", "莫朝", "莫朝", "막 왕조"]),
        ("le_th", ["Nhà Lê trung hưng", "Revival Le Dynasty", "黎中興朝", "黎中興朝", "후기 레 왕조"]),
        ("tay_son", ["Nhà Tây sơn", "Tayson Dynasty", "西山朝", "西山朝", "떠이선 왕조"]),
        ("nguyen", ["Nhà Nguyễn", "Nguyen Dynasty", "阮朝", "阮朝", "응우옌 왕조"]),
        ("bac", ["Bắc thuộc", "Under Chinese rule", "時北屬", "時北屬", "북에 속함"]),
        ("phap", ["Pháp thuộc", "Under French rule", "時法國屬", "時法國屬", "프랑스 속함"]),
    ]),
    ("region", ["Khu vực", "Region", "地区", "地域", "지역"], &[
        ("m_bac", ["Miền Bắc", "Northern Region", "北部", "北部", "북부"]),
        ("m_trung", ["Miền Trung", "Central Region", "中部", "中部", "중부"]),
        ("m_nam", ["Miền Nam", "Southern Region", "南部", "南部", "남부"]),
        ("m_nui", ["Các dân tộc miền núi", "Highland ethnicities", "高地民族", "山岳民族", "산악 민족"]),
        ("ngoai_quoc", ["Ngoại quốc", "Foreign", "外国", "外国", "외국"]),
    ]),
];
