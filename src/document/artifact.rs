//! Artifact records.
//!
//! Catalog rows arrive as header → value pairs from a spreadsheet export.
//! [`Artifact::from_row`] maps them onto typed fields once, at the edge, so
//! nothing downstream deals with loosely shaped rows.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::category::{CategoryCatalog, Locale};
use crate::scoring::ItemFields;

lazy_static! {
    /// Category ids are separated by whitespace and/or commas.
    static ref CATEGORY_SEPARATOR: Regex = Regex::new(r"[\s,]+").unwrap();
    /// Image and source links are separated by spaces, newlines, semicolons or commas.
    static ref LINK_SEPARATOR: Regex = Regex::new(r"[ \n;,]+").unwrap();
}

/// One museum artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artifact {
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub description: String,
    /// Raw category ids, see [`CategoryCatalog`].
    pub categories: Vec<String>,
    pub main_image: String,
    pub supporting_images: Vec<String>,
    pub sources: Vec<String>,
    pub author: String,
    pub contributor: String,
    pub artifact_date: String,
    /// Publication date, `dd-mm-yyyy`.
    pub public_date: String,
    /// Current location or find spot.
    pub location: String,
}

impl Artifact {
    /// Create a builder for constructing artifacts.
    pub fn builder() -> ArtifactBuilder {
        ArtifactBuilder::new()
    }

    /// Map one spreadsheet row onto an artifact.
    ///
    /// `row_number` is the 1-based number of the data row (the header row
    /// not counted) and becomes the id when the row has none. Rows with
    /// fewer cells than headers yield `None`; surplus cells are ignored.
    pub fn from_row<H, C>(headers: &[H], cells: &[C], row_number: usize) -> Option<Self>
    where
        H: AsRef<str>,
        C: AsRef<str>,
    {
        if cells.len() < headers.len() {
            return None;
        }
        let fields = headers
            .iter()
            .zip(cells)
            .map(|(header, cell)| (header.as_ref(), cell.as_ref()));
        Some(Self::from_fields(fields, row_number))
    }

    /// Build an artifact from header → value pairs.
    ///
    /// Headers are matched after trimming, values are trimmed, unknown
    /// headers are ignored. A missing or blank id is replaced by
    /// `row_number`.
    pub fn from_fields<I, K, V>(fields: I, row_number: usize) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut artifact = Artifact::default();
        for (header, value) in fields {
            artifact.set_field(header.as_ref().trim(), value.as_ref().trim());
        }
        if artifact.id.is_empty() {
            artifact.id = row_number.to_string();
        }
        artifact
    }

    fn set_field(&mut self, header: &str, value: &str) {
        match header {
            "id" => self.id = value.to_string(),
            "name" => self.name = value.to_string(),
            "short_description" => self.short_description = value.to_string(),
            "description" => self.description = value.to_string(),
            "categories" => self.categories = split_categories(value),
            "main_image" => self.main_image = value.to_string(),
            "supporting_images" => self.supporting_images = split_links(value),
            "sources" => self.sources = split_links(value),
            "author" => self.author = value.to_string(),
            "contributor" => self.contributor = value.to_string(),
            "artifact_date" => self.artifact_date = value.to_string(),
            "public_date" => self.public_date = value.to_string(),
            "location" => self.location = value.to_string(),
            _ => {}
        }
    }

    pub fn has_category(&self, id: &str) -> bool {
        self.categories.iter().any(|category| category == id)
    }

    /// Display names of this artifact's known categories.
    pub fn category_names<'a>(
        &'a self,
        catalog: &'a CategoryCatalog,
        locale: Locale,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.categories
            .iter()
            .filter_map(move |id| catalog.display_name(id, locale))
    }

    /// The text free-text search matches against: name, descriptions,
    /// localized category names, author, contributor, date and location.
    pub fn search_text(&self, catalog: &CategoryCatalog, locale: Locale) -> String {
        let category_names = self.category_names(catalog, locale).collect::<Vec<_>>().join(" ");

        [
            self.name.as_str(),
            self.short_description.as_str(),
            self.description.as_str(),
            category_names.as_str(),
            self.author.as_str(),
            self.contributor.as_str(),
            self.artifact_date.as_str(),
            self.location.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// The fields related-item ranking compares.
    pub fn similarity_fields(&self) -> ItemFields {
        ItemFields {
            id: self.id.clone(),
            name: self.name.clone(),
            short_description: self.short_description.clone(),
            description: self.description.clone(),
            categories: self.categories.clone(),
        }
    }
}

fn split_categories(value: &str) -> Vec<String> {
    CATEGORY_SEPARATOR
        .split(value)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_links(value: &str) -> Vec<String> {
    // An embed snippet contains separators of its own and stays whole.
    if value.contains("<iframe") {
        return vec![value.to_string()];
    }
    LINK_SEPARATOR
        .split(value)
        .map(str::trim)
        .filter(|link| !link.is_empty())
        .map(str::to_string)
        .collect()
}

/// A builder for constructing artifacts in a fluent manner.
#[derive(Debug, Default)]
pub struct ArtifactBuilder {
    artifact: Artifact,
}

impl ArtifactBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id<S: Into<String>>(mut self, id: S) -> Self {
        self.artifact.id = id.into();
        self
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.artifact.name = name.into();
        self
    }

    pub fn short_description<S: Into<String>>(mut self, text: S) -> Self {
        self.artifact.short_description = text.into();
        self
    }

    pub fn description<S: Into<String>>(mut self, text: S) -> Self {
        self.artifact.description = text.into();
        self
    }

    /// Add one category id.
    pub fn category<S: Into<String>>(mut self, id: S) -> Self {
        self.artifact.categories.push(id.into());
        self
    }

    pub fn author<S: Into<String>>(mut self, author: S) -> Self {
        self.artifact.author = author.into();
        self
    }

    pub fn contributor<S: Into<String>>(mut self, contributor: S) -> Self {
        self.artifact.contributor = contributor.into();
        self
    }

    pub fn artifact_date<S: Into<String>>(mut self, date: S) -> Self {
        self.artifact.artifact_date = date.into();
        self
    }

    pub fn location<S: Into<String>>(mut self, location: S) -> Self {
        self.artifact.location = location.into();
        self
    }

    pub fn build(self) -> Artifact {
        self.artifact
    }
}
