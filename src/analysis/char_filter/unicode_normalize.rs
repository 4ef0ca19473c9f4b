use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::CharFilter;

/// Composing Unicode normalization forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationForm {
    /// Canonical composition.
    #[default]
    Nfc,
    /// Compatibility composition; also folds full-width forms.
    Nfkc,
}

/// Composes text to NFC or NFKC.
///
/// Catalog text mixes precomposed letters with base letters followed by
/// combining tone marks. After composition both spellings of "gốm" are the
/// same string and the diacritics survive.
#[derive(Clone, Debug, Default)]
pub struct UnicodeNormalizationCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizationCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> NormalizationForm {
        self.form
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn apply(&self, text: &str) -> String {
        match self.form {
            NormalizationForm::Nfc => text.nfc().collect(),
            NormalizationForm::Nfkc => text.nfkc().collect(),
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combining_marks_compose() {
        let filter = UnicodeNormalizationCharFilter::default();
        let composed = "g\u{1ED1}m";
        let decomposed = "go\u{0302}\u{0301}m";

        assert_eq!(filter.apply(decomposed), composed);
        assert_eq!(filter.apply(composed), composed);
    }

    #[test]
    fn test_nfkc_folds_full_width() {
        let filter = UnicodeNormalizationCharFilter::new(NormalizationForm::Nfkc);
        assert_eq!(filter.apply("１２３"), "123");
        assert_eq!(UnicodeNormalizationCharFilter::default().apply("１２３"), "１２３");
    }
}
