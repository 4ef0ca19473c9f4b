use lazy_static::lazy_static;
use regex::Regex;

use super::CharFilter;
use crate::error::{CurioError, Result};

lazy_static! {
    /// Punctuation removed before tokenization. Letters, digits, whitespace
    /// and combining marks are never part of this set.
    static ref PUNCTUATION: Regex = Regex::new(r"[.,/#!$%\^&*;:{}=\-_`~()]").unwrap();
}

/// Replaces every match of a regex.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| CurioError::analysis(format!("invalid pattern: {e}")))?;
        Ok(Self::from_regex(pattern, replacement))
    }

    pub fn from_regex(pattern: Regex, replacement: &str) -> Self {
        Self {
            pattern,
            replacement: replacement.to_string(),
        }
    }

    /// The filter that deletes the catalog punctuation set
    /// `. , / # ! $ % ^ & * ; : { } = - _ ` ~ ( )`.
    pub fn strip_punctuation() -> Self {
        Self::from_regex(PUNCTUATION.clone(), "")
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
