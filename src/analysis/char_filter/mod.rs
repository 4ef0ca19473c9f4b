//! Char filters rewrite the raw text before it is tokenized.
//!
//! They run in the order they were added to a pipeline. Both the words and
//! the character n-grams are cut from the filtered text, so every later
//! stage sees the same normalized string.
//!
//! ```
//! use curio::analysis::char_filter::{CharFilter, LowercaseCharFilter};
//!
//! assert_eq!(LowercaseCharFilter.apply("Trống Đồng"), "trống đồng");
//! ```

pub trait CharFilter: Send + Sync {
    fn apply(&self, text: &str) -> String;

    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;
pub mod unicode_normalize;

pub use lowercase::LowercaseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
pub use unicode_normalize::{NormalizationForm, UnicodeNormalizationCharFilter};
