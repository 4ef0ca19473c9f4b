//! An analyzer assembled from interchangeable stages.
//!
//! ```
//! use std::sync::Arc;
//!
//! use curio::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use curio::analysis::char_filter::LowercaseCharFilter;
//! use curio::analysis::token_filter::{MinLengthFilter, PruneFilter};
//! use curio::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer))
//!     .char_filter(Arc::new(LowercaseCharFilter))
//!     .token_filter(Arc::new(MinLengthFilter::new(2)))
//!     .token_filter(Arc::new(PruneFilter))
//!     .named("catalog_words");
//!
//! let words: Vec<_> = analyzer.analyze("Bình Gốm A").map(|t| t.text).collect();
//! assert_eq!(words, vec!["bình", "gốm"]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::tokenizer::Tokenizer;

#[derive(Clone)]
pub struct PipelineAnalyzer {
    name: String,
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    token_filters: Vec<Arc<dyn TokenFilter>>,
}

impl PipelineAnalyzer {
    /// A pipeline with only a tokenizer, named after it.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: tokenizer.name().to_string(),
            char_filters: Vec::new(),
            tokenizer,
            token_filters: Vec::new(),
        }
    }

    /// Append a char filter; filters run in the order they are appended.
    pub fn char_filter(mut self, filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(filter);
        self
    }

    /// Append a token filter; filters run in the order they are appended.
    pub fn token_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.token_filters.push(filter);
        self
    }

    pub fn named<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    /// The text the tokenizer sees for `text`.
    pub fn filter_chars(&self, text: &str) -> String {
        self.char_filters
            .iter()
            .fold(text.to_string(), |text, filter| filter.apply(&text))
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        let text = self.filter_chars(text);
        self.token_filters
            .iter()
            .fold(self.tokenizer.tokenize(&text), |tokens, filter| filter.apply(tokens))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let char_filters: Vec<&str> = self.char_filters.iter().map(|c| c.name()).collect();
        let token_filters: Vec<&str> = self.token_filters.iter().map(|t| t.name()).collect();
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("char_filters", &char_filters)
            .field("tokenizer", &self.tokenizer.name())
            .field("token_filters", &token_filters)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::{LowercaseCharFilter, PatternReplaceCharFilter};
    use crate::analysis::token::TokenKind;
    use crate::analysis::token_filter::PruneFilter;
    use crate::analysis::tokenizer::{NgramTokenizer, WhitespaceTokenizer};

    fn words() -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer))
            .char_filter(Arc::new(LowercaseCharFilter))
            .char_filter(Arc::new(PatternReplaceCharFilter::strip_punctuation()))
            .token_filter(Arc::new(PruneFilter))
    }

    #[test]
    fn test_char_filters_run_in_order() {
        assert_eq!(words().filter_chars("Trống Đồng (Đông Sơn)"), "trống đồng đông sơn");
    }

    #[test]
    fn test_analyze_words() {
        let texts: Vec<String> = words().analyze("Áo dài - truyền thống!").map(|t| t.text).collect();
        assert_eq!(texts, vec!["áo", "dài", "truyền", "thống"]);
    }

    #[test]
    fn test_gram_pipeline() {
        let grams = PipelineAnalyzer::new(Arc::new(NgramTokenizer::bigram()))
            .char_filter(Arc::new(LowercaseCharFilter));
        assert_eq!(grams.name(), "ngram");
        assert_eq!(grams.tokenizer().kind(), TokenKind::Gram);

        let texts: Vec<String> = grams.analyze("ÁO").map(|t| t.text).collect();
        assert_eq!(texts, vec!["áo"]);
    }

    #[test]
    fn test_name_and_debug() {
        let analyzer = words().named("catalog");
        assert_eq!(analyzer.name(), "catalog");

        let debug = format!("{analyzer:?}");
        assert!(debug.contains("pattern_replace"));
        assert!(debug.contains("prune"));
        assert!(debug.contains("whitespace"));
    }
}
