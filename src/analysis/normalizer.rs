//! Text normalization for similarity scoring.
//!
//! [`TextNormalizer`] turns raw text into every representation the
//! similarity primitives compare:
//!
//! | Field          | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | `text`         | lowercased, punctuation-free tokens joined by a space |
//! | `words`        | distinct tokens with at least two characters          |
//! | `word_counts`  | every token with its number of occurrences            |
//! | `ngrams`       | distinct character n-grams of `text`                  |
//! | `ngram_counts` | character n-grams of `text` with their occurrences    |
//!
//! Query and document go through the same normalizer, so both sides of a
//! comparison are normalized identically.
//!
//! # Examples
//!
//! ```
//! use curio::analysis::normalize;
//!
//! let normalized = normalize("Bình gốm, bình MEN!");
//! assert_eq!(normalized.text, "bình gốm bình men");
//! assert_eq!(normalized.word_counts["bình"], 2);
//! assert_eq!(normalized.words.len(), 3);
//! assert!(normalized.ngrams.contains("m "));
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use ahash::RandomState;
use lazy_static::lazy_static;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::{
    LowercaseCharFilter, NormalizationForm, PatternReplaceCharFilter,
    UnicodeNormalizationCharFilter,
};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{MinLengthFilter, PruneFilter, TokenFilter};
use crate::analysis::tokenizer::{NgramTokenizer, Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Default character n-gram width.
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Tokens shorter than this many characters are left out of a [`WordSet`].
pub const MIN_WORD_CHARS: usize = 2;

/// Deduplicated normalized tokens.
pub type WordSet = HashSet<String, RandomState>;

/// Normalized token → occurrence count.
pub type WordMultiset = HashMap<String, usize, RandomState>;

/// Deduplicated character n-grams.
pub type NGramSet = HashSet<String, RandomState>;

/// Character n-gram → occurrence count.
pub type NGramMultiset = HashMap<String, usize, RandomState>;

lazy_static! {
    static ref DEFAULT_NORMALIZER: TextNormalizer = TextNormalizer::default();
}

/// Normalize `text` with the default normalizer (bigrams).
pub fn normalize(text: &str) -> NormalizedText {
    DEFAULT_NORMALIZER.normalize(text)
}

/// The normalized representations of one piece of text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedText {
    /// Normalized tokens joined by single spaces.
    pub text: String,
    /// Distinct tokens of at least [`MIN_WORD_CHARS`] characters.
    pub words: WordSet,
    /// All tokens with their occurrence counts.
    pub word_counts: WordMultiset,
    /// Distinct character n-grams of `text`.
    pub ngrams: NGramSet,
    /// Character n-grams of `text` with their occurrence counts.
    pub ngram_counts: NGramMultiset,
}

impl NormalizedText {
    /// True when the text held no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the normalized tokens in their original order,
    /// repeated tokens included.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ').filter(|token| !token.is_empty())
    }
}

/// Lowercases, strips punctuation and tokenizes text for similarity scoring.
#[derive(Clone)]
pub struct TextNormalizer {
    analyzer: PipelineAnalyzer,
    word_filters: Vec<Arc<dyn TokenFilter>>,
    ngram_tokenizer: NgramTokenizer,
}

impl TextNormalizer {
    /// Create a normalizer producing character n-grams of width `ngram_size`.
    ///
    /// # Errors
    ///
    /// Returns an error if `ngram_size` is 0.
    pub fn new(ngram_size: usize) -> Result<Self> {
        Ok(Self::with_ngram_tokenizer(NgramTokenizer::new(ngram_size)?))
    }

    fn with_ngram_tokenizer(ngram_tokenizer: NgramTokenizer) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer))
            .char_filter(Arc::new(UnicodeNormalizationCharFilter::new(
                NormalizationForm::Nfc,
            )))
            .char_filter(Arc::new(LowercaseCharFilter))
            .char_filter(Arc::new(PatternReplaceCharFilter::strip_punctuation()))
            .token_filter(Arc::new(PruneFilter))
            .named("catalog_text");

        TextNormalizer {
            analyzer,
            word_filters: vec![
                Arc::new(MinLengthFilter::new(MIN_WORD_CHARS)),
                Arc::new(PruneFilter),
            ],
            ngram_tokenizer,
        }
    }

    /// Width of the character n-grams this normalizer produces.
    pub fn ngram_size(&self) -> usize {
        self.ngram_tokenizer.size()
    }

    /// The analyzer that turns raw text into normalized tokens.
    pub fn analyzer(&self) -> &PipelineAnalyzer {
        &self.analyzer
    }

    /// Normalize `text` into its word set, word multiset and n-gram sets.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let tokens: Vec<Token> = self.analyzer.analyze(text).collect();

        let normalized = tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let mut word_counts = WordMultiset::default();
        for token in &tokens {
            *word_counts.entry(token.text.clone()).or_insert(0) += 1;
        }

        let words = self.collect_words(Box::new(tokens.into_iter()));

        let mut ngram_counts = NGramMultiset::default();
        for gram in self.ngram_tokenizer.tokenize(&normalized) {
            *ngram_counts.entry(gram.text).or_insert(0) += 1;
        }
        let ngrams: NGramSet = ngram_counts.keys().cloned().collect();

        NormalizedText {
            text: normalized,
            words,
            word_counts,
            ngrams,
            ngram_counts,
        }
    }

    /// The [`WordSet`] of `text`, without computing the n-grams.
    pub fn word_set(&self, text: &str) -> WordSet {
        self.collect_words(self.analyzer.analyze(text))
    }

    fn collect_words(&self, tokens: TokenStream) -> WordSet {
        self.word_filters
            .iter()
            .fold(tokens, |tokens, filter| filter.apply(tokens))
            .map(|token| token.text)
            .collect()
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("analyzer", &self.analyzer)
            .field(
                "word_filters",
                &self.word_filters.iter().map(|filter| filter.name()).collect::<Vec<_>>(),
            )
            .field("ngram_size", &self.ngram_size())
            .finish()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::with_ngram_tokenizer(NgramTokenizer::bigram())
    }
}
