//! Weighted combination of the similarity primitives.
//!
//! ```text
//! score = substring × 0.5 + multiset_jaccard(words) × 0.25 + multiset_jaccard(ngrams) × 0.25
//! ```
//!
//! The substring term rewards literal containment, the word term rewards
//! shared vocabulary and the n-gram term tolerates typos and partial words.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{NormalizedText, TextNormalizer};
use crate::error::{CurioError, Result};
use crate::similarity::{coverage, multiset_jaccard};

lazy_static! {
    static ref DEFAULT_SCORER: CompositeScorer = CompositeScorer::default();
}

/// Score `text` against `query` with the default weights and bigrams.
///
/// # Examples
///
/// ```
/// use curio::scoring::score;
///
/// assert_eq!(score("bình gốm", "bình gốm"), 1.0);
/// assert_eq!(score("trống đồng", ""), 0.0);
/// ```
pub fn score(query: &str, text: &str) -> f64 {
    DEFAULT_SCORER.score(query, text)
}

/// Weights of the three composite signals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of the substring/word-coverage score.
    pub substring: f64,
    /// Weight of the word multiset Jaccard.
    pub words: f64,
    /// Weight of the character n-gram multiset Jaccard.
    pub ngrams: f64,
}

impl ScoreWeights {
    pub fn new(substring: f64, words: f64, ngrams: f64) -> Self {
        ScoreWeights {
            substring,
            words,
            ngrams,
        }
    }

    /// Sum of all weights; the upper bound of a composite score.
    pub fn total(&self) -> f64 {
        self.substring + self.words + self.ngrams
    }

    /// Reject negative or non-finite weights.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("substring", self.substring),
            ("words", self.words),
            ("ngrams", self.ngrams),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CurioError::config(format!(
                    "weight '{name}' must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights::new(0.5, 0.25, 0.25)
    }
}

/// The components of one composite score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Substring/word-coverage score in `[0, 1]`.
    pub substring: f64,
    /// Word multiset Jaccard in `[0, 1]`.
    pub words: f64,
    /// Character n-gram multiset Jaccard in `[0, 1]`.
    pub ngrams: f64,
    /// Weighted sum of the three components.
    pub total: f64,
}

/// Scores free text against a query.
#[derive(Clone, Debug)]
pub struct CompositeScorer {
    normalizer: TextNormalizer,
    weights: ScoreWeights,
}

impl CompositeScorer {
    /// Create a scorer with custom weights and n-gram width.
    pub fn new(weights: ScoreWeights, ngram_size: usize) -> Result<Self> {
        weights.validate()?;
        Ok(CompositeScorer {
            normalizer: TextNormalizer::new(ngram_size)?,
            weights,
        })
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Normalize text with this scorer's normalizer.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        self.normalizer.normalize(text)
    }

    /// Composite relevance of `text` for `query`.
    pub fn score(&self, query: &str, text: &str) -> f64 {
        self.explain(query, text).total
    }

    /// Composite relevance with every component spelled out.
    pub fn explain(&self, query: &str, text: &str) -> ScoreBreakdown {
        self.explain_normalized(&self.normalize(query), &self.normalize(text))
    }

    /// [`CompositeScorer::score`] over already normalized inputs.
    pub fn score_normalized(&self, query: &NormalizedText, text: &NormalizedText) -> f64 {
        self.explain_normalized(query, text).total
    }

    /// [`CompositeScorer::explain`] over already normalized inputs.
    pub fn explain_normalized(
        &self,
        query: &NormalizedText,
        text: &NormalizedText,
    ) -> ScoreBreakdown {
        let substring = coverage(query, text);
        let words = multiset_jaccard(&query.word_counts, &text.word_counts);
        let ngrams = multiset_jaccard(&query.ngram_counts, &text.ngram_counts);

        ScoreBreakdown {
            substring,
            words,
            ngrams,
            total: substring * self.weights.substring
                + words * self.weights.words
                + ngrams * self.weights.ngrams,
        }
    }
}

impl Default for CompositeScorer {
    fn default() -> Self {
        CompositeScorer {
            normalizer: TextNormalizer::default(),
            weights: ScoreWeights::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_similarity() {
        assert_eq!(score("bình gốm", "bình gốm"), 1.0);
        assert_eq!(score("Trống Đồng!", "trống đồng"), 1.0);
    }

    #[test]
    fn test_unrelated_text() {
        assert_eq!(score("trống đồng", "áo dài lụa"), 0.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(score("", ""), 0.0);
        assert_eq!(score("", "bình gốm"), 0.0);
        assert_eq!(score("bình gốm", ""), 0.0);
    }

    #[test]
    fn test_breakdown() {
        let scorer = CompositeScorer::default();
        let breakdown = scorer.explain("trống đồng", "trống đồng đông sơn");

        assert_eq!(breakdown.substring, 1.0);
        assert_eq!(breakdown.words, 0.5);
        assert!(breakdown.ngrams > 0.0 && breakdown.ngrams < 1.0);
        let expected = 0.5 + 0.5 * 0.25 + breakdown.ngrams * 0.25;
        assert!((breakdown.total - expected).abs() < 1e-12);
    }

    #[test]
    fn test_bounds() {
        let pairs = [
            ("bình gốm", "bình gốm men lam thời Lý"),
            ("gốm gốm gốm", "gốm"),
            ("ab", "ba"),
            ("国宝", "国宝 仏教"),
            ("x", "y"),
        ];
        for (query, text) in pairs {
            let value = score(query, text);
            assert!((0.0..=1.0).contains(&value), "{query:?} / {text:?} → {value}");
        }
    }

    #[test]
    fn test_custom_weights() {
        let scorer = CompositeScorer::new(ScoreWeights::new(1.0, 0.0, 0.0), 2).unwrap();
        assert_eq!(scorer.score("trống gốm", "trống đồng"), 0.5);

        let scorer = CompositeScorer::new(ScoreWeights::new(0.0, 1.0, 0.0), 3).unwrap();
        assert_eq!(scorer.score("bình gốm", "bình men"), 1.0 / 3.0);
        assert_eq!(scorer.normalizer().ngram_size(), 3);
    }

    #[test]
    fn test_invalid_weights() {
        assert!(CompositeScorer::new(ScoreWeights::new(-0.1, 0.5, 0.5), 2).is_err());
        assert!(CompositeScorer::new(ScoreWeights::new(f64::NAN, 0.5, 0.5), 2).is_err());
        assert!(CompositeScorer::new(ScoreWeights::default(), 0).is_err());
    }

    #[test]
    fn test_weights_default_and_serde() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.total(), 1.0);

        let parsed: ScoreWeights = serde_json::from_str(r#"{"substring": 0.6}"#).unwrap();
        assert_eq!(parsed, ScoreWeights::new(0.6, 0.25, 0.25));
    }
}
