//! Search configuration.
//!
//! Every field has a default, so a configuration file only needs to name
//! the values it changes:
//!
//! ```json
//! {
//!   "page_size": 24,
//!   "weights": { "substring": 0.6, "words": 0.2, "ngrams": 0.2 },
//!   "similar": { "top_k": 8 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::DEFAULT_NGRAM_SIZE;
use crate::error::{CurioError, Result};
use crate::scoring::{FieldWeights, ScoreWeights};

/// Results per page of a catalog search.
pub const DEFAULT_PAGE_SIZE: usize = 18;

/// Related items returned for one artifact.
pub const DEFAULT_SIMILAR_TOP_K: usize = 12;

/// Order of the candidates when the query is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackOrder {
    /// Keep the input order.
    Insertion,
    /// Reverse the input order (newest rows first).
    ReverseInsertion,
    /// Sort by id, highest first: integer ids by value, then the
    /// remaining ids as text.
    #[default]
    IdDescending,
}

impl FallbackOrder {
    /// Positions of `ids` in this order.
    pub fn arrange<S: AsRef<str>>(&self, ids: &[S]) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..ids.len()).collect();
        match self {
            FallbackOrder::Insertion => {}
            FallbackOrder::ReverseInsertion => positions.reverse(),
            FallbackOrder::IdDescending => {
                positions.sort_by(|&a, &b| id_key(ids[b].as_ref()).cmp(&id_key(ids[a].as_ref())))
            }
        }
        positions
    }
}

/// Sort key of an id. Every integer id ranks above every other id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum IdKey<'a> {
    Text(&'a str),
    Number(u64),
}

fn id_key(id: &str) -> IdKey<'_> {
    match id.parse::<u64>() {
        Ok(number) => IdKey::Number(number),
        Err(_) => IdKey::Text(id),
    }
}

/// Settings of the related-items ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarConfig {
    #[serde(default)]
    pub field_weights: FieldWeights,

    /// Number of related items to keep.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_SIMILAR_TOP_K
}

impl Default for SimilarConfig {
    fn default() -> Self {
        Self {
            field_weights: FieldWeights::default(),
            top_k: DEFAULT_SIMILAR_TOP_K,
        }
    }
}

/// Settings of free-text ranking and pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Weights of the composite score.
    #[serde(default)]
    pub weights: ScoreWeights,

    /// Width of the character n-grams.
    #[serde(default = "default_ngram_size")]
    pub ngram_size: usize,

    /// Keep a candidate only if at least one query word occurs in its text.
    #[serde(default = "default_true")]
    pub require_term_match: bool,

    /// Candidates must score strictly above this value.
    #[serde(default)]
    pub min_score: f64,

    /// Order used when the query is empty.
    #[serde(default)]
    pub fallback_order: FallbackOrder,

    /// Results per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub similar: SimilarConfig,
}

fn default_ngram_size() -> usize {
    DEFAULT_NGRAM_SIZE
}
fn default_true() -> bool {
    true
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            ngram_size: DEFAULT_NGRAM_SIZE,
            require_term_match: true,
            min_score: 0.0,
            fallback_order: FallbackOrder::default(),
            page_size: DEFAULT_PAGE_SIZE,
            similar: SimilarConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CurioError::config(format!("cannot read config {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.ngram_size == 0 {
            return Err(CurioError::config("ngram_size must be at least 1"));
        }
        if self.page_size == 0 {
            return Err(CurioError::config("page_size must be at least 1"));
        }
        if !self.min_score.is_finite() {
            return Err(CurioError::config("min_score must be a finite number"));
        }
        self.weights.validate()?;
        self.similar.field_weights.validate()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.weights, ScoreWeights::new(0.5, 0.25, 0.25));
        assert_eq!(config.ngram_size, 2);
        assert!(config.require_term_match);
        assert_eq!(config.min_score, 0.0);
        assert_eq!(config.fallback_order, FallbackOrder::IdDescending);
        assert_eq!(config.page_size, 18);
        assert_eq!(config.similar.top_k, 12);
        assert_eq!(config.similar.field_weights, FieldWeights::new(50.0, 30.0, 20.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(SearchConfig::from_json("{}").unwrap(), SearchConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = SearchConfig::from_json(
            r#"{
                "page_size": 24,
                "fallback_order": "reverse_insertion",
                "similar": { "top_k": 8 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.page_size, 24);
        assert_eq!(config.fallback_order, FallbackOrder::ReverseInsertion);
        assert_eq!(config.similar.top_k, 8);
        assert_eq!(config.similar.field_weights, FieldWeights::default());
        assert_eq!(config.ngram_size, 2);
    }

    #[test]
    fn test_validation() {
        let config = SearchConfig {
            ngram_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SearchConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SearchConfig {
            weights: ScoreWeights::new(0.5, -0.25, 0.25),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        assert!(SearchConfig::from_json(r#"{"ngram_size": 0}"#).is_err());
        assert!(SearchConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_fallback_insertion() {
        let ids = ["b", "a", "c"];
        assert_eq!(FallbackOrder::Insertion.arrange(&ids), vec![0, 1, 2]);
        assert_eq!(FallbackOrder::ReverseInsertion.arrange(&ids), vec![2, 1, 0]);
    }

    #[test]
    fn test_fallback_id_descending() {
        let ids = ["9", "10", "2"];
        assert_eq!(FallbackOrder::IdDescending.arrange(&ids), vec![1, 0, 2]);

        let ids = ["b", "c", "a"];
        assert_eq!(FallbackOrder::IdDescending.arrange(&ids), vec![1, 0, 2]);
    }

    #[test]
    fn test_fallback_id_descending_is_stable() {
        let ids = ["5", "7", "5"];
        assert_eq!(FallbackOrder::IdDescending.arrange(&ids), vec![1, 0, 2]);
    }

    #[test]
    fn test_fallback_mixed_ids() {
        let ids = ["2", "10", "1a", "b", "007", "1"];
        assert_eq!(FallbackOrder::IdDescending.arrange(&ids), vec![1, 4, 0, 5, 3, 2]);
    }

    #[test]
    fn test_fallback_mixed_ids_match_key_order() {
        let ids: Vec<String> = (0..200)
            .map(|i| if i % 3 == 0 { format!("{i}a") } else { (i * 7 % 101).to_string() })
            .collect();

        let mut expected: Vec<usize> = (0..ids.len()).collect();
        expected.sort_by_key(|&i| std::cmp::Reverse(id_key(&ids[i])));

        let arranged = FallbackOrder::IdDescending.arrange(&ids);
        assert_eq!(arranged, expected);
        for pair in arranged.windows(2) {
            assert!(id_key(&ids[pair[0]]) >= id_key(&ids[pair[1]]));
        }
    }

    #[test]
    fn test_fallback_empty() {
        let ids: [&str; 0] = [];
        assert!(FallbackOrder::IdDescending.arrange(&ids).is_empty());
    }
}
