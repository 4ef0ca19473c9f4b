//! Item-to-item similarity over structured fields.
//!
//! Two items are compared field by field with set Jaccard and the results
//! are summed with per-field weights:
//!
//! ```text
//! name × 50 + (short_description + " " + description) × 30 + categories × 20
//! ```
//!
//! The sum is only meaningful relative to other scores for the same target.

use std::collections::HashSet;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{TextNormalizer, WordSet};
use crate::error::{CurioError, Result};
use crate::similarity::jaccard;

/// Set of raw category ids.
pub type CategorySet = HashSet<String, RandomState>;

/// Per-field weights of the item similarity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub name: f64,
    pub description: f64,
    pub categories: f64,
}

impl FieldWeights {
    pub fn new(name: f64, description: f64, categories: f64) -> Self {
        FieldWeights {
            name,
            description,
            categories,
        }
    }

    /// Reject negative or non-finite weights.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", self.name),
            ("description", self.description),
            ("categories", self.categories),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CurioError::config(format!(
                    "field weight '{field}' must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights::new(50.0, 30.0, 20.0)
    }
}

/// The structured fields an item is compared on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub description: String,
    /// Raw category ids, compared as-is without tokenization.
    pub categories: Vec<String>,
}

/// Pre-tokenized fields of one item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemProfile {
    pub id: String,
    pub name: WordSet,
    pub description: WordSet,
    pub categories: CategorySet,
}

/// Scores how alike two structured items are.
#[derive(Clone, Debug, Default)]
pub struct ItemSimilarity {
    normalizer: TextNormalizer,
    weights: FieldWeights,
}

impl ItemSimilarity {
    pub fn new(weights: FieldWeights) -> Result<Self> {
        weights.validate()?;
        Ok(ItemSimilarity {
            normalizer: TextNormalizer::default(),
            weights,
        })
    }

    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }

    /// Tokenize the fields of one item.
    pub fn profile(&self, fields: &ItemFields) -> ItemProfile {
        let description = format!("{} {}", fields.short_description, fields.description);
        ItemProfile {
            id: fields.id.clone(),
            name: self.normalizer.word_set(&fields.name),
            description: self.normalizer.word_set(&description),
            categories: fields.categories.iter().cloned().collect(),
        }
    }

    /// Weighted similarity of two profiles.
    pub fn score(&self, a: &ItemProfile, b: &ItemProfile) -> f64 {
        jaccard(&a.name, &b.name) * self.weights.name
            + jaccard(&a.description, &b.description) * self.weights.description
            + jaccard(&a.categories, &b.categories) * self.weights.categories
    }

    /// Weighted similarity of two items, tokenizing both.
    pub fn score_fields(&self, a: &ItemFields, b: &ItemFields) -> f64 {
        self.score(&self.profile(a), &self.profile(b))
    }
}
