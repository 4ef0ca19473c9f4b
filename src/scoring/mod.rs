//! Relevance scoring.
//!
//! [`CompositeScorer`] ranks free text against a query. [`ItemSimilarity`]
//! compares two structured catalog items field by field.

pub mod composite;
pub mod item;

pub use composite::{CompositeScorer, ScoreBreakdown, ScoreWeights, score};
pub use item::{FieldWeights, ItemFields, ItemProfile, ItemSimilarity};
