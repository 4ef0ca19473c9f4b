//! # Curio
//!
//! Fuzzy text matching and ranking for museum artifact catalogs.
//!
//! ## Features
//!
//! - Unicode-aware normalization (Vietnamese diacritics, CJK)
//! - Set and multiset Jaccard, substring coverage, character n-grams
//! - One weighted composite score for free-text relevance
//! - Field-weighted item-to-item similarity for related artifacts
//! - Stable ranking, top-K selection and 1-based pagination
//! - Localized category catalog and group-aware category filtering
//!
//! ```
//! use curio::ranking::{Candidate, rank_by_query};
//!
//! let candidates = vec![
//!     Candidate::new("1", "trống đồng Đông Sơn"),
//!     Candidate::new("2", "áo dài truyền thống"),
//!     Candidate::new("3", "trống đồng cổ vật"),
//! ];
//! let ranked = rank_by_query("trống đồng", &candidates);
//! assert_eq!(ranked.len(), 2);
//! assert!(ranked.iter().all(|hit| hit.id != "2"));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod ranking;
pub mod scoring;
pub mod search;
pub mod similarity;

pub mod prelude {
    pub use crate::analysis::{NormalizedText, TextNormalizer, normalize};
    pub use crate::config::{FallbackOrder, SearchConfig};
    pub use crate::document::{Artifact, CategoryCatalog, CategoryFilter, Locale};
    pub use crate::error::{CurioError, Result};
    pub use crate::ranking::{Candidate, Page, Ranker, ScoredCandidate, paginate};
    pub use crate::scoring::{CompositeScorer, ItemFields, ScoreWeights, score};
    pub use crate::search::{ArtifactSearch, SearchRequest};
    pub use crate::similarity::{jaccard, multiset_jaccard, substring_score};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
