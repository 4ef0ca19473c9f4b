//! Similarity primitives.
//!
//! Every primitive is total: empty inputs and empty unions yield 0 rather
//! than an error or NaN, and every result lies in `[0, 1]`.

pub mod coverage;
pub mod jaccard;

pub use coverage::{coverage, substring_score};
pub use jaccard::{jaccard, multiset_jaccard};
