//! Text analysis for catalog search.
//!
//! Raw text flows through char filters, a tokenizer and token filters, the
//! same pipeline shape used by full-text engines. [`normalizer`] wires these
//! parts into the normalization every similarity score is computed on.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use normalizer::{
    NGramMultiset, NGramSet, NormalizedText, TextNormalizer, WordMultiset, WordSet, normalize,
};
pub use token::{Token, TokenKind, TokenStream};
