//! Analyzers turn raw text into a token stream.
//!
//! ```text
//! raw text → char filters → tokenizer → token filters → tokens
//! ```

mod pipeline;

pub use pipeline::PipelineAnalyzer;

use crate::analysis::token::TokenStream;

/// `Send + Sync` so one configured analyzer can serve several threads.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> TokenStream;

    fn name(&self) -> &str;
}
