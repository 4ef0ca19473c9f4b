//! Tokenizers cutting normalized text into words or character n-grams.

use crate::analysis::token::{TokenKind, TokenStream};

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> TokenStream;

    /// The kind of every token this tokenizer emits.
    fn kind(&self) -> TokenKind;

    fn name(&self) -> &'static str;
}

pub mod ngram;
pub mod whitespace;

pub use ngram::NgramTokenizer;
pub use whitespace::WhitespaceTokenizer;
