//! Tokens flowing through an analysis pipeline.
//!
//! A tokenizer cuts either whole words or character n-grams out of the
//! normalized text; [`TokenKind`] records which. Token filters never remove
//! tokens directly: they mark them as discarded, and a
//! [`PruneFilter`](crate::analysis::token_filter::PruneFilter) at the end of
//! the chain drops them.
//!
//! ```
//! use curio::analysis::token::{Token, TokenKind};
//!
//! let token = Token::word("gốm", 1, 6..10);
//! assert_eq!(token.kind, TokenKind::Word);
//! assert_eq!(token.char_len(), 3);
//! assert!(!token.is_discarded());
//! assert!(token.discard().is_discarded());
//! ```

use std::fmt;
use std::ops::Range;

/// What a token was cut from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A whitespace-delimited word.
    Word,
    /// A window of consecutive characters, possibly spanning words.
    Gram,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Index of the token in its stream.
    pub position: usize,
    /// Byte range of the token in the analyzed text.
    pub span: Range<usize>,
    pub kind: TokenKind,
    discarded: bool,
}

impl Token {
    /// A word token with no source span, mostly useful in tests.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let span = 0..text.len();
        Self::word(text, position, span)
    }

    pub fn word<S: Into<String>>(text: S, position: usize, span: Range<usize>) -> Self {
        Token {
            text: text.into(),
            position,
            span,
            kind: TokenKind::Word,
            discarded: false,
        }
    }

    pub fn gram<S: Into<String>>(text: S, position: usize, span: Range<usize>) -> Self {
        Token {
            kind: TokenKind::Gram,
            ..Self::word(text, position, span)
        }
    }

    /// Number of Unicode scalar values in the text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Mark the token for removal by a later prune step.
    pub fn discard(mut self) -> Self {
        self.discarded = true;
        self
    }

    pub fn is_discarded(&self) -> bool {
        self.discarded
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Tokens produced lazily by a tokenizer or token filter.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_spans_whole_text() {
        let token = Token::new("đồng", 2);
        assert_eq!(token.position, 2);
        assert_eq!(token.span, 0.."đồng".len());
        assert_eq!(token.kind, TokenKind::Word);
    }

    #[test]
    fn test_char_len_counts_scalars() {
        let token = Token::new("đồng", 0);
        assert_eq!(token.char_len(), 4);
        assert_eq!(token.text.len(), 7);
    }

    #[test]
    fn test_gram_kind() {
        let token = Token::gram("g ", 0, 0..2);
        assert_eq!(token.kind, TokenKind::Gram);
        assert_eq!(token.to_string(), "g ");
    }

    #[test]
    fn test_blank() {
        assert!(Token::new("", 0).is_blank());
        assert!(Token::new(" \t", 0).is_blank());
        assert!(!Token::new("ố", 0).is_blank());
    }
}
