use super::Tokenizer;

use crate::analysis::token::{Token, TokenKind, TokenStream};

/// Splits text on runs of Unicode whitespace.
///
/// ```
/// use curio::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
///
/// let words: Vec<_> = WhitespaceTokenizer.tokenize("  bình \t gốm\nmen ").map(|t| t.text).collect();
/// assert_eq!(words, vec!["bình", "gốm", "men"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut words = Vec::new();
        let mut rest = text;
        let mut offset = 0;

        while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
            let tail = &rest[start..];
            let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
            let begin = offset + start;
            words.push(Token::word(&tail[..len], words.len(), begin..begin + len));

            offset = begin + len;
            rest = &text[offset..];
        }

        Box::new(words.into_iter())
    }

    fn kind(&self) -> TokenKind {
        TokenKind::Word
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_and_spans() {
        let text = "đồng  sơn\tcổ";
        let words: Vec<Token> = WhitespaceTokenizer.tokenize(text).collect();

        assert_eq!(words.len(), 3);
        assert_eq!(words[2].position, 2);
        for word in &words {
            assert_eq!(&text[word.span.clone()], word.text);
        }
        assert_eq!(words[1].span.start, "đồng  ".len());
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(WhitespaceTokenizer.tokenize("").count(), 0);
        assert_eq!(WhitespaceTokenizer.tokenize(" \t\n ").count(), 0);
    }

    #[test]
    fn test_kind() {
        assert!(WhitespaceTokenizer.tokenize("a b").all(|t| t.kind == TokenKind::Word));
    }
}
