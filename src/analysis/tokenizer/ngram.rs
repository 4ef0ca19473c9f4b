use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{CurioError, Result};

/// Cuts every window of `size` consecutive characters.
///
/// The window slides over the whole input one character at a time, spaces
/// included, so the junction between two words ("g đ" in "trống đồng")
/// becomes a gram of its own. Text shorter than `size` yields nothing.
///
/// ```
/// use curio::analysis::tokenizer::{NgramTokenizer, Tokenizer};
///
/// let grams: Vec<_> = NgramTokenizer::bigram().tokenize("gốm ổ").map(|t| t.text).collect();
/// assert_eq!(grams, vec!["gố", "ốm", "m ", " ổ"]);
/// ```
#[derive(Clone, Debug)]
pub struct NgramTokenizer {
    size: usize,
}

impl NgramTokenizer {
    /// # Errors
    ///
    /// Returns an error if `size` is 0.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(CurioError::analysis("n-gram size must be at least 1"));
        }
        Ok(NgramTokenizer { size })
    }

    pub fn bigram() -> Self {
        NgramTokenizer { size: 2 }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl Tokenizer for NgramTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        // Byte offset of each char boundary, the end of the text included.
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();

        let grams: Vec<Token> = bounds
            .windows(self.size + 1)
            .enumerate()
            .map(|(position, window)| {
                let span = window[0]..window[self.size];
                Token::gram(&text[span.clone()], position, span)
            })
            .collect();

        Box::new(grams.into_iter())
    }

    fn kind(&self) -> TokenKind {
        TokenKind::Gram
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grams(tokenizer: &NgramTokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text).map(|t| t.text).collect()
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(NgramTokenizer::new(0).is_err());
        assert_eq!(NgramTokenizer::new(3).unwrap().size(), 3);
    }

    #[test]
    fn test_bigrams_span_spaces() {
        let tokenizer = NgramTokenizer::bigram();
        assert_eq!(grams(&tokenizer, "ab cd"), vec!["ab", "b ", " c", "cd"]);
        assert_eq!(grams(&tokenizer, "đồng"), vec!["đồ", "ồn", "ng"]);
    }

    #[test]
    fn test_trigrams() {
        let tokenizer = NgramTokenizer::new(3).unwrap();
        assert_eq!(grams(&tokenizer, "trống"), vec!["trố", "rốn", "ống"]);
        assert_eq!(grams(&tokenizer, "gốm"), vec!["gốm"]);
    }

    #[test]
    fn test_multibyte_spans() {
        let text = "日本語";
        let tokens: Vec<Token> = NgramTokenizer::bigram().tokenize(text).collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].span, 0..6);
        assert_eq!(tokens[1].span, 3..9);
        assert_eq!(tokens[1].position, 1);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Gram));
    }

    #[test]
    fn test_short_text() {
        let tokenizer = NgramTokenizer::bigram();
        assert_eq!(tokenizer.tokenize("").count(), 0);
        assert_eq!(tokenizer.tokenize("a").count(), 0);
        assert_eq!(NgramTokenizer::new(4).unwrap().tokenize("gốm").count(), 0);
    }

    #[test]
    fn test_unit_grams_are_characters() {
        let tokenizer = NgramTokenizer::new(1).unwrap();
        assert_eq!(grams(&tokenizer, "ổ a"), vec!["ổ", " ", "a"]);
    }
}
