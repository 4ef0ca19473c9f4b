use super::TokenFilter;
use crate::analysis::token::TokenStream;

/// Discards tokens shorter than `min_chars` characters.
///
/// Length counts Unicode scalar values: "đồ" is two characters, five bytes.
/// Discarded tokens stay in the stream until a
/// [`PruneFilter`](super::PruneFilter) removes them.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_chars: usize,
}

impl MinLengthFilter {
    pub fn new(min_chars: usize) -> Self {
        MinLengthFilter { min_chars }
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl TokenFilter for MinLengthFilter {
    fn apply(&self, tokens: TokenStream) -> TokenStream {
        let min_chars = self.min_chars;
        Box::new(tokens.map(move |token| {
            if token.char_len() < min_chars {
                token.discard()
            } else {
                token
            }
        }))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_single_characters_are_discarded() {
        let tokens = vec![
            Token::new("a", 0),
            Token::new("đồ", 1),
            Token::new("gốm", 2),
            Token::new("ố", 3),
        ];

        let flags: Vec<bool> = MinLengthFilter::new(2)
            .apply(Box::new(tokens.into_iter()))
            .map(|token| token.is_discarded())
            .collect();
        assert_eq!(flags, vec![true, false, false, true]);
    }

    #[test]
    fn test_zero_keeps_everything() {
        let tokens = vec![Token::new("", 0), Token::new("a", 1)];
        let filter = MinLengthFilter::new(0);
        assert!(filter.apply(Box::new(tokens.into_iter())).all(|t| !t.is_discarded()));
        assert_eq!(filter.min_chars(), 0);
    }
}
