use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;

/// Drops discarded and blank tokens.
///
/// ```
/// use curio::analysis::token::Token;
/// use curio::analysis::token_filter::{PruneFilter, TokenFilter};
///
/// let tokens = vec![Token::new("bình", 0), Token::new("", 1), Token::new("a", 2).discard()];
/// let kept: Vec<_> = PruneFilter.apply(Box::new(tokens.into_iter())).map(|t| t.text).collect();
/// assert_eq!(kept, vec!["bình"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PruneFilter;

impl TokenFilter for PruneFilter {
    fn apply(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.filter(|token| !token.is_discarded() && !token.is_blank()))
    }

    fn name(&self) -> &'static str {
        "prune"
    }
}
