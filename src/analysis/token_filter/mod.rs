//! Token filters applied after tokenization.

use crate::analysis::token::TokenStream;

pub trait TokenFilter: Send + Sync {
    fn apply(&self, tokens: TokenStream) -> TokenStream;

    fn name(&self) -> &'static str;
}

pub mod min_length;
pub mod prune;

pub use min_length::MinLengthFilter;
pub use prune::PruneFilter;
