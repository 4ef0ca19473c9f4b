//! Artifact records, the category catalog and category filtering.

pub mod artifact;
pub mod category;
pub mod filter;

// Re-export commonly used types
pub use artifact::{Artifact, ArtifactBuilder};
pub use category::{Category, CategoryCatalog, CategoryGroup, Locale, LocalizedName};
pub use filter::CategoryFilter;
