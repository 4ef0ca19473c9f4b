//! Ranking of candidate collections and pagination of the results.

pub mod collector;
pub mod pagination;
pub mod ranker;

pub use collector::{AllHitsCollector, Collector, RankedHit, TopHitsCollector};
pub use pagination::{Page, paginate, total_pages};
pub use ranker::{Candidate, Ranker, ScoredCandidate, rank_by_query, rank_similar};
