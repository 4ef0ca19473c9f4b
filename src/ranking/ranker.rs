//! Ranking of candidate collections.
//!
//! A [`Ranker`] holds no state between calls; every ranking scores its
//! candidates from scratch.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::config::{FallbackOrder, SearchConfig};
use crate::error::Result;
use crate::ranking::collector::{AllHitsCollector, Collector, RankedHit, TopHitsCollector};
use crate::scoring::{CompositeScorer, ItemFields, ItemSimilarity};

lazy_static! {
    static ref DEFAULT_RANKER: Ranker = Ranker::default();
}

/// Rank `candidates` against `query` with the default configuration.
pub fn rank_by_query(query: &str, candidates: &[Candidate]) -> Vec<ScoredCandidate> {
    DEFAULT_RANKER.rank_by_query(query, candidates)
}

/// The `top_k` candidates most similar to `target` with the default field
/// weights.
pub fn rank_similar(
    target: &ItemFields,
    candidates: &[ItemFields],
    top_k: usize,
) -> Vec<ScoredCandidate> {
    DEFAULT_RANKER.rank_similar(target, candidates, top_k)
}

/// A searchable item reduced to its id and text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub text: String,
}

impl Candidate {
    pub fn new<I: Into<String>, T: Into<String>>(id: I, text: T) -> Self {
        Candidate {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// An item id with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub id: String,
    pub score: f64,
}

/// Scores, filters and orders candidates.
#[derive(Debug, Clone)]
pub struct Ranker {
    scorer: CompositeScorer,
    item_similarity: ItemSimilarity,
    require_term_match: bool,
    min_score: f64,
    fallback_order: FallbackOrder,
}

impl Ranker {
    /// Create a ranker from a validated configuration.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Ranker {
            scorer: CompositeScorer::new(config.weights, config.ngram_size)?,
            item_similarity: ItemSimilarity::new(config.similar.field_weights)?,
            require_term_match: config.require_term_match,
            min_score: config.min_score,
            fallback_order: config.fallback_order,
        })
    }

    pub fn scorer(&self) -> &CompositeScorer {
        &self.scorer
    }

    pub fn item_similarity(&self) -> &ItemSimilarity {
        &self.item_similarity
    }

    pub fn fallback_order(&self) -> FallbackOrder {
        self.fallback_order
    }

    /// Rank `candidates` against `query`, returning their positions.
    ///
    /// An empty query skips scoring: every candidate is returned with score
    /// 0 in the fallback order. Otherwise only candidates scoring above the
    /// minimum score (and matching at least one query word, when the term
    /// match is required) are kept, best first. Equal scores keep their
    /// input order.
    pub fn rank_hits(&self, query: &str, candidates: &[Candidate]) -> Vec<RankedHit> {
        let query = self.scorer.normalize(query);
        if query.is_empty() {
            log::debug!(
                target: "curio::ranking",
                "empty query, ordering {} candidates by {:?}",
                candidates.len(),
                self.fallback_order
            );
            let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
            return self
                .fallback_order
                .arrange(&ids)
                .into_iter()
                .map(|position| RankedHit::new(position, 0.0))
                .collect();
        }

        let mut collector = AllHitsCollector::with_capacity(candidates.len());
        for (position, candidate) in candidates.iter().enumerate() {
            let text = self.scorer.normalize(&candidate.text);
            let breakdown = self.scorer.explain_normalized(&query, &text);

            if self.require_term_match && breakdown.substring <= 0.0 {
                continue;
            }
            if breakdown.total > self.min_score {
                collector.collect(position, breakdown.total);
            }
        }

        log::debug!(
            target: "curio::ranking",
            "query {:?} kept {} of {} candidates",
            query.text,
            collector.total_hits(),
            candidates.len()
        );
        collector.results()
    }

    /// Rank `candidates` against `query`, returning ids with scores.
    pub fn rank_by_query(&self, query: &str, candidates: &[Candidate]) -> Vec<ScoredCandidate> {
        self.rank_hits(query, candidates)
            .into_iter()
            .map(|hit| ScoredCandidate {
                id: candidates[hit.position].id.clone(),
                score: hit.score,
            })
            .collect()
    }

    /// The `top_k` candidates most similar to `target`, as positions.
    ///
    /// Candidates sharing the target's id are skipped. No score threshold
    /// applies, so unrelated items still fill the list.
    pub fn similar_hits(
        &self,
        target: &ItemFields,
        candidates: &[ItemFields],
        top_k: usize,
    ) -> Vec<RankedHit> {
        let profile = self.item_similarity.profile(target);

        let mut collector = TopHitsCollector::new(top_k);
        for (position, candidate) in candidates.iter().enumerate() {
            if candidate.id == target.id {
                continue;
            }
            let score = self
                .item_similarity
                .score(&profile, &self.item_similarity.profile(candidate));
            collector.collect(position, score);
        }

        log::debug!(
            target: "curio::ranking",
            "item {:?} compared against {} candidates, keeping up to {}",
            target.id,
            collector.total_hits(),
            top_k
        );
        collector.results()
    }

    /// The `top_k` candidates most similar to `target`, as ids with scores.
    pub fn rank_similar(
        &self,
        target: &ItemFields,
        candidates: &[ItemFields],
        top_k: usize,
    ) -> Vec<ScoredCandidate> {
        self.similar_hits(target, candidates, top_k)
            .into_iter()
            .map(|hit| ScoredCandidate {
                id: candidates[hit.position].id.clone(),
                score: hit.score,
            })
            .collect()
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Ranker {
            scorer: CompositeScorer::default(),
            item_similarity: ItemSimilarity::default(),
            require_term_match: true,
            min_score: 0.0,
            fallback_order: FallbackOrder::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<Candidate> {
        vec![
            Candidate::new("1", "trống đồng Đông Sơn"),
            Candidate::new("2", "áo dài truyền thống"),
            Candidate::new("3", "trống đồng cổ vật"),
        ]
    }

    fn ids(results: &[ScoredCandidate]) -> Vec<&str> {
        results.iter().map(|r| r.id.as_str()).collect()
    }

    fn item(id: &str, name: &str, categories: &[&str]) -> ItemFields {
        ItemFields {
            id: id.to_string(),
            name: name.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario() {
        let results = rank_by_query("trống đồng", &scenario());
        assert_eq!(results.len(), 2);

        let mut found = ids(&results);
        found.sort();
        assert_eq!(found, vec!["1", "3"]);
        assert!(results[0].score >= results[1].score);
        assert!(results.iter().all(|r| r.score > 0.0));
    }

    #[test]
    fn test_shared_bigram_without_term_match() {
        let config = SearchConfig {
            require_term_match: false,
            ..Default::default()
        };
        let ranker = Ranker::new(&config).unwrap();

        // "truyền thống" shares the bigrams "tr", "ốn" and "ng" with "trống đồng".
        let results = ranker.rank_by_query("trống đồng", &scenario());
        assert_eq!(results.len(), 3);
        assert_eq!(results[2].id, "2");
    }

    #[test]
    fn test_no_overlap_is_excluded() {
        let config = SearchConfig {
            require_term_match: false,
            ..Default::default()
        };
        let ranker = Ranker::new(&config).unwrap();
        let candidates = vec![Candidate::new("x", "áo dài lụa")];
        assert!(ranker.rank_by_query("trống đồng", &candidates).is_empty());
    }

    #[test]
    fn test_min_score() {
        let config = SearchConfig {
            min_score: 0.99,
            ..Default::default()
        };
        let ranker = Ranker::new(&config).unwrap();
        let candidates = vec![
            Candidate::new("a", "bình gốm"),
            Candidate::new("b", "bình gốm men lam"),
        ];
        assert_eq!(ids(&ranker.rank_by_query("bình gốm", &candidates)), vec!["a"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = vec![
            Candidate::new("a", "bình gốm"),
            Candidate::new("b", "tượng phật"),
            Candidate::new("c", "bình gốm"),
            Candidate::new("d", "bình gốm"),
        ];
        for _ in 0..3 {
            assert_eq!(ids(&rank_by_query("bình gốm", &candidates)), vec!["a", "c", "d"]);
        }
    }

    #[test]
    fn test_empty_query_fallback() {
        let candidates = vec![
            Candidate::new("2", "áo dài"),
            Candidate::new("10", "trống đồng"),
            Candidate::new("7", "bình gốm"),
        ];
        for query in ["", "   ", "!!!"] {
            let results = rank_by_query(query, &candidates);
            assert_eq!(ids(&results), vec!["10", "7", "2"]);
            assert!(results.iter().all(|r| r.score == 0.0));
        }

        let config = SearchConfig {
            fallback_order: FallbackOrder::Insertion,
            ..Default::default()
        };
        let ranker = Ranker::new(&config).unwrap();
        assert_eq!(ids(&ranker.rank_by_query("", &candidates)), vec!["2", "10", "7"]);
    }

    #[test]
    fn test_empty_candidates() {
        assert!(rank_by_query("trống", &[]).is_empty());
        assert!(rank_by_query("", &[]).is_empty());
    }

    #[test]
    fn test_invalid_config() {
        let config = SearchConfig {
            ngram_size: 0,
            ..Default::default()
        };
        assert!(Ranker::new(&config).is_err());
    }

    #[test]
    fn test_rank_similar_excludes_target() {
        let target = item("1", "Bình gốm men lam", &["ly"]);
        let candidates = vec![
            item("1", "Bình gốm men lam", &["ly"]),
            item("2", "Bình gốm men nâu", &["tran"]),
            item("3", "Tượng Phật", &["ly"]),
            item("4", "Áo dài", &["nguyen"]),
        ];

        let results = rank_similar(&target, &candidates, 12);
        assert_eq!(ids(&results), vec!["2", "3", "4"]);
        assert_eq!(results[2].score, 0.0);
    }

    #[test]
    fn test_rank_similar_excludes_by_id_not_text() {
        let target = item("1", "Bình gốm", &[]);
        let candidates = vec![item("9", "Bình gốm", &[])];
        let results = rank_similar(&target, &candidates, 12);
        assert_eq!(ids(&results), vec!["9"]);
        assert_eq!(results[0].score, 50.0);
    }

    #[test]
    fn test_rank_similar_top_k() {
        let target = item("0", "gốm", &["ly"]);
        let candidates: Vec<ItemFields> = (1..=20)
            .map(|i| item(&i.to_string(), "khác", &[]))
            .collect();

        let results = rank_similar(&target, &candidates, 12);
        assert_eq!(results.len(), 12);
        // All scores tie at 0, so input order decides.
        assert_eq!(results[0].id, "1");
        assert_eq!(results[11].id, "12");
        assert!(rank_similar(&target, &candidates, 0).is_empty());
    }
}
