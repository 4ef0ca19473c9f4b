//! Collectors that gather scored hits in rank order.
//!
//! Hits are ordered by descending score. Equal scores keep their input
//! order, so the same input always yields the same ranking.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A scored candidate, identified by its position in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedHit {
    /// Index of the candidate in the ranked input.
    pub position: usize,
    pub score: f64,
}

impl RankedHit {
    pub fn new(position: usize, score: f64) -> Self {
        RankedHit { position, score }
    }

    /// Rank order: higher score first, then lower position.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.position.cmp(&other.position))
    }
}

/// Trait for collecting ranked hits.
pub trait Collector: Send + Debug {
    /// Collect one scored candidate.
    fn collect(&mut self, position: usize, score: f64);

    /// The collected hits in rank order.
    fn results(&self) -> Vec<RankedHit>;

    /// Number of candidates offered to the collector.
    fn total_hits(&self) -> usize;

    /// Reset the collector for a new ranking.
    fn reset(&mut self);
}

/// A collector that keeps every hit.
#[derive(Debug, Default)]
pub struct AllHitsCollector {
    hits: Vec<RankedHit>,
}

impl AllHitsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        AllHitsCollector {
            hits: Vec::with_capacity(capacity),
        }
    }
}

impl Collector for AllHitsCollector {
    fn collect(&mut self, position: usize, score: f64) {
        self.hits.push(RankedHit::new(position, score));
    }

    fn results(&self) -> Vec<RankedHit> {
        let mut results = self.hits.clone();
        results.sort_by(RankedHit::rank_cmp);
        results
    }

    fn total_hits(&self) -> usize {
        self.hits.len()
    }

    fn reset(&mut self) {
        self.hits.clear();
    }
}

/// A collector that keeps the top N hits.
#[derive(Debug)]
pub struct TopHitsCollector {
    /// Maximum number of hits to keep.
    max_hits: usize,
    /// Kept hits, worst on top.
    hits: BinaryHeap<HeapEntry>,
    /// Total number of candidates offered.
    total_hits: usize,
}

/// Heap wrapper ordering the worst hit highest.
#[derive(Debug, Clone, Copy)]
struct HeapEntry(RankedHit);

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.rank_cmp(&other.0)
    }
}

impl TopHitsCollector {
    pub fn new(max_hits: usize) -> Self {
        TopHitsCollector {
            max_hits,
            hits: BinaryHeap::with_capacity(max_hits.saturating_add(1).min(1024)),
            total_hits: 0,
        }
    }

    pub fn max_hits(&self) -> usize {
        self.max_hits
    }

    /// Check if this collector still accepts any hit.
    pub fn needs_more(&self) -> bool {
        self.hits.len() < self.max_hits
    }
}

impl Collector for TopHitsCollector {
    fn collect(&mut self, position: usize, score: f64) {
        self.total_hits += 1;
        if self.max_hits == 0 {
            return;
        }

        let entry = HeapEntry(RankedHit::new(position, score));
        if self.needs_more() {
            self.hits.push(entry);
        } else if let Some(worst) = self.hits.peek() {
            // Replace the worst hit only if the new one ranks before it.
            if entry < *worst {
                self.hits.pop();
                self.hits.push(entry);
            }
        }
    }

    fn results(&self) -> Vec<RankedHit> {
        let mut results: Vec<RankedHit> = self.hits.iter().map(|entry| entry.0).collect();
        results.sort_by(RankedHit::rank_cmp);
        results
    }

    fn total_hits(&self) -> usize {
        self.total_hits
    }

    fn reset(&mut self) {
        self.hits.clear();
        self.total_hits = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(hits: &[RankedHit]) -> Vec<usize> {
        hits.iter().map(|hit| hit.position).collect()
    }

    #[test]
    fn test_all_hits_sorted() {
        let mut collector = AllHitsCollector::new();
        collector.collect(0, 0.2);
        collector.collect(1, 0.9);
        collector.collect(2, 0.5);

        assert_eq!(positions(&collector.results()), vec![1, 2, 0]);
        assert_eq!(collector.total_hits(), 3);
    }

    #[test]
    fn test_all_hits_ties_keep_input_order() {
        let mut collector = AllHitsCollector::with_capacity(4);
        collector.collect(0, 0.5);
        collector.collect(1, 0.7);
        collector.collect(2, 0.5);
        collector.collect(3, 0.5);

        assert_eq!(positions(&collector.results()), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_top_hits() {
        let mut collector = TopHitsCollector::new(2);
        collector.collect(0, 0.1);
        collector.collect(1, 0.8);
        collector.collect(2, 0.3);
        collector.collect(3, 0.9);

        let results = collector.results();
        assert_eq!(positions(&results), vec![3, 1]);
        assert_eq!(results[0].score, 0.9);
        assert_eq!(collector.total_hits(), 4);
        assert!(!collector.needs_more());
    }

    #[test]
    fn test_top_hits_ties_keep_earliest() {
        let mut collector = TopHitsCollector::new(2);
        for position in 0..5 {
            collector.collect(position, 1.0);
        }
        assert_eq!(positions(&collector.results()), vec![0, 1]);
    }

    #[test]
    fn test_top_hits_zero_scores_are_kept() {
        let mut collector = TopHitsCollector::new(3);
        collector.collect(0, 0.0);
        collector.collect(1, 0.0);
        assert_eq!(positions(&collector.results()), vec![0, 1]);
        assert!(collector.needs_more());
    }

    #[test]
    fn test_top_hits_zero_capacity() {
        let mut collector = TopHitsCollector::new(0);
        collector.collect(0, 1.0);
        assert!(collector.results().is_empty());
        assert_eq!(collector.total_hits(), 1);
    }

    #[test]
    fn test_reset() {
        let mut collector = TopHitsCollector::new(2);
        collector.collect(0, 1.0);
        collector.reset();
        assert!(collector.results().is_empty());
        assert_eq!(collector.total_hits(), 0);
    }
}
