//! Set and multiset Jaccard similarity.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// Jaccard similarity `|A ∩ B| / |A ∪ B|` of two sets.
///
/// Returns 0 when both sets are empty.
///
/// # Examples
///
/// ```
/// use curio::analysis::normalize;
/// use curio::similarity::jaccard;
///
/// let a = normalize("bình gốm men lam").words;
/// let b = normalize("bình gốm hoa nâu").words;
/// assert!((jaccard(&a, &b) - 2.0 / 6.0).abs() < 1e-12);
/// ```
pub fn jaccard<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> f64
where
    T: Eq + Hash,
    S: BuildHasher,
{
    // Probe the smaller set.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|item| large.contains(*item)).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Multiset Jaccard similarity `Σ min(a_k, b_k) / Σ max(a_k, b_k)` over the
/// union of keys.
///
/// Keys missing from one side count as 0 there. Returns 0 when both
/// multisets are empty.
pub fn multiset_jaccard<T, S>(a: &HashMap<T, usize, S>, b: &HashMap<T, usize, S>) -> f64
where
    T: Eq + Hash,
    S: BuildHasher,
{
    let mut min_sum = 0usize;
    let mut max_sum = 0usize;

    for (key, &count_a) in a {
        let count_b = b.get(key).copied().unwrap_or(0);
        min_sum += count_a.min(count_b);
        max_sum += count_a.max(count_b);
    }
    max_sum += b
        .iter()
        .filter(|(key, _)| !a.contains_key(*key))
        .map(|(_, &count)| count)
        .sum::<usize>();

    if max_sum == 0 {
        return 0.0;
    }
    min_sum as f64 / max_sum as f64
}
