//! Substring and word-coverage scoring.

use crate::analysis::normalizer::{NormalizedText, normalize};

/// How much of `query` occurs in `text`, after normalizing both.
///
/// Returns 1 when the normalized query occurs verbatim in the normalized
/// text. Otherwise returns the fraction of query words (duplicates counted)
/// that occur somewhere in the text as substrings. A query with no words
/// scores 0.
///
/// # Examples
///
/// ```
/// use curio::similarity::substring_score;
///
/// assert_eq!(substring_score("Trống Đồng", "trống đồng Đông Sơn"), 1.0);
/// assert_eq!(substring_score("trống gốm", "trống đồng"), 0.5);
/// assert_eq!(substring_score("", "trống đồng"), 0.0);
/// ```
pub fn substring_score(query: &str, text: &str) -> f64 {
    coverage(&normalize(query), &normalize(text))
}

/// [`substring_score`] over already normalized inputs.
pub fn coverage(query: &NormalizedText, text: &NormalizedText) -> f64 {
    if query.is_empty() {
        return 0.0;
    }
    if text.text.contains(query.text.as_str()) {
        return 1.0;
    }

    let mut total = 0usize;
    let mut matched = 0usize;
    for word in query.tokens() {
        total += 1;
        if text.text.contains(word) {
            matched += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }
    matched as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_containment() {
        assert_eq!(substring_score("bình gốm", "Bình gốm men lam"), 1.0);
        assert_eq!(substring_score("gốm", "bình gốm"), 1.0);
    }

    #[test]
    fn test_containment_ignores_punctuation() {
        assert_eq!(substring_score("Đông-Sơn", "trống đồng đôngsơn"), 1.0);
        assert_eq!(substring_score("trống đồng!", "Trống đồng, Đông Sơn"), 1.0);
    }

    #[test]
    fn test_partial_word_coverage() {
        assert_eq!(substring_score("trống gốm", "trống đồng"), 0.5);
        assert_eq!(substring_score("áo lụa xanh", "áo dài lụa"), 2.0 / 3.0);
    }

    #[test]
    fn test_words_match_inside_longer_words() {
        // "ng" occurs inside "trống" although it is not a word of the text.
        assert_eq!(substring_score("ng xyz", "trống"), 0.5);
    }

    #[test]
    fn test_duplicate_query_words_count() {
        assert_eq!(substring_score("gốm gốm xyz", "bình gốm"), 2.0 / 3.0);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(substring_score("trống đồng", "áo dài lụa"), 0.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(substring_score("", ""), 0.0);
        assert_eq!(substring_score("   ", "bình gốm"), 0.0);
        assert_eq!(substring_score("!!!", "bình gốm"), 0.0);
        assert_eq!(substring_score("gốm", ""), 0.0);
    }

    #[test]
    fn test_single_character_query_words_count() {
        assert_eq!(substring_score("a", "bảo tàng quốc gia"), 1.0);
        assert_eq!(substring_score("z", "bảo tàng quốc gia"), 0.0);
    }
}
