//! Integration tests for the similarity primitives and the composite score.

use curio::analysis::normalize;
use curio::scoring::{CompositeScorer, ScoreWeights, score};
use curio::similarity::{jaccard, multiset_jaccard, substring_score};

const SAMPLES: [&str; 8] = [
    "trống đồng Đông Sơn",
    "áo dài truyền thống",
    "Bình gốm men lam, thời Lý",
    "tượng Phật gỗ sơn son thếp vàng",
    "国宝 仏教",
    "a",
    "",
    "...!!!",
];

#[test]
fn test_jaccard_is_symmetric() {
    for a in SAMPLES {
        for b in SAMPLES {
            let (na, nb) = (normalize(a), normalize(b));
            assert_eq!(jaccard(&na.words, &nb.words), jaccard(&nb.words, &na.words));
            assert_eq!(
                multiset_jaccard(&na.ngram_counts, &nb.ngram_counts),
                multiset_jaccard(&nb.ngram_counts, &na.ngram_counts)
            );
        }
    }
}

#[test]
fn test_scores_are_bounded() {
    for query in SAMPLES {
        for text in SAMPLES {
            let (nq, nt) = (normalize(query), normalize(text));
            for value in [
                jaccard(&nq.ngrams, &nt.ngrams),
                multiset_jaccard(&nq.word_counts, &nt.word_counts),
                substring_score(query, text),
                score(query, text),
            ] {
                assert!((0.0..=1.0).contains(&value), "{query:?} vs {text:?}: {value}");
            }
        }
    }
}

#[test]
fn test_empty_inputs_score_zero() {
    let empty = normalize("");
    assert_eq!(jaccard(&empty.words, &empty.words), 0.0);
    assert_eq!(multiset_jaccard(&empty.word_counts, &empty.word_counts), 0.0);
    assert_eq!(score("", ""), 0.0);
    assert_eq!(score("", "bình gốm"), 0.0);
}

#[test]
fn test_containment_dominates_substring_score() {
    assert_eq!(substring_score("ĐỒNG đông", "trống đồng Đông Sơn"), 1.0);
    assert_eq!(substring_score("gốm, men", "bình gốm men lam"), 1.0);
}

#[test]
fn test_self_similarity() {
    assert_eq!(score("bình gốm", "bình gốm"), 1.0);
    assert_eq!(score("Bình Gốm!", "bình gốm"), 1.0);
}

#[test]
fn test_breakdown_adds_up() {
    let scorer = CompositeScorer::default();
    let breakdown = scorer.explain("trống đồng", "trống đồng cổ vật");

    assert_eq!(breakdown.substring, 1.0);
    let expected = breakdown.substring * 0.5 + breakdown.words * 0.25 + breakdown.ngrams * 0.25;
    assert!((breakdown.total - expected).abs() < 1e-12);
}

#[test]
fn test_custom_weights_and_ngram_size() {
    let scorer = CompositeScorer::new(ScoreWeights::new(1.0, 0.0, 0.0), 3).unwrap();
    assert_eq!(scorer.score("trống gốm", "trống đồng"), 0.5);
    assert_eq!(scorer.normalizer().ngram_size(), 3);

    assert!(CompositeScorer::new(ScoreWeights::new(-1.0, 0.5, 0.5), 2).is_err());
    assert!(CompositeScorer::new(ScoreWeights::default(), 0).is_err());
}
