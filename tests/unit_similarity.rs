// tests/unit_similarity.rs
//! Symmetry and bounds of the combined similarity score.

mod common;

use citegraph_core::similarity::{breakdown, score};
use citegraph_core::Article;

#[test]
fn test_score_is_symmetric() {
    let corpus = common::corpus();
    for a in &corpus {
        for b in &corpus {
            let (ab, ba) = (score(a, b), score(b, a));
            assert!((ab - ba).abs() < 1e-12, "asymmetric: '{}' vs '{}'", a.title, b.title);
        }
    }
}

#[test]
fn test_score_is_bounded() {
    let corpus = common::corpus();
    for a in &corpus {
        for b in &corpus {
            let s = score(a, b);
            assert!((0.0..=1.0).contains(&s), "out of bounds: {s}");
        }
    }
}

#[test]
fn test_abc_scores() {
    let abc = common::abc();
    let ab = breakdown(&abc[0], &abc[1]);
    assert!((ab.title - 0.6).abs() < 1e-12, "3 shared of 5 title tokens");
    assert!((ab.authors - 1.0).abs() < 1e-12);
    assert!((ab.keywords - 0.5).abs() < 1e-12);
    assert!((score(&abc[0], &abc[1]) - 0.7).abs() < 1e-12);
    assert!(score(&abc[0], &abc[2]).abs() < 1e-12);
}

#[test]
fn test_diacritics_and_case_do_not_matter() {
    let a = Article::new("Educación Artificial", "García", "IA");
    let b = Article::new("EDUCACION artificial", "garcia", "ia");
    assert!((score(&a, &b) - 1.0).abs() < 1e-12);
}

#[test]
fn test_missing_fields_score_zero_for_that_field() {
    let a = Article::new("graph analysis", "", "");
    let b = Article::new("graph analysis", "", "");
    assert!((score(&a, &b) - 0.5).abs() < 1e-12, "only the title contributes");
}
