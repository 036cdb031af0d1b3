//! Tests for the cover module

use super::*;
use crate::{MinimizerConfig, SelectionMode};

fn term(pattern: &str) -> Term {
    pattern.parse().unwrap()
}

#[test]
fn test_cover_creation() {
    let cover = Cover::new(3, 2);
    assert_eq!(cover.num_inputs(), 3);
    assert_eq!(cover.num_outputs(), 2);
    assert_eq!(cover.num_terms(), 0);
    assert!(cover.is_empty());
}

#[test]
fn test_add_term() {
    let mut cover = Cover::new(2, 1);
    cover.add_term(term("01")).unwrap();
    assert_eq!(cover.num_terms(), 1);
    assert_eq!(cover.terms()[0], term("01"));
}

#[test]
fn test_add_term_rejects_wrong_width() {
    let mut cover = Cover::new(2, 1);
    let err = cover.add_term(term("011")).unwrap_err();
    assert_eq!(
        err,
        CoverError::WidthMismatch {
            expected: 2,
            actual: 3
        }
    );
    assert!(cover.is_empty());
}

#[test]
fn test_term_set_deduplicates() {
    let mut cover = Cover::new(2, 1);
    cover.add_term(term("11")).unwrap();
    cover.add_term(term("00")).unwrap();
    cover.add_term(term("11")).unwrap();
    assert_eq!(cover.num_terms(), 3);

    let set = cover.term_set();
    assert_eq!(set.len(), 2);
    // Pattern order, not insertion order
    assert_eq!(
        set.into_iter().collect::<Vec<_>>(),
        vec![term("00"), term("11")]
    );
}

#[test]
fn test_minimize_selects_essentials() {
    let mut cover = Cover::new(2, 1);
    cover.add_term(term("00")).unwrap();
    cover.add_term(term("01")).unwrap();
    cover.add_term(term("11")).unwrap();

    let minimized = cover.minimize().unwrap();
    assert_eq!(minimized.num_inputs(), 2);
    assert_eq!(minimized.num_outputs(), 1);
    assert_eq!(minimized.terms(), &[term("0-"), term("-1")]);
}

#[test]
fn test_minimize_preserves_original() {
    let mut cover = Cover::new(2, 1);
    cover.add_term(term("00")).unwrap();
    cover.add_term(term("01")).unwrap();

    let _ = cover.minimize().unwrap();
    assert_eq!(cover.num_terms(), 2);
}

#[test]
fn test_minimize_is_idempotent_on_result() {
    let mut cover = Cover::new(2, 1);
    cover.add_term(term("00")).unwrap();
    cover.add_term(term("01")).unwrap();
    cover.add_term(term("11")).unwrap();

    let once = cover.minimize().unwrap();
    let twice = once.minimize().unwrap();
    assert_eq!(once.term_set(), twice.term_set());
}

#[test]
fn test_minimize_with_iterative_selection() {
    let mut cover = Cover::new(2, 1);
    cover.add_term(term("00")).unwrap();
    cover.add_term(term("01")).unwrap();
    cover.add_term(term("11")).unwrap();

    let config = MinimizerConfig {
        selection: SelectionMode::Iterative,
        ..MinimizerConfig::default()
    };
    let minimized = cover.minimize_with_config(&config).unwrap();
    assert_eq!(minimized.terms(), &[term("0-"), term("-1")]);
}

#[test]
fn test_minimize_single_term() {
    let mut cover = Cover::new(4, 1);
    cover.add_term(term("1010")).unwrap();
    let minimized = cover.minimize().unwrap();
    assert_eq!(minimized.terms(), &[term("1010")]);
}
