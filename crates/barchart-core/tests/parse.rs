// File: crates/barchart-core/tests/parse.rs
// Purpose: Input parsing rules: clamping, token dropping, count validation.

use barchart_core::series::parse_or_empty;
use barchart_core::{parse, ChartError, ExternalToolError, ValidationError};

#[test]
fn parses_matching_lists() {
    let s = parse("10,20,30", "A,B,C").expect("valid input");
    assert_eq!(s.values(), &[10.0, 20.0, 30.0]);
    assert_eq!(s.labels(), &["A", "B", "C"]);
}

#[test]
fn count_mismatch_is_an_error() {
    let err = parse("10,20", "A,B,C").unwrap_err();
    assert_eq!(err, ValidationError::CountMismatch { values: 2, labels: 3 });
    assert!(err.to_string().starts_with("count mismatch"));
}

#[test]
fn negatives_clamp_to_zero() {
    let s = parse("10,-5,30", "A,B,C").expect("valid input");
    assert_eq!(s.values(), &[10.0, 0.0, 30.0]);
}

#[test]
fn bad_tokens_drop_before_length_check() {
    let s = parse("10,abc,20", "A,B").expect("two numbers, two labels");
    assert_eq!(s.values(), &[10.0, 20.0]);
    assert_eq!(s.labels(), &["A", "B"]);

    assert!(parse("10,abc,20", "A,B,C").is_err());
    assert!(parse("NaN, Infinity, 4", "x").is_ok());
}

#[test]
fn tokens_are_trimmed_and_empty_labels_kept() {
    let s = parse(" 1.5 ,  2 ,3", "  a , , c ").expect("valid input");
    assert_eq!(s.values(), &[1.5, 2.0, 3.0]);
    assert_eq!(s.labels(), &["a", "", "c"]);
}

#[test]
fn empty_input_is_an_empty_series() {
    let s = parse("", "").expect("empty is valid");
    assert!(s.is_empty());
    assert_eq!(s.max_value(), None);
}

#[test]
fn mismatch_collapses_to_empty_series() {
    let (s, err) = parse_or_empty("1,2", "only");
    assert!(s.is_empty());
    assert!(err.is_some());
}

#[test]
fn parse_is_repeatable() {
    let a = parse("3, 1, -2, x, 7", "p,q,r,s").unwrap();
    let b = parse("3, 1, -2, x, 7", "p,q,r,s").unwrap();
    assert_eq!(a, b);
    assert!(a.values().iter().all(|v| v.is_finite() && *v >= 0.0));
    assert_eq!(a.values().len(), a.labels().len());
}

#[test]
fn errors_reach_the_user_as_one_message() {
    let err = parse("1", "a,b").unwrap_err();
    let msg = ChartError::from(err).user_message();
    assert_eq!(msg, "Error: count mismatch: 1 values but 2 labels. Please provide one label per value.");

    let missing = ChartError::from(ExternalToolError::NotFound { command: "emacs".into() }).user_message();
    assert!(missing.starts_with("Error: "), "{missing}");
    assert!(missing.contains("PATH"), "{missing}");
}
