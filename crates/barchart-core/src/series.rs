// File: crates/barchart-core/src/series.rs
// Summary: Series model (values + labels) and the comma-separated input parser.
// Notes:
// - Negative values are clamped to zero on purpose: bars grow up from the
//   baseline only, so a negative entry draws as an empty bar.
// - Unparseable or non-finite numeric tokens are dropped *before* values and
//   labels are compared, so "10,abc,20" needs exactly two labels.

use log::{debug, warn};

use crate::error::ValidationError;

/// Validated, length-matched values and labels. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    values: Vec<f64>,
    labels: Vec<String>,
}

impl Series {
    pub fn empty() -> Self { Self::default() }

    pub fn values(&self) -> &[f64] { &self.values }
    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Largest value, or `None` for an empty series.
    pub fn max_value(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

/// Parse two raw comma lists into a [`Series`].
///
/// A count mismatch yields an error and no partial result; callers treat it
/// as a series with zero entries.
pub fn parse(values_text: &str, labels_text: &str) -> Result<Series, ValidationError> {
    let values = parse_values(values_text);
    let labels = parse_labels(labels_text);
    debug!("parsed {} values and {} labels", values.len(), labels.len());
    if values.len() != labels.len() {
        return Err(ValidationError::CountMismatch { values: values.len(), labels: labels.len() });
    }
    Ok(Series { values, labels })
}

/// Same as [`parse`], collapsing a validation failure into the empty series.
pub fn parse_or_empty(values_text: &str, labels_text: &str) -> (Series, Option<ValidationError>) {
    match parse(values_text, labels_text) {
        Ok(s) => (s, None),
        Err(e) => (Series::empty(), Some(e)),
    }
}

fn parse_values(text: &str) -> Vec<f64> {
    text.split(',')
        .map(str::trim)
        .filter_map(|tok| match tok.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(clamp_non_negative(v)),
            _ => {
                if !tok.is_empty() {
                    warn!("dropping non-numeric value token {tok:?}");
                }
                None
            }
        })
        .collect()
}

/// `-0.0` counts as negative here; `f64::max` would keep its sign.
fn clamp_non_negative(v: f64) -> f64 {
    if v <= 0.0 { 0.0 } else { v }
}

fn parse_labels(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(|tok| tok.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_keep_inner_empty_tokens() {
        assert_eq!(parse_labels("A,,C"), vec!["A", "", "C"]);
        assert!(parse_labels("   ").is_empty());
    }

    #[test]
    fn values_drop_non_finite_tokens() {
        assert_eq!(parse_values("1, NaN, inf, -infinity, 2.5"), vec![1.0, 2.5]);
        assert!(parse_values("").is_empty());
    }

    #[test]
    fn negative_zero_clamps_to_positive_zero() {
        let v = parse_values("-0, -3, 0.5");
        assert_eq!(v, vec![0.0, 0.0, 0.5]);
        assert!(v.iter().all(|x| x.is_sign_positive()));
    }
}
