//! Confusion-matrix classification report for a completed simulation run.
//!
//! Reference: SPEC_FULL.md Section 4.5, Section 6 (Report format)

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Classification of the filter/eviction outcome against an adversary's
/// ground truth, plus the fraction of samples actually obtained.
///
/// `serde::Serialize` is gated behind the `serde` feature rather than a
/// blanket dependency, mirroring the teacher's pattern of gating its
/// wire-format derives behind an explicit feature instead of always
/// linking `serde`/`serde_json`.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Report {
    pub evicted: usize,
    pub malicious: usize,
    pub filtered: usize,
    pub false_positives: usize,
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
    pub obtained_samples: usize,
    pub number_of_columns: usize,
}

impl Report {
    /// `FP / (FP + TN)`, saturating to `0.0` when the denominator is zero
    /// (an all-malicious or all-honest graph makes one class empty).
    pub fn false_positive_rate(&self) -> f64 {
        let denom = self.false_positives + self.true_negatives;
        if denom == 0 {
            0.0
        } else {
            self.false_positives as f64 / denom as f64
        }
    }

    /// `FN / (FN + TP)`, same saturation rule as `false_positive_rate`.
    pub fn false_negative_rate(&self) -> f64 {
        let denom = self.false_negatives + self.true_positives;
        if denom == 0 {
            0.0
        } else {
            self.false_negatives as f64 / denom as f64
        }
    }

    pub fn obtained_fraction(&self) -> f64 {
        if self.number_of_columns == 0 {
            0.0
        } else {
            self.obtained_samples as f64 / self.number_of_columns as f64
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rated-list simulation report")?;
        writeln!(f, "  evicted:           {}", self.evicted)?;
        writeln!(f, "  malicious:         {}", self.malicious)?;
        writeln!(f, "  filtered:          {}", self.filtered)?;
        writeln!(
            f,
            "  TP={} FP={} TN={} FN={}",
            self.true_positives, self.false_positives, self.true_negatives, self.false_negatives
        )?;
        writeln!(f, "  false positive rate: {:.4}", self.false_positive_rate())?;
        writeln!(f, "  false negative rate: {:.4}", self.false_negative_rate())?;
        write!(
            f,
            "  obtained samples:    {}/{} ({:.1}%)",
            self.obtained_samples,
            self.number_of_columns,
            self.obtained_fraction() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_saturate_to_zero_on_empty_denominator() {
        let report = Report::default();
        assert_eq!(report.false_positive_rate(), 0.0);
        assert_eq!(report.false_negative_rate(), 0.0);
    }

    #[test]
    fn test_false_positive_rate_computation() {
        let report = Report {
            false_positives: 3,
            true_negatives: 7,
            ..Default::default()
        };
        assert_eq!(report.false_positive_rate(), 0.3);
    }

    #[test]
    fn test_display_does_not_panic() {
        let report = Report {
            number_of_columns: 128,
            obtained_samples: 64,
            ..Default::default()
        };
        let rendered = report.to_string();
        assert!(rendered.contains("50.0%"));
    }
}
