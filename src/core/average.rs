use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::primitives::{decimal_to_f64, f64_to_fixed_decimal};
use crate::core::types::DataTable;

/// Decimal places kept on every computed average.
pub const AVERAGE_DECIMALS: u32 = 2;

/// Text shown in place of an average that could not be computed.
pub const MISSING_AVERAGE_TEXT: &str = "NaN";

/// Reduction used to turn one entity's samples into its summary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AveragingStrategy {
    /// Plain arithmetic mean: sum of all samples divided by their count.
    #[default]
    SimpleMean,
    /// Treats the samples as two interleaved channels (even and odd
    /// positions), folds one running sum per channel and averages the two
    /// channel means.
    ///
    /// Matches `SimpleMean` when both channels hold the same number of
    /// samples (even-length input) and diverges otherwise.
    ChannelPair,
}

impl AveragingStrategy {
    /// Unrounded mean of `values`, or `None` for an empty sequence.
    #[must_use]
    pub fn mean(self, values: &[f64]) -> Option<f64> {
        match self {
            Self::SimpleMean => simple_mean(values),
            Self::ChannelPair => channel_pair_mean(values),
        }
    }
}

fn simple_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

fn channel_pair_mean(values: &[f64]) -> Option<f64> {
    let ((even_sum, even_count), (odd_sum, odd_count)) = values.iter().enumerate().fold(
        ((0.0_f64, 0_usize), (0.0_f64, 0_usize)),
        |(even, odd), (i, &value)| {
            if i % 2 == 0 {
                ((even.0 + value, even.1 + 1), odd)
            } else {
                (even, (odd.0 + value, odd.1 + 1))
            }
        },
    );

    let channel_means: Vec<f64> = [(even_sum, even_count), (odd_sum, odd_count)]
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(sum, count)| sum / count as f64)
        .collect();
    simple_mean(&channel_means)
}

/// A computed mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageValue {
    /// Rounded to [`AVERAGE_DECIMALS`] places.
    Fixed(Decimal),
    /// Finite mean too large for `Decimal`; kept unrounded.
    Wide(f64),
}

impl AverageValue {
    /// Rounds a finite mean, or returns `None` for `NaN`/infinite input.
    #[must_use]
    pub fn from_mean(mean: f64) -> Option<Self> {
        if !mean.is_finite() {
            return None;
        }
        Some(match f64_to_fixed_decimal(mean, AVERAGE_DECIMALS) {
            Some(fixed) => Self::Fixed(fixed),
            // below the decimal resolution; rounds to zero at two places
            None if mean.abs() < 1.0 => Self::Fixed(Decimal::new(0, AVERAGE_DECIMALS)),
            None => Self::Wide(mean),
        })
    }

    #[must_use]
    pub fn to_f64(self) -> Option<f64> {
        match self {
            Self::Fixed(value) => decimal_to_f64(value, "average").ok(),
            Self::Wide(value) => Some(value),
        }
    }

    /// Fixed-point text such as `20.00`; wide values use exponent form
    /// (`1e+30`), the same text a JavaScript runtime prints for them.
    #[must_use]
    pub fn display(self) -> String {
        match self {
            Self::Fixed(value) => format!("{value:.prec$}", prec = AVERAGE_DECIMALS as usize),
            Self::Wide(value) => exponent_text(value),
        }
    }
}

fn exponent_text(value: f64) -> String {
    let text = format!("{value:e}");
    if text.contains("e-") {
        text
    } else {
        text.replacen('e', "e+", 1)
    }
}

/// Average attached to one entity, kept apart from the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityAverage {
    pub index: usize,
    pub name: String,
    pub average: Option<AverageValue>,
}

impl EntityAverage {
    /// Average text, or `"NaN"` when the sequence was empty or the mean
    /// was not finite.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self.average {
            Some(value) => value.display(),
            None => MISSING_AVERAGE_TEXT.to_owned(),
        }
    }

    /// Average as a float, for consumers that chart the summary.
    #[must_use]
    pub fn average_f64(&self) -> Option<f64> {
        self.average.and_then(AverageValue::to_f64)
    }
}

/// Computes one rounded average per record, in table order.
///
/// The table is only read, so repeated calls return identical results.
#[must_use]
pub fn compute_averages(table: &DataTable, strategy: AveragingStrategy) -> Vec<EntityAverage> {
    table
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let average = strategy
                .mean(&record.data)
                .and_then(AverageValue::from_mean);
            trace!(
                index,
                name = %record.name,
                samples = record.data.len(),
                ?strategy,
                ?average,
                "computed entity average"
            );
            EntityAverage {
                index,
                name: record.name.clone(),
                average,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{AverageValue, channel_pair_mean, exponent_text, simple_mean};

    #[test]
    fn channel_pair_averages_channel_means() {
        // even channel [1, 4] -> 2.5, odd channel [2] -> 2.0
        let mean = channel_pair_mean(&[1.0, 2.0, 4.0]).expect("non-empty");
        assert!((mean - 2.25).abs() <= 1e-12);
    }

    #[test]
    fn channel_pair_single_sample_uses_only_filled_channel() {
        let mean = channel_pair_mean(&[7.0]).expect("non-empty");
        assert!((mean - 7.0).abs() <= 1e-12);
    }

    #[test]
    fn exponent_text_signs_positive_exponents() {
        assert_eq!(exponent_text(1e30), "1e+30");
        assert_eq!(exponent_text(-2.5e29), "-2.5e+29");
        assert_eq!(exponent_text(1.5e-7), "1.5e-7");
    }

    #[test]
    fn tiny_mean_rounds_to_zero() {
        let value = AverageValue::from_mean(1e-40).expect("finite mean");
        assert_eq!(value.display(), "0.00");
    }

    #[test]
    fn non_finite_mean_has_no_value() {
        assert_eq!(AverageValue::from_mean(f64::NAN), None);
        assert_eq!(AverageValue::from_mean(f64::INFINITY), None);
    }

    #[test]
    fn empty_input_has_no_mean() {
        assert!(simple_mean(&[]).is_none());
        assert!(channel_pair_mean(&[]).is_none());
    }
}
