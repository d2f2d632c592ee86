use crate::{Error, Result};

use std::num::NonZero;

/// Validates a window length.
pub(crate) fn checked_window(window: usize) -> Result<NonZero<usize>> {
    NonZero::new(window).ok_or_else(|| {
        tracing::debug!(window, "rejecting zero-length window");
        Error::InvalidWindow { window }
    })
}

/// Applies `stat` to every full trailing window ending at each position.
///
/// The first `window - 1` results are `NaN`, as is any window holding a `NaN`.
/// A window longer than `values` yields all `NaN`.
pub(crate) fn rolling(
    values: &[f64],
    window: NonZero<usize>,
    stat: impl Fn(&[f64]) -> f64,
) -> Vec<f64> {
    let mut result = vec![f64::NAN; values.len()];

    for (start, slice) in values.windows(window.get()).enumerate() {
        if !slice.iter().any(|v| v.is_nan()) {
            result[start + window.get() - 1] = stat(slice);
        }
    }

    result
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

/// Sample standard deviation (denominator `n - 1`).
///
/// `NaN` for a single observation, exactly `0.0` when all values are equal.
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub(crate) fn sample_std(window: &[f64]) -> f64 {
    let Some((&first, rest)) = window.split_first() else {
        return f64::NAN;
    };

    if rest.is_empty() {
        return f64::NAN;
    }

    if rest.iter().all(|&v| v == first) {
        return 0.0;
    }

    let mean = mean(window);
    let squares: f64 = window.iter().map(|v| (v - mean).powi(2)).sum();

    (squares / (window.len() - 1) as f64).sqrt()
}

pub(crate) fn max(window: &[f64]) -> f64 {
    window.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub(crate) fn min(window: &[f64]) -> f64 {
    window.iter().copied().fold(f64::INFINITY, f64::min)
}
