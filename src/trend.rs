//! Trend and volatility composites: rate of change, true range, ATR and the
//! efficiency ratio combining them.

use crate::{
    Result, Series,
    window::{self, checked_window, rolling},
};

use std::fmt::Display;

/// Rate of change over `window` bars:
/// `(price[i] - price[i - window]) / price[i - window]`.
///
/// The first `window` results are `NaN`. A zero look-back price degrades to
/// `±inf` or `NaN`.
///
/// # Errors
///
/// [`Error::InvalidWindow`](crate::Error::InvalidWindow) if `window` is 0.
pub fn rate_of_change(price: &Series, window: usize) -> Result<Series> {
    let window = checked_window(window)?;
    let past = price.shift(window.get());

    price.zip_with(&past, |now, then| (now - then) / then)
}

/// True range: `max(high - low, |high - prev_close|, |low - prev_close|)`.
///
/// Position 0 is `NaN`, there is no previous close. A missing component at
/// any position makes that position `NaN`.
///
/// # Errors
///
/// [`Error::Alignment`](crate::Error::Alignment) unless all three series
/// share one index.
pub fn true_range(high: &Series, low: &Series, close: &Series) -> Result<Series> {
    high.ensure_aligned(low)?;
    high.ensure_aligned(close)?;

    let prev_close = close.shift(1);

    Ok(high.derive(
        high.iter()
            .zip(low.iter())
            .zip(prev_close.iter())
            .map(|((h, l), pc)| bar_true_range(h, l, pc))
            .collect(),
    ))
}

#[inline]
fn bar_true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    if high.is_nan() || low.is_nan() || prev_close.is_nan() {
        return f64::NAN;
    }

    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();

    hl.max(hc).max(lc)
}

/// How [`average_true_range_with`] smooths the true range.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum AtrSmoothing {
    /// Plain trailing arithmetic mean of the last `window` true ranges.
    #[default]
    Simple,
    /// Wilder's recursive smoothing, seeded with the simple mean:
    /// `atr[i] = (atr[i - 1] * (window - 1) + tr[i]) / window`.
    Wilder,
}

impl Display for AtrSmoothing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Average true range as the simple trailing mean of [`true_range`].
///
/// This is deliberately not Wilder's recursive average; use
/// [`average_true_range_with`] and [`AtrSmoothing::Wilder`] for that. The first
/// `window` results are `NaN`: true range itself starts one bar late.
///
/// # Errors
///
/// [`Error::InvalidWindow`](crate::Error::InvalidWindow) if `window` is 0,
/// [`Error::Alignment`](crate::Error::Alignment) unless all three series
/// share one index.
///
/// # Example
///
/// ```
/// use volatility_metrics::{Series, average_true_range};
///
/// let high = Series::from_values(vec![10.0, 12.0, 11.0, 13.0]);
/// let low = Series::from_values(vec![8.0, 9.0, 9.5, 10.0]);
/// let close = Series::from_values(vec![9.0, 11.0, 10.0, 12.0]);
///
/// let atr = average_true_range(&high, &low, &close, 2).unwrap();
///
/// assert!(atr.values()[..2].iter().all(|v| v.is_nan()));
/// // TR = [_, 3, 1.5, 3]; mean of the last two
/// assert_eq!(atr.values()[2], 2.25);
/// assert_eq!(atr.values()[3], 2.25);
/// ```
pub fn average_true_range(
    high: &Series,
    low: &Series,
    close: &Series,
    window: usize,
) -> Result<Series> {
    average_true_range_with(high, low, close, window, AtrSmoothing::Simple)
}

/// Average true range with an explicit smoothing method.
///
/// Both methods leave the first `window` results `NaN`. With
/// [`AtrSmoothing::Wilder`] the first defined value equals the simple average;
/// after that a missing true range yields `NaN` at its position and the
/// recursion resumes from the last defined average.
///
/// # Errors
///
/// Same as [`average_true_range`].
pub fn average_true_range_with(
    high: &Series,
    low: &Series,
    close: &Series,
    window: usize,
    smoothing: AtrSmoothing,
) -> Result<Series> {
    let window = checked_window(window)?;
    let tr = true_range(high, low, close)?;
    let simple = rolling(tr.values(), window, window::mean);

    let values = match smoothing {
        AtrSmoothing::Simple => simple,
        AtrSmoothing::Wilder => wilder(tr.values(), &simple, window.get()),
    };

    Ok(tr.derive(values))
}

#[allow(clippy::cast_precision_loss)]
fn wilder(tr: &[f64], simple: &[f64], window: usize) -> Vec<f64> {
    let length = window as f64;
    let mut previous: Option<f64> = None;

    tr.iter()
        .zip(simple)
        .map(|(&range, &seed)| match previous {
            None => {
                if !seed.is_nan() {
                    previous = Some(seed);
                }
                seed
            }
            Some(_) if range.is_nan() => f64::NAN,
            Some(atr) => {
                let next = (atr * (length - 1.0) + range) / length;
                previous = Some(next);
                next
            }
        })
        .collect()
}

/// Efficiency ratio: `roc[i] / atr[i]`.
///
/// A pure combinator over precomputed [`rate_of_change`] and
/// [`average_true_range`] series. Missing values from either input propagate;
/// a zero ATR degrades to `±inf` or `NaN`.
///
/// # Errors
///
/// [`Error::Alignment`](crate::Error::Alignment) if the two series do not
/// share one index.
pub fn efficiency_ratio(roc: &Series, atr: &Series) -> Result<Series> {
    roc.zip_with(atr, |r, a| r / a)
}
