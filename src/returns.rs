//! Log returns and rolling dispersion statistics.

use crate::{
    Result, Series,
    window::{self, checked_window, rolling},
};

/// Log returns: `ln(price[i] / price[i - 1])`.
///
/// Position 0 is `NaN`. A non-positive previous price degrades to `NaN` or
/// `±inf` at that position instead of failing.
///
/// # Example
///
/// ```
/// use volatility_metrics::{Series, log_returns};
///
/// let price = Series::from_values(vec![100.0, 110.0, 99.0, 108.9]);
/// let r = log_returns(&price);
///
/// assert!(r.values()[0].is_nan());
/// assert!((r.values()[1] - 1.1_f64.ln()).abs() < 1e-12);
/// assert!((r.values()[3] - r.values()[1]).abs() < 1e-12);
/// ```
#[must_use]
pub fn log_returns(price: &Series) -> Series {
    let previous = price.shift(1);

    price.derive(
        price
            .iter()
            .zip(previous.iter())
            .map(|(p, prev)| (p / prev).ln())
            .collect(),
    )
}

/// Trailing arithmetic mean over `window` observations, inclusive of the
/// current one. The first `window - 1` results are `NaN`.
///
/// # Errors
///
/// [`Error::InvalidWindow`](crate::Error::InvalidWindow) if `window` is 0.
pub fn rolling_mean(series: &Series, window: usize) -> Result<Series> {
    let window = checked_window(window)?;

    Ok(series.derive(rolling(series.values(), window, window::mean)))
}

/// Trailing sample standard deviation (denominator `window - 1`).
///
/// A window of 1 yields `NaN` everywhere. A window of identical values
/// yields exactly `0.0`.
///
/// # Errors
///
/// [`Error::InvalidWindow`](crate::Error::InvalidWindow) if `window` is 0.
pub fn rolling_std(series: &Series, window: usize) -> Result<Series> {
    let window = checked_window(window)?;

    Ok(series.derive(rolling(series.values(), window, window::sample_std)))
}

/// Rolling standardized score:
/// `(series - rolling_mean(series, window)) / rolling_std(series, window)`.
///
/// A constant window has zero deviation, so the score there is `NaN` or
/// `±inf`.
///
/// # Errors
///
/// [`Error::InvalidWindow`](crate::Error::InvalidWindow) if `window` is 0.
pub fn rolling_zscore(series: &Series, window: usize) -> Result<Series> {
    let mean = rolling_mean(series, window)?;
    let std = rolling_std(series, window)?;

    let deviation = series.zip_with(&mean, |v, m| v - m)?;
    deviation.zip_with(&std, |d, s| d / s)
}
