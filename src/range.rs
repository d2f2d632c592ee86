//! Range-based volatility measures over high/low/close triples.

use crate::{
    Result, Series,
    window::{self, checked_window, rolling},
};

/// Normalized bar range: `(high - low) / close`.
///
/// A zero close yields `±inf` or `NaN` at that position.
///
/// # Errors
///
/// [`Error::Alignment`](crate::Error::Alignment) unless all three series
/// share one index.
///
/// # Example
///
/// ```
/// use volatility_metrics::{Series, normalized_range};
///
/// let high = Series::from_values(vec![10.0, 12.0, 11.0]);
/// let low = Series::from_values(vec![8.0, 9.0, 9.5]);
/// let close = Series::from_values(vec![9.0, 11.0, 10.0]);
///
/// let nr = normalized_range(&high, &low, &close).unwrap();
/// assert!((nr.values()[2] - 0.15).abs() < 1e-12);
/// ```
pub fn normalized_range(high: &Series, low: &Series, close: &Series) -> Result<Series> {
    high.zip_with(low, |h, l| h - l)?
        .zip_with(close, |range, c| range / c)
}

/// Rolling range over the current price:
/// `(max(high over window) - min(low over window)) / close[i]`.
///
/// The extremes are taken independently over `high` and `low` across the
/// trailing window, but the divisor is the close at the current position
/// only. The first `window - 1` results are `NaN`.
///
/// # Errors
///
/// [`Error::InvalidWindow`](crate::Error::InvalidWindow) if `window` is 0,
/// [`Error::Alignment`](crate::Error::Alignment) unless all three series
/// share one index.
pub fn rolling_range_over_price(
    high: &Series,
    low: &Series,
    close: &Series,
    window: usize,
) -> Result<Series> {
    let window = checked_window(window)?;
    high.ensure_aligned(low)?;

    let highest = high.derive(rolling(high.values(), window, window::max));
    let lowest = low.derive(rolling(low.values(), window, window::min));

    highest
        .zip_with(&lowest, |h, l| h - l)?
        .zip_with(close, |range, c| range / c)
}
