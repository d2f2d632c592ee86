//! Volatility and trend features over OHLCV price series.
//!
//! Every indicator is a pure function from one or more [`Series`] to a new
//! [`Series`] of the same length and index. Nothing is streamed or cached:
//! call a function, get a freshly allocated result, inputs untouched.
//!
//! - Returns and statistics: [`log_returns`], [`rolling_mean`],
//!   [`rolling_std`], [`rolling_zscore`].
//! - Range-based volatility: [`normalized_range`], [`rolling_range_over_price`].
//! - Trend and volatility composites: [`rate_of_change`], [`true_range`],
//!   [`average_true_range`], [`efficiency_ratio`].
//!
//! # Missing values
//!
//! Missing values are `f64::NAN`. Rolling functions leave their first
//! `window - 1` positions missing, look-backs leave their first `window`
//! positions missing, and any window or operand holding a `NaN` produces
//! `NaN`. Numeric degeneracies (zero divisors, logarithms of non-positive
//! prices, zero variance) yield `NaN` or `±inf` rather than errors.
//!
//! # Errors
//!
//! Only structural misuse is an [`Error`]: a zero window, or multi-series
//! inputs whose indices differ.
//!
//! # Example
//!
//! ```
//! use volatility_metrics::{Series, average_true_range, efficiency_ratio, rate_of_change};
//!
//! let index = vec![1, 2, 3, 4, 5];
//! let high = Series::new(index.clone(), vec![10.0, 12.0, 11.0, 13.0, 14.0]).unwrap();
//! let low = Series::new(index.clone(), vec![8.0, 9.0, 9.5, 10.0, 12.0]).unwrap();
//! let close = Series::new(index, vec![9.0, 11.0, 10.0, 12.0, 13.0]).unwrap();
//!
//! let roc = rate_of_change(&close, 2).unwrap();
//! let atr = average_true_range(&high, &low, &close, 2).unwrap();
//! let er = efficiency_ratio(&roc, &atr).unwrap();
//!
//! assert_eq!(er.index(), &[1, 2, 3, 4, 5]);
//! assert!(er.values()[4] > 0.0);
//! ```

mod error;
mod features;
mod frame;
mod ohlcv;
mod price_source;
mod range;
mod returns;
mod series;
mod trend;
mod window;

pub use crate::error::{Error, Result};
pub use crate::features::{FeatureConfig, FeatureConfigBuilder, VolatilityFeatures};
pub use crate::frame::OhlcvFrame;
pub use crate::ohlcv::{Ohlcv, Price, Timestamp};
pub use crate::price_source::PriceSource;
pub use crate::series::Series;

pub use crate::range::{normalized_range, rolling_range_over_price};
pub use crate::returns::{log_returns, rolling_mean, rolling_std, rolling_zscore};
pub use crate::trend::{
    AtrSmoothing, average_true_range, average_true_range_with, efficiency_ratio, rate_of_change,
    true_range,
};

#[cfg(test)]
mod test_util;
