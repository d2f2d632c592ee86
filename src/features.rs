use std::{fmt::Display, num::NonZero};

use crate::{
    AtrSmoothing, OhlcvFrame, PriceSource, Result, Series, average_true_range_with,
    efficiency_ratio, log_returns, normalized_range, rate_of_change, rolling_range_over_price,
    rolling_zscore,
};

/// Window lengths and sources for [`VolatilityFeatures`].
///
/// Configs are value types: cheap to clone, compare, and hash. Windows are
/// always non-zero, so computing features from a built config never fails on
/// window validation.
///
/// # Example
///
/// ```
/// use volatility_metrics::{AtrSmoothing, FeatureConfig};
/// use std::num::NonZero;
///
/// let config = FeatureConfig::builder()
///     .atr_window(NonZero::new(20).unwrap())
///     .atr_smoothing(AtrSmoothing::Wilder)
///     .build();
///
/// assert_eq!(config.atr_window(), 20);
/// assert_eq!(config.zscore_window(), 20);
/// assert_eq!(config.roc_window(), 14);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct FeatureConfig {
    zscore_window: usize,
    range_window: usize,
    roc_window: usize,
    atr_window: usize,
    source: PriceSource,
    atr_smoothing: AtrSmoothing,
}

impl FeatureConfig {
    /// Returns a new builder with default values.
    #[must_use]
    pub fn builder() -> FeatureConfigBuilder {
        FeatureConfigBuilder::new()
    }

    /// Window of the rolling z-score of log returns.
    #[inline]
    #[must_use]
    pub fn zscore_window(&self) -> usize {
        self.zscore_window
    }

    /// Window of the rolling range over price.
    #[inline]
    #[must_use]
    pub fn range_window(&self) -> usize {
        self.range_window
    }

    /// Look-back of the rate of change.
    #[inline]
    #[must_use]
    pub fn roc_window(&self) -> usize {
        self.roc_window
    }

    /// Window of the average true range.
    #[inline]
    #[must_use]
    pub fn atr_window(&self) -> usize {
        self.atr_window
    }

    /// Price feeding log returns and rate of change.
    #[inline]
    #[must_use]
    pub fn source(&self) -> PriceSource {
        self.source
    }

    #[inline]
    #[must_use]
    pub fn atr_smoothing(&self) -> AtrSmoothing {
        self.atr_smoothing
    }
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Display for FeatureConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FeatureConfig(z: {}, range: {}, roc: {}, atr: {} {}, {})",
            self.zscore_window,
            self.range_window,
            self.roc_window,
            self.atr_window,
            self.atr_smoothing,
            self.source
        )
    }
}

/// Builder for [`FeatureConfig`].
///
/// Defaults: z-score window 20, range, ROC and ATR windows 14,
/// source = [`PriceSource::Close`], ATR smoothing = [`AtrSmoothing::Simple`].
pub struct FeatureConfigBuilder {
    zscore_window: usize,
    range_window: usize,
    roc_window: usize,
    atr_window: usize,
    source: PriceSource,
    atr_smoothing: AtrSmoothing,
}

impl FeatureConfigBuilder {
    fn new() -> Self {
        Self {
            zscore_window: 20,
            range_window: 14,
            roc_window: 14,
            atr_window: 14,
            source: PriceSource::Close,
            atr_smoothing: AtrSmoothing::Simple,
        }
    }

    #[inline]
    #[must_use]
    pub fn zscore_window(mut self, window: NonZero<usize>) -> Self {
        self.zscore_window = window.get();
        self
    }

    #[inline]
    #[must_use]
    pub fn range_window(mut self, window: NonZero<usize>) -> Self {
        self.range_window = window.get();
        self
    }

    #[inline]
    #[must_use]
    pub fn roc_window(mut self, window: NonZero<usize>) -> Self {
        self.roc_window = window.get();
        self
    }

    #[inline]
    #[must_use]
    pub fn atr_window(mut self, window: NonZero<usize>) -> Self {
        self.atr_window = window.get();
        self
    }

    #[inline]
    #[must_use]
    pub fn source(mut self, source: PriceSource) -> Self {
        self.source = source;
        self
    }

    #[inline]
    #[must_use]
    pub fn atr_smoothing(mut self, smoothing: AtrSmoothing) -> Self {
        self.atr_smoothing = smoothing;
        self
    }

    #[inline]
    #[must_use]
    pub fn build(self) -> FeatureConfig {
        FeatureConfig {
            zscore_window: self.zscore_window,
            range_window: self.range_window,
            roc_window: self.roc_window,
            atr_window: self.atr_window,
            source: self.source,
            atr_smoothing: self.atr_smoothing,
        }
    }
}

/// Every volatility and trend feature for one [`OhlcvFrame`], aligned to the
/// frame's index.
///
/// # Example
///
/// ```
/// use volatility_metrics::{FeatureConfig, OhlcvFrame, VolatilityFeatures};
/// # use volatility_metrics::{Ohlcv, Price, Timestamp};
/// #
/// # struct Bar(f64, u64);
/// # impl Ohlcv for Bar {
/// #     fn open(&self) -> Price { self.0 }
/// #     fn high(&self) -> Price { self.0 + 1.0 }
/// #     fn low(&self) -> Price { self.0 - 1.0 }
/// #     fn close(&self) -> Price { self.0 }
/// #     fn open_time(&self) -> Timestamp { self.1 }
/// # }
///
/// let bars: Vec<Bar> = (1..=40_u32)
///     .map(|i| Bar(100.0 + f64::from(i), u64::from(i)))
///     .collect();
/// let frame = OhlcvFrame::from_bars(&bars).unwrap();
///
/// let features = VolatilityFeatures::compute(&frame, &FeatureConfig::default()).unwrap();
///
/// assert_eq!(features.efficiency_ratio().len(), 40);
/// assert!(features.efficiency_ratio().values()[39] > 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VolatilityFeatures {
    log_returns: Series,
    return_zscore: Series,
    normalized_range: Series,
    range_over_price: Series,
    rate_of_change: Series,
    average_true_range: Series,
    efficiency_ratio: Series,
}

impl VolatilityFeatures {
    /// Computes all features of `frame`.
    ///
    /// # Errors
    ///
    /// Propagates the structural errors of the underlying functions. A frame
    /// built with [`OhlcvFrame::from_bars`] is always aligned, so in practice
    /// this does not fail.
    pub fn compute(frame: &OhlcvFrame, config: &FeatureConfig) -> Result<Self> {
        tracing::debug!(bars = frame.len(), %config, "computing volatility features");

        let (high, low, close) = (frame.high(), frame.low(), frame.close());
        let price = frame.price(config.source);

        let log_returns = log_returns(&price);
        let return_zscore = rolling_zscore(&log_returns, config.zscore_window)?;
        let rate_of_change = rate_of_change(&price, config.roc_window)?;
        let average_true_range =
            average_true_range_with(high, low, close, config.atr_window, config.atr_smoothing)?;
        let efficiency_ratio = efficiency_ratio(&rate_of_change, &average_true_range)?;

        Ok(Self {
            log_returns,
            return_zscore,
            normalized_range: normalized_range(high, low, close)?,
            range_over_price: rolling_range_over_price(high, low, close, config.range_window)?,
            rate_of_change,
            average_true_range,
            efficiency_ratio,
        })
    }

    #[must_use]
    pub fn log_returns(&self) -> &Series {
        &self.log_returns
    }

    /// Rolling z-score of the log returns.
    #[must_use]
    pub fn return_zscore(&self) -> &Series {
        &self.return_zscore
    }

    #[must_use]
    pub fn normalized_range(&self) -> &Series {
        &self.normalized_range
    }

    #[must_use]
    pub fn range_over_price(&self) -> &Series {
        &self.range_over_price
    }

    #[must_use]
    pub fn rate_of_change(&self) -> &Series {
        &self.rate_of_change
    }

    #[must_use]
    pub fn average_true_range(&self) -> &Series {
        &self.average_true_range
    }

    #[must_use]
    pub fn efficiency_ratio(&self) -> &Series {
        &self.efficiency_ratio
    }
}
