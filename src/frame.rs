use crate::{Ohlcv, Price, PriceSource, Result, Series, Timestamp, series::checked_index};

/// Aligned open/high/low/close/volume series built from a slice of bars.
///
/// All five series share one strictly increasing index taken from the bars'
/// [`open_time`](Ohlcv::open_time), so any combination of them passes the
/// alignment checks of the indicator functions.
///
/// # Example
///
/// ```
/// use volatility_metrics::{OhlcvFrame, PriceSource, normalized_range};
/// # use volatility_metrics::{Ohlcv, Price, Timestamp};
/// #
/// # struct Bar(f64, f64, f64, u64);
/// # impl Ohlcv for Bar {
/// #     fn open(&self) -> Price { self.2 }
/// #     fn high(&self) -> Price { self.0 }
/// #     fn low(&self) -> Price { self.1 }
/// #     fn close(&self) -> Price { self.2 }
/// #     fn open_time(&self) -> Timestamp { self.3 }
/// # }
///
/// let bars = [Bar(10.0, 8.0, 9.0, 1), Bar(12.0, 9.0, 11.0, 2)];
/// let frame = OhlcvFrame::from_bars(&bars).unwrap();
///
/// let nr = normalized_range(frame.high(), frame.low(), frame.close()).unwrap();
/// assert_eq!(nr.index(), &[1, 2]);
/// assert_eq!(frame.price(PriceSource::HL2).values(), &[9.0, 10.5]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OhlcvFrame {
    open: Series,
    high: Series,
    low: Series,
    close: Series,
    volume: Series,
}

impl OhlcvFrame {
    /// Extracts every field of `bars` into aligned series.
    ///
    /// # Errors
    ///
    /// [`Error::IndexNotIncreasing`](crate::Error::IndexNotIncreasing) if the
    /// bars' open times are not strictly increasing.
    pub fn from_bars<B: Ohlcv>(bars: &[B]) -> Result<Self> {
        let index = checked_index(bars.iter().map(Ohlcv::open_time).collect())?;
        let column = |field: fn(&B) -> f64| {
            Series::with_index(index.clone(), bars.iter().map(field).collect())
        };

        Ok(Self {
            open: column(B::open),
            high: column(B::high),
            low: column(B::low),
            close: column(B::close),
            volume: column(B::volume),
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> &[Timestamp] {
        self.close.index()
    }

    #[inline]
    #[must_use]
    pub fn open(&self) -> &Series {
        &self.open
    }

    #[inline]
    #[must_use]
    pub fn high(&self) -> &Series {
        &self.high
    }

    #[inline]
    #[must_use]
    pub fn low(&self) -> &Series {
        &self.low
    }

    #[inline]
    #[must_use]
    pub fn close(&self) -> &Series {
        &self.close
    }

    #[inline]
    #[must_use]
    pub fn volume(&self) -> &Series {
        &self.volume
    }

    /// The price series selected by `source`, on the frame's index.
    #[must_use]
    pub fn price(&self, source: PriceSource) -> Series {
        let values = (0..self.len())
            .map(|position| source.extract(&Row { frame: self, position }))
            .collect();

        Series::with_index(self.close.shared_index().clone(), values)
    }
}

/// One bar of a frame, read back through [`Ohlcv`].
struct Row<'a> {
    frame: &'a OhlcvFrame,
    position: usize,
}

impl Ohlcv for Row<'_> {
    fn open(&self) -> Price {
        self.frame.open.values()[self.position]
    }

    fn high(&self) -> Price {
        self.frame.high.values()[self.position]
    }

    fn low(&self) -> Price {
        self.frame.low.values()[self.position]
    }

    fn close(&self) -> Price {
        self.frame.close.values()[self.position]
    }

    fn open_time(&self) -> Timestamp {
        self.frame.index()[self.position]
    }

    fn volume(&self) -> f64 {
        self.frame.volume.values()[self.position]
    }
}
