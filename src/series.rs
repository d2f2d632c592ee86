use crate::{Error, Result, Timestamp};

use std::sync::Arc;

/// A time-indexed sequence of `f64` values.
///
/// Pairs a strictly increasing timestamp index with one value per timestamp.
/// Missing values are `NaN`; arithmetic propagates them under IEEE-754 rules.
///
/// Series are immutable. Every operation returns a new value buffer; derived
/// series share their input's index, which is reference counted and never
/// modified, so deriving from a series is cheap and never aliases its values.
///
/// # Example
///
/// ```
/// use volatility_metrics::Series;
///
/// let close = Series::new(vec![1, 2, 3], vec![100.0, 110.0, 99.0]).unwrap();
/// let prev = close.shift(1);
///
/// assert!(prev.values()[0].is_nan());
/// assert_eq!(prev.values()[1..], [100.0, 110.0]);
/// assert!(prev.is_aligned_with(&close));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    index: Arc<[Timestamp]>,
    values: Vec<f64>,
}

impl Series {
    /// Creates a series from an index and its values.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if the lengths differ,
    /// [`Error::IndexNotIncreasing`] if the index is not strictly increasing.
    pub fn new(index: Vec<Timestamp>, values: Vec<f64>) -> Result<Self> {
        if index.len() != values.len() {
            tracing::debug!(
                index = index.len(),
                values = values.len(),
                "rejecting series with mismatched lengths"
            );
            return Err(Error::LengthMismatch {
                index: index.len(),
                values: values.len(),
            });
        }

        Ok(Self {
            index: checked_index(index)?,
            values,
        })
    }

    /// Creates a series over the positional index `0..values.len()`.
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            index: (0..values.len() as Timestamp).collect(),
            values,
        }
    }

    /// Builds a series on an already validated, shared index.
    pub(crate) fn with_index(index: Arc<[Timestamp]>, values: Vec<f64>) -> Self {
        debug_assert_eq!(index.len(), values.len());
        Self { index, values }
    }

    /// Same index, new values.
    pub(crate) fn derive(&self, values: Vec<f64>) -> Self {
        Self::with_index(Arc::clone(&self.index), values)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The timestamps, one per value.
    #[inline]
    #[must_use]
    pub fn index(&self) -> &[Timestamp] {
        &self.index
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the series, returning its values.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Value at `position`, `None` when out of bounds. A present value may
    /// still be `NaN`.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<f64> {
        self.values.get(position).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Applies `f` to every value.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        self.derive(self.values.iter().map(|&v| f(v)).collect())
    }

    /// Combines two aligned series pointwise.
    ///
    /// # Errors
    ///
    /// [`Error::Alignment`] if the indices differ.
    pub fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        self.ensure_aligned(other)?;

        Ok(self.derive(
            self.values
                .iter()
                .zip(&other.values)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        ))
    }

    /// Looks back `k` positions: `result[i] = self[i - k]`, with `k` leading
    /// `NaN` values.
    #[must_use]
    pub fn shift(&self, k: usize) -> Self {
        let lead = k.min(self.len());
        let mut values = vec![f64::NAN; lead];
        values.extend_from_slice(&self.values[..self.len() - lead]);

        self.derive(values)
    }

    /// Running sum that skips missing values: `NaN` positions stay `NaN` and
    /// do not reset or poison the total carried to later positions.
    #[must_use]
    pub fn cumulative_sum(&self) -> Self {
        let mut total = 0.0;

        self.map(|v| {
            if v.is_nan() {
                f64::NAN
            } else {
                total += v;
                total
            }
        })
    }

    /// Last non-`NaN` value with its timestamp.
    #[must_use]
    pub fn last_valid(&self) -> Option<(Timestamp, f64)> {
        self.index
            .iter()
            .zip(&self.values)
            .rev()
            .find(|(_, v)| !v.is_nan())
            .map(|(&t, &v)| (t, v))
    }

    /// Whether both series share the same timestamps in the same order.
    #[must_use]
    pub fn is_aligned_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.index, &other.index) || self.index == other.index
    }

    /// # Errors
    ///
    /// [`Error::Alignment`] if the indices differ.
    pub fn ensure_aligned(&self, other: &Self) -> Result<()> {
        if self.is_aligned_with(other) {
            return Ok(());
        }

        let position = self
            .index
            .iter()
            .zip(other.index.iter())
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| self.len().min(other.len()));

        tracing::debug!(
            left = self.len(),
            right = other.len(),
            position,
            "rejecting misaligned series"
        );

        Err(Error::Alignment {
            left: self.len(),
            right: other.len(),
            position,
        })
    }

    pub(crate) fn shared_index(&self) -> &Arc<[Timestamp]> {
        &self.index
    }
}

pub(crate) fn checked_index(index: Vec<Timestamp>) -> Result<Arc<[Timestamp]>> {
    if let Some(position) = index.windows(2).position(|pair| pair[0] >= pair[1]) {
        let (previous, current) = (index[position], index[position + 1]);
        tracing::debug!(
            position = position + 1,
            previous,
            current,
            "rejecting non-increasing index"
        );
        return Err(Error::IndexNotIncreasing {
            position: position + 1,
            previous,
            current,
        });
    }

    Ok(index.into())
}
