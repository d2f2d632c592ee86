// src/test_util.rs

use crate::{Ohlcv, Price, Series, Timestamp};

/// Asserts that two `f64` values are approximately equal using a
/// relative epsilon of `4 * f64::EPSILON`.
macro_rules! assert_approx {
    ($actual:expr, $expected:expr) => {{
        let (a, e) = ($actual, $expected);
        assert!(
            (a - e).abs() <= e.abs() * 4.0 * f64::EPSILON,
            "assert_approx failed: actual={a}, expected={e}, diff={}",
            (a - e).abs(),
        );
    }};
}

/// Asserts two `f64` values are within an absolute tolerance.
macro_rules! assert_near {
    ($actual:expr, $expected:expr, $tolerance:expr) => {{
        let (a, e) = ($actual, $expected);
        assert!(
            (a - e).abs() <= $tolerance,
            "assert_near failed: actual={a}, expected={e}, diff={}",
            (a - e).abs(),
        );
    }};
}

pub(crate) use assert_approx;
pub(crate) use assert_near;

pub struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub open_time: u64,
}

impl Bar {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
            open_time: 0,
        }
    }

    pub fn at(mut self, open_time: u64) -> Self {
        self.open_time = open_time;
        self
    }
}

impl Ohlcv for Bar {
    fn open(&self) -> Price {
        self.open
    }
    fn high(&self) -> Price {
        self.high
    }
    fn low(&self) -> Price {
        self.low
    }
    fn close(&self) -> Price {
        self.close
    }
    fn open_time(&self) -> Timestamp {
        self.open_time
    }
}

/// Series over a positional index `0..values.len()`.
pub fn series(values: &[f64]) -> Series {
    Series::from_values(values.to_vec())
}

/// Series over an explicit index.
pub fn series_at(index: &[Timestamp], values: &[f64]) -> Series {
    Series::new(index.to_vec(), values.to_vec()).unwrap()
}

/// Asserts position-wise equality where `NaN` matches `NaN` and finite values
/// match within `tolerance`.
pub fn assert_series_near(actual: &Series, expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        if e.is_nan() {
            assert!(a.is_nan(), "expected NaN at {i}, got {a}");
        } else {
            assert!(
                (a - e).abs() <= tolerance,
                "at {i}: expected {e}, got {a}, diff {}",
                (a - e).abs()
            );
        }
    }
}
