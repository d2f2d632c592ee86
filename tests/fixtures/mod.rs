#![allow(dead_code)]

use serde::{Deserialize, de::DeserializeOwned};
use volatility_metrics::{Ohlcv, OhlcvFrame, Price, Series, Timestamp};

/// Hourly OHLCV bar parsed from the fixture CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub open_time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Ohlcv for RefBar {
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

    fn volume(&self) -> f64 {
        self.volume
    }
}

/// Reference value with timestamp. Timestamps absent from a reference file
/// are expected to be missing (`NaN`) in the computed series.
#[derive(Debug, Deserialize)]
pub struct RefValue {
    pub open_time: u64,
    pub expected: f64,
}

const OHLCV_PATH: &str = "tests/fixtures/data/ohlcv-1h.csv";

/// Load reference OHLCV bars.
pub fn load_reference_ohlcvs() -> Vec<RefBar> {
    load_records(OHLCV_PATH, "invalid OHLCV record")
}

/// Load reference bars as an aligned frame.
pub fn load_reference_frame() -> OhlcvFrame {
    OhlcvFrame::from_bars(&load_reference_ohlcvs()).expect("fixture bars are strictly increasing")
}

/// Load single-value reference data.
pub fn load_ref_values(path: &str) -> Vec<RefValue> {
    load_records(path, "invalid reference record")
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Walks `series` against a reference file: every referenced timestamp must
/// carry a value within `tolerance`, every other position must be `NaN`.
pub fn assert_matches_reference(series: &Series, path: &str, tolerance: f64, name: &str) {
    let reference = load_ref_values(path);

    let mut ref_idx = 0;
    for (i, (&t, value)) in series.index().iter().zip(series.iter()).enumerate() {
        if ref_idx < reference.len() && t == reference[ref_idx].open_time {
            assert_near(
                value,
                reference[ref_idx].expected,
                tolerance,
                &format!("{name} at bar {i} (t={t})"),
            );
            ref_idx += 1;
        } else {
            assert!(value.is_nan(), "{name} at bar {i} (t={t}): expected NaN, got {value}");
        }
    }

    assert_eq!(
        ref_idx,
        reference.len(),
        "not all reference values checked: {ref_idx}/{}",
        reference.len()
    );
}

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
