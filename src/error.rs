use crate::Timestamp;

use thiserror::Error;

/// Structural errors raised by series construction and indicator functions.
///
/// Numeric degeneracies (division by zero, logarithm of a non-positive price,
/// zero variance) are never reported here. They surface as `NaN` or `±inf` at
/// the affected positions of the returned series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A rolling or shifted operation was given a zero-length window.
    #[error("invalid window: {window} (must be at least 1)")]
    InvalidWindow { window: usize },

    /// Two series passed to the same function do not share an index.
    ///
    /// `position` is the first index slot where the timestamps differ, or the
    /// shorter length when one index is a prefix of the other.
    #[error("misaligned series: lengths {left} and {right}, first difference at position {position}")]
    Alignment {
        left: usize,
        right: usize,
        position: usize,
    },

    /// Index and values given to [`Series::new`](crate::Series::new) differ
    /// in length.
    #[error("index has {index} timestamps but {values} values were given")]
    LengthMismatch { index: usize, values: usize },

    /// Timestamps are not strictly increasing.
    #[error("index not strictly increasing at position {position}: {previous} then {current}")]
    IndexNotIncreasing {
        position: usize,
        previous: Timestamp,
        current: Timestamp,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
