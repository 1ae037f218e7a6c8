// File: crates/strata-core/src/error.rs
// Summary: Construction-time validation errors for series data.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("series '{name}' has {x_len} x values but {y_len} y values")]
    LengthMismatch { name: String, x_len: usize, y_len: usize },
    #[error("stack layer {layer} has {len} values but the base has {expected}")]
    StackLengthMismatch { layer: usize, len: usize, expected: usize },
}

pub type SeriesResult<T> = Result<T, SeriesError>;
