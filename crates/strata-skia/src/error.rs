// File: crates/strata-skia/src/error.rs
// Summary: Failures of the raster backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkiaError {
    #[error("failed to create a {width}x{height} raster surface")]
    SurfaceCreation { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
