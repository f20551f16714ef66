use std::path::PathBuf;
use thiserror::Error;

/// Reasons the grid extractor can give up on an image
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Zero width or height
    #[error("image has no pixels")]
    EmptyImage,

    /// Every pixel is at or above the ink threshold
    #[error("no dark pixels found; image does not contain a QR code")]
    NoInk,

    /// First dark run is shorter than the finder width
    #[error(
        "no module structure detected: first dark run is {run} px, shorter than one {modules}-module finder pattern"
    )]
    ZeroBlockSize {
        /// Measured run length in pixels
        run: usize,
        /// Finder width in modules
        modules: usize,
    },
}

/// qr2unicode error types
#[derive(Error, Debug)]
pub enum Error {
    /// Path exists but is not an image
    #[error("invalid input {}: exists but is not an image file", .0.display())]
    InvalidInput(PathBuf),

    /// Raster holds no usable module grid
    #[error("grid extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// Intermediate PNG could not be written
    #[error("temporary image {}: {source}", path.display())]
    TempFile {
        /// Temporary file location
        path: PathBuf,
        /// Underlying encoder error
        #[source]
        source: image::ImageError,
    },

    /// Image could not be decoded
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Text could not be encoded
    #[error("QR generation failed: {0}")]
    Generate(#[from] qrcode::types::QrError),

    /// File or stream IO failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
