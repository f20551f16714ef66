//! qr2unicode - QR codes as terminal-friendly Unicode block grids
//!
//! Takes either text (encoded into a new QR code) or an existing QR image,
//! recovers the module grid from the raster and renders each module as a
//! doubled block character.
//!
//! The raster is assumed to be an axis-aligned, undistorted capture. The
//! payload is never decoded.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Conversion settings and environment overrides
pub mod config;
/// Error types
pub mod error;
/// Module-grid extraction (bounding box, block size, sampling)
pub mod extractor;
/// Input dispatch: image path or text
pub mod input;
/// Core data structures (PixelGrid, BoundingBox, ModuleMatrix)
pub mod models;
/// Output sinks
pub mod output;
/// End-to-end conversion
pub mod pipeline;
/// QR generation, image decoding and temporary files
pub mod raster;
/// Unicode rendering
pub mod render;

pub use config::Config;
pub use error::{Error, ExtractionError, Result};
pub use extractor::{ExtractorConfig, GridExtractor, GridGeometry, InkRule, extract};
pub use input::InputSource;
pub use models::{BoundingBox, ModuleMatrix, PixelGrid};
pub use output::OutputSink;
pub use pipeline::Converter;
pub use raster::QrStyle;
pub use render::{Glyphs, Renderer, render};
