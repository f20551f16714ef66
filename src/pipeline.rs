use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::extractor::GridExtractor;
use crate::input::InputSource;
use crate::models::{ModuleMatrix, PixelGrid};
use crate::output::OutputSink;
use crate::raster::{TempImage, generate_qr_image, load_pixel_grid};
use crate::render::Renderer;

/// Runs input dispatch, rasterization, extraction and rendering
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Create a converter
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Settings in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Module matrix for `input`, which is either an image path or text.
    ///
    /// On the text path the temporary PNG is removed before this returns,
    /// whether or not extraction succeeded.
    pub fn convert(&self, input: &str) -> Result<ModuleMatrix> {
        let extractor = GridExtractor::new(self.config.extractor);
        match InputSource::classify(input)? {
            InputSource::ImageFile(path) => {
                let grid = load_pixel_grid(&path)?;
                debug!(width = grid.width(), height = grid.height(), "decoded input image");
                Ok(extractor.extract(&grid)?)
            }
            InputSource::Text(text) => {
                let image = generate_qr_image(&text, &self.config.qr)?;
                let temp = TempImage::create(&image)?;
                let grid = load_pixel_grid(temp.path())?;
                Ok(extractor.extract(&grid)?)
            }
        }
    }

    /// Extract from an already decoded raster
    pub fn convert_grid(&self, grid: &PixelGrid) -> Result<ModuleMatrix> {
        Ok(GridExtractor::new(self.config.extractor).extract(grid)?)
    }

    /// Rendered text for `input`
    pub fn convert_to_text(&self, input: &str) -> Result<String> {
        let matrix = self.convert(input)?;
        Ok(Renderer::new(self.config.glyphs).render(&matrix))
    }

    /// Convert `input` and write the result to `sink`
    pub fn run(&self, input: &str, sink: &OutputSink) -> Result<()> {
        let text = self.convert_to_text(input)?;
        debug!("outputting QR code as Unicode characters");
        sink.write(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ExtractionError};

    #[test]
    fn test_text_round_trip_is_version_one() {
        let matrix = Converter::default().convert("hello").unwrap();
        assert_eq!((matrix.width(), matrix.height()), (21, 21));
        // Top-left finder corner
        assert!(matrix.get(0, 0));
        assert!(matrix.get(6, 6));
        assert!(!matrix.get(7, 7));
    }

    #[test]
    fn test_convert_grid_reports_extraction_error() {
        let grid = PixelGrid::filled(32, 32, 255);
        let err = Converter::default().convert_grid(&grid).unwrap_err();
        assert!(matches!(err, Error::Extraction(ExtractionError::NoInk)));
    }

    #[test]
    fn test_convert_to_text_shape() {
        let text = Converter::default().convert_to_text("hello").unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 21);
        assert!(lines.iter().all(|l| l.chars().count() == 42));
        assert!(text.ends_with('\n'));
    }
}
