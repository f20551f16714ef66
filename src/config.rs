use crate::extractor::{ExtractorConfig, InkRule};
use crate::raster::QrStyle;
use crate::render::Glyphs;

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse::<T>().ok())
}

fn parse_env_ink(name: &str) -> Option<InkRule> {
    match std::env::var(name).ok()?.trim().to_ascii_lowercase().as_str() {
        "black" | "pure" => Some(InkRule::PureBlack),
        "threshold" => Some(InkRule::Threshold),
        _ => None,
    }
}

/// Ink threshold for the bounding box (and sampling under `threshold` ink)
pub const ENV_THRESHOLD: &str = "QR2UNICODE_THRESHOLD";
/// `black` or `threshold`
pub const ENV_INK: &str = "QR2UNICODE_INK";
/// Pixels per module when generating
pub const ENV_BOX_SIZE: &str = "QR2UNICODE_BOX_SIZE";
/// Quiet-zone modules when generating
pub const ENV_BORDER: &str = "QR2UNICODE_BORDER";

/// Everything a conversion needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Grid extraction constants
    pub extractor: ExtractorConfig,
    /// Output glyphs
    pub glyphs: Glyphs,
    /// QR generator settings
    pub qr: QrStyle,
}

impl Config {
    /// Defaults with `QR2UNICODE_*` environment overrides applied.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(threshold) = parse_env::<u8>(ENV_THRESHOLD) {
            config.extractor.threshold = threshold;
        }
        if let Some(ink) = parse_env_ink(ENV_INK) {
            config.extractor.ink = ink;
        }
        if let Some(box_size) = parse_env::<u32>(ENV_BOX_SIZE) {
            config.qr.box_size = box_size.clamp(1, 64);
        }
        if let Some(border) = parse_env::<u32>(ENV_BORDER) {
            config.qr.border = border.min(64);
        }
        config
    }

    /// Use `< threshold` for every ink decision
    pub fn with_unified_threshold(mut self) -> Self {
        self.extractor.ink = InkRule::Threshold;
        self
    }
}
