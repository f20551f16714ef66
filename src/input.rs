use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// What the positional CLI argument turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// An existing image file to decode
    ImageFile(PathBuf),
    /// Text to encode into a fresh QR code
    Text(String),
}

impl InputSource {
    /// Decide between the image and text paths.
    ///
    /// - existing regular file sniffed as `image/*` → [`InputSource::ImageFile`]
    /// - path that does not exist → [`InputSource::Text`]
    /// - anything else that exists → [`Error::InvalidInput`]
    pub fn classify(input: &str) -> Result<Self> {
        let path = Path::new(input);
        if !input.is_empty() && path.exists() {
            if path.is_file() && is_image_file(path)? {
                debug!(path = %path.display(), "input is an image file");
                return Ok(InputSource::ImageFile(path.to_path_buf()));
            }
            return Err(Error::InvalidInput(path.to_path_buf()));
        }
        debug!(len = input.len(), "input treated as text to encode");
        Ok(InputSource::Text(input.to_string()))
    }
}

/// Sniff the file's magic bytes; true for any `image/*` type
pub fn is_image_file(path: &Path) -> Result<bool> {
    let kind = infer::get_from_path(path)?;
    if let Some(kind) = &kind {
        debug!(mime = kind.mime_type(), "sniffed input type");
    }
    Ok(kind.is_some_and(|k| k.matcher_type() == infer::MatcherType::Image))
}
