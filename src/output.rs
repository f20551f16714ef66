use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;

/// Where rendered text goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputSink {
    /// Standard output
    #[default]
    Stdout,
    /// File, overwritten as UTF-8
    File(PathBuf),
}

impl OutputSink {
    /// File sink if a path was given, stdout otherwise
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(OutputSink::Stdout, OutputSink::File)
    }

    /// Write `text` in full
    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            OutputSink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()?;
            }
            OutputSink::File(path) => {
                fs::write(path, text)?;
                debug!(path = %path.display(), bytes = text.len(), "wrote output file");
            }
        }
        Ok(())
    }
}
