//! Unicode block rendering of a module matrix
//!
//! Each module becomes a doubled glyph so it looks roughly square in a
//! terminal cell, which is about twice as tall as it is wide.

use std::io::{self, Write};

use crate::models::ModuleMatrix;

/// Full block, U+2588
pub const FULL_BLOCK: char = '\u{2588}';
/// Light shade, U+2591
pub const LIGHT_SHADE: char = '\u{2591}';

/// Glyphs used for filled and empty modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Glyph for a filled module
    pub filled: char,
    /// Glyph for an empty module
    pub empty: char,
    /// Times each glyph repeats per module
    pub repeat: usize,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            filled: FULL_BLOCK,
            empty: LIGHT_SHADE,
            repeat: 2,
        }
    }
}

/// Maps a [`ModuleMatrix`] to text lines
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    glyphs: Glyphs,
}

impl Renderer {
    /// Create a renderer with custom glyphs
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    fn push_module(&self, line: &mut String, filled: bool) {
        let glyph = if filled {
            self.glyphs.filled
        } else {
            self.glyphs.empty
        };
        line.extend(std::iter::repeat_n(glyph, self.glyphs.repeat));
    }

    /// One newline-terminated line per module row
    pub fn lines(&self, matrix: &ModuleMatrix) -> Vec<String> {
        matrix
            .rows()
            .map(|row| {
                let mut line = String::with_capacity(row.len() * self.glyphs.repeat * 3 + 1);
                for filled in row {
                    self.push_module(&mut line, filled);
                }
                line.push('\n');
                line
            })
            .collect()
    }

    /// Whole grid as one string
    pub fn render(&self, matrix: &ModuleMatrix) -> String {
        self.lines(matrix).concat()
    }

    /// Stream the grid into `out`
    pub fn write_to<W: Write>(&self, matrix: &ModuleMatrix, mut out: W) -> io::Result<()> {
        for line in self.lines(matrix) {
            out.write_all(line.as_bytes())?;
        }
        out.flush()
    }
}

/// Render with the default doubled full-block / light-shade glyphs
pub fn render(matrix: &ModuleMatrix) -> String {
    Renderer::default().render(matrix)
}
