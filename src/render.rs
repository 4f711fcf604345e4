//! Output sinks for rendered ASCII art.
//!
//! Three sinks exist and any combination can be used in one run:
//! standard output, a plain-text file and a minimal HTML document.
//! Every glyph is written [`GLYPH_REPEAT`] times side by side so the output
//! keeps roughly the source image's proportions.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::ascii::AsciiArt;
use crate::error::ConvertError;

/// How many times each glyph is repeated horizontally.
pub const GLYPH_REPEAT: usize = 3;

/// Rendering options shared by all sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Horizontal repeat count per glyph (at least 1)
    pub repeat: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            repeat: GLYPH_REPEAT,
        }
    }
}

fn push_glyph(line: &mut String, glyph: char, repeat: usize, escape_html: bool) {
    let escaped = if escape_html {
        match glyph {
            '&' => Some("&amp;"),
            '<' => Some("&lt;"),
            '>' => Some("&gt;"),
            _ => None,
        }
    } else {
        None
    };

    for _ in 0..repeat {
        match escaped {
            Some(entity) => line.push_str(entity),
            None => line.push(glyph),
        }
    }
}

fn render_row(row: &[char], repeat: usize, escape_html: bool) -> String {
    let mut line = String::with_capacity(row.len() * repeat);
    for &glyph in row {
        push_glyph(&mut line, glyph, repeat, escape_html);
    }
    line
}

/// Write the art as plain text, one newline-terminated line per row.
pub fn write_text<W: Write>(art: &AsciiArt, options: &RenderOptions, out: &mut W) -> io::Result<()> {
    let repeat = options.repeat.max(1);
    for row in art.rows() {
        out.write_all(render_row(row, repeat, false).as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write the art as an HTML document with the grid in a `<tt>` block.
pub fn write_html<W: Write>(art: &AsciiArt, options: &RenderOptions, out: &mut W) -> io::Result<()> {
    let repeat = options.repeat.max(1);
    out.write_all(b"<body>\n<tt>")?;
    for row in art.rows() {
        out.write_all(render_row(row, repeat, true).as_bytes())?;
        out.write_all(b"<br>\n")?;
    }
    out.write_all(b"</tt></body>\n")?;
    Ok(())
}

/// Render the art as a plain-text string.
pub fn render_text(art: &AsciiArt, options: &RenderOptions) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_text(art, options, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Render the art as an HTML document string.
pub fn render_html(art: &AsciiArt, options: &RenderOptions) -> String {
    let mut buf = Vec::new();
    let _ = write_html(art, options, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Destination for rendered art.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Print to standard output
    Stdout,
    /// Plain-text file
    Text(PathBuf),
    /// HTML document
    Html(PathBuf),
}

impl OutputSink {
    /// Human-readable name used in logs and errors.
    pub fn name(&self) -> String {
        match self {
            OutputSink::Stdout => "stdout".to_string(),
            OutputSink::Text(path) | OutputSink::Html(path) => path.display().to_string(),
        }
    }

    /// Write `art` to this sink.
    ///
    /// Files are created (or truncated), written through a buffer and flushed
    /// before returning so write errors surface here.
    pub fn emit(&self, art: &AsciiArt, options: &RenderOptions) -> Result<(), ConvertError> {
        let write_err = |source: io::Error| ConvertError::Write {
            target: self.name(),
            source,
        };

        match self {
            OutputSink::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                write_text(art, options, &mut handle).map_err(write_err)?;
                handle.flush().map_err(write_err)?;
            }
            OutputSink::Text(path) => {
                let mut writer = create_file(path)?;
                write_text(art, options, &mut writer).map_err(write_err)?;
                writer.flush().map_err(write_err)?;
            }
            OutputSink::Html(path) => {
                let mut writer = create_file(path)?;
                write_html(art, options, &mut writer).map_err(write_err)?;
                writer.flush().map_err(write_err)?;
            }
        }

        log::info!("Wrote {}x{} art to {}", art.width(), art.height(), self.name());
        Ok(())
    }
}

fn create_file(path: &Path) -> Result<BufWriter<File>, ConvertError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ConvertError::Create {
            path: path.to_path_buf(),
            source,
        })
}
