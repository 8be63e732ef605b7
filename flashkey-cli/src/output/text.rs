//! Plain text output formatter

use super::{Body, Document, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one item per line
pub struct TextFormatter<W: Write> {
    writer: W,
    headers: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, headers: bool) -> Self {
        Self { writer, headers }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_document(&mut self, document: &Document) -> Result<()> {
        if self.headers {
            writeln!(self.writer, "==> {} <==", document.source)?;
        }

        match &document.body {
            Body::Keywords { keywords } => {
                for keyword in keywords {
                    writeln!(self.writer, "{keyword}")?;
                }
            }
            Body::Matches { matches } => {
                for found in matches {
                    writeln!(self.writer, "{}\t{}\t{}", found.start, found.end, found.value)?;
                }
            }
            Body::Replaced { text, .. } => {
                // Rewritten text is emitted verbatim
                write!(self.writer, "{text}")?;
                if self.headers && !text.ends_with('\n') {
                    writeln!(self.writer)?;
                }
            }
            Body::Sentences { sentences } => {
                for sentence in sentences {
                    writeln!(
                        self.writer,
                        "{}\t{}",
                        sentence.text.trim(),
                        sentence.keywords.join(", ")
                    )?;
                }
            }
            Body::Dictionary { entries } => {
                for entry in entries {
                    writeln!(self.writer, "{}\t{}", entry.keyword, entry.value)?;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
