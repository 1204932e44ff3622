//! Streaming output of a report document.
//!
//! [`ReportWriter`] writes findings to an output as they happen instead of
//! holding them until the end of the run. The document head (the analysis
//! element, the metadata block and the opening results tag) is written
//! before the first element; [`close`](ReportWriter::close) writes the two
//! closing tags, once, and only if any part of the head reached the output.
//! A head interrupted by an I/O error is resumed where it stopped, never
//! restarted.

use std::io::{self, Write};

use firehose_model::{join_nonempty, Metadata, ToMarkup, SEPARATOR};
use log::{debug, warn};

use crate::error::ReportError;

/// Writes report elements to an output as a well-formed document.
pub struct ReportWriter<W: Write> {
    writer: Option<W>,
    head: String,
    head_sent: usize,
    elements: usize,
    closed: bool,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a writer for a document with the given metadata.
    ///
    /// Nothing is written until the first element arrives.
    pub fn new(writer: W, metadata: Metadata) -> Self {
        let mut head = join_nonempty(
            ["<analysis>".to_string(), metadata.to_markup(), "<results>".to_string()],
            SEPARATOR,
        );
        head.push('\n');
        Self {
            writer: Some(writer),
            head,
            head_sent: 0,
            elements: 0,
            closed: false,
        }
    }

    /// Writes one element on its own line and flushes.
    ///
    /// Elements that render to nothing are skipped.
    pub fn write_element(&mut self, element: &impl ToMarkup) -> Result<(), ReportError> {
        if self.closed {
            return Err(ReportError::Closed);
        }
        let markup = element.to_markup();
        if markup.is_empty() {
            return Ok(());
        }
        self.write_head()?;
        let writer = self.writer.as_mut().ok_or(ReportError::Closed)?;
        writeln!(writer, "{markup}")?;
        writer.flush()?;
        self.elements += 1;
        Ok(())
    }

    /// Writes the closing tags if anything was written, then flushes.
    ///
    /// Calling this more than once has no further effect.
    pub fn close(&mut self) -> Result<(), ReportError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        if self.writer.is_none() {
            return Ok(());
        }
        if self.head_sent > 0 {
            self.write_head()?;
        }
        let writer = self.writer.as_mut().ok_or(ReportError::Closed)?;
        if self.head_sent > 0 {
            writeln!(writer, "</results>")?;
            writeln!(writer, "</analysis>")?;
        }
        writer.flush()?;
        debug!(elements = self.elements; "Closed report document");
        Ok(())
    }

    /// Closes the document and returns the underlying output.
    pub fn into_inner(mut self) -> Result<W, ReportError> {
        self.close()?;
        self.writer.take().ok_or(ReportError::Closed)
    }

    /// Returns the number of elements written so far.
    pub fn elements(&self) -> usize {
        self.elements
    }

    /// Returns `true` once [`close`](Self::close) has run.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Writes whatever part of the head has not reached the output yet.
    fn write_head(&mut self) -> Result<(), ReportError> {
        let head = self.head.as_bytes();
        if self.head_sent == head.len() {
            return Ok(());
        }
        let writer = self.writer.as_mut().ok_or(ReportError::Closed)?;
        while self.head_sent < head.len() {
            match writer.write(&head[self.head_sent..]) {
                Ok(0) => return Err(io::Error::from(io::ErrorKind::WriteZero).into()),
                Ok(n) => self.head_sent += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

impl<W: Write> Drop for ReportWriter<W> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!(error = err.to_string(); "Failed to close report document");
        }
    }
}
