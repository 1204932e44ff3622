//! Error types for report output.

use std::io;

/// Errors that can occur while writing a report.
///
/// Classification, deduplication and rendering never fail; only writing the
/// rendered document to its destination can.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// An I/O error occurred while writing report markup.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    /// An element was written after the document was closed.
    #[error("report document is already closed")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_io_error() {
        let err = ReportError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(format!("{err}"), "failed to write report: pipe closed");
    }

    #[test]
    fn display_closed() {
        assert_eq!(
            format!("{}", ReportError::Closed),
            "report document is already closed"
        );
    }
}
