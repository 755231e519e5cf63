use std::fmt;

/// Extraction failures surfaced by a [`crate::pipeline::SheetSource`].
///
/// Both variants are per-file recoverable: the pipeline turns them into an
/// error diagnostic and skips the file.
#[derive(Debug)]
pub enum ExtractError {
    /// File extension outside the supported set.
    Unsupported(String),
    /// Underlying reader failed (corrupt workbook, undecodable text).
    Read(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(ext) => write!(f, "unsupported file format: {ext}"),
            Self::Read(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Export serialization failures.
#[derive(Debug)]
pub enum ExportError {
    /// CSV writer error.
    Csv(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(msg) => write!(f, "CSV export error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}
