//! Diagnostics emitted by the engine, rendered by the caller.
//!
//! The engine never prints or aborts; every anomaly becomes a diagnostic
//! through the injected sink and processing continues.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "note"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
    pub message: String,
}

impl Diagnostic {
    /// No input files supplied; the run produces nothing.
    pub fn no_input() -> Self {
        Self {
            severity: Severity::Info,
            file: None,
            sheet: None,
            message: "no input files supplied".into(),
        }
    }

    /// Files were supplied but no sheet produced a record.
    pub fn no_records() -> Self {
        Self {
            severity: Severity::Warning,
            file: None,
            sheet: None,
            message: "no records to aggregate".into(),
        }
    }

    /// A sheet lacks required column(s); it degrades to zero totals.
    pub fn missing_columns(file: &str, sheet: &str, missing: &[&str]) -> Self {
        Self {
            severity: Severity::Warning,
            file: Some(file.to_string()),
            sheet: Some(sheet.to_string()),
            message: format!("missing required column(s): {}", missing.join(", ")),
        }
    }

    /// File extension outside the supported set; the file is skipped.
    pub fn unsupported_format(file: &str, ext: &str) -> Self {
        Self {
            severity: Severity::Error,
            file: Some(file.to_string()),
            sheet: None,
            message: format!("unsupported file format: {ext}"),
        }
    }

    /// Extraction failed (corrupt workbook, undecodable text); the file is
    /// skipped.
    pub fn read_failure(file: &str, detail: &str) -> Self {
        Self {
            severity: Severity::Error,
            file: Some(file.to_string()),
            sheet: None,
            message: detail.to_string(),
        }
    }
}

/// Where diagnostics go. The engine calls this; rendering is the caller's
/// concern.
pub trait DiagnosticSink {
    fn emit(&mut self, diag: Diagnostic);
}

/// Collects diagnostics for later rendering.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diag: Diagnostic) {
        self.push(diag);
    }
}
