use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A single cell as delivered by the extraction layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// One logical table: a header row plus row-major data cells.
///
/// Produced by the extraction layer with leading rows already skipped, so
/// the first stored row is the first data row. Rows may be ragged; missing
/// trailing cells read as [`Cell::Empty`].
#[derive(Debug, Clone, Default)]
pub struct RawSheet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawSheet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    /// Index of a column by name. Header names are compared with surrounding
    /// whitespace trimmed — the only normalization the engine applies to
    /// incoming sheets.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.trim() == name)
    }
}

/// One input file: the name (carrying the extension that selects the
/// reading strategy) plus its fully buffered bytes.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

// ---------------------------------------------------------------------------
// Classification output
// ---------------------------------------------------------------------------

/// Bucket totals for one (file, sheet) pair.
///
/// Every processed sheet yields exactly one record. A sheet missing the
/// required columns still yields one, with both totals zero.
///
/// Serialized field names are the export wire columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    #[serde(rename = "arquivo")]
    pub file: String,
    pub sheet: String,
    #[serde(rename = "total_entrada")]
    pub total_in: f64,
    #[serde(rename = "total_saida")]
    pub total_out: f64,
}

/// Roll-up of all sheet records sharing the same file label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileAggregate {
    pub file: String,
    pub sum_in: f64,
    pub sum_out: f64,
}

/// Run-wide totals across every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GrandTotal {
    pub sum_in: f64,
    pub sum_out: f64,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

/// Counters describing what one run touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub sheets_processed: usize,
    /// Sheets that produced a zero-totals record because a required column
    /// was missing.
    pub degraded_sheets: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub meta: RunMeta,
    pub summary: RunSummary,
    pub records: Vec<ClassificationRecord>,
    pub files: Vec<FileAggregate>,
    pub totals: GrandTotal,
}
