//! Pipeline driver: files → sheets → records → aggregates → totals.
//!
//! Files are processed strictly sequentially, in upload order; each file's
//! bytes are fully buffered before extraction so the reader may take
//! multiple passes. Record order is file-then-sheet, matching input order.

use crate::aggregate::{aggregate_by_file, grand_total};
use crate::classify::{classify_sheet, missing_columns};
use crate::diag::{Diagnostic, DiagnosticSink};
use crate::error::ExtractError;
use crate::model::{ClassificationRecord, RawSheet, RunMeta, RunResult, RunSummary, SourceFile};

/// Extraction collaborator: buffered bytes in, named sheets out.
///
/// Spreadsheet files yield one entry per sheet in workbook order; delimited
/// text yields a single synthetic sheet. Leading-row skipping happens here,
/// before the engine ever sees the data.
pub trait SheetSource {
    fn extract(&self, file: &SourceFile) -> Result<Vec<(String, RawSheet)>, ExtractError>;
}

/// Process every file and fold the three report levels.
///
/// Nothing here is fatal to the run: unsupported or unreadable files are
/// skipped with an error diagnostic, sheets missing required columns
/// degrade to zero-totals records, and the run always completes with a
/// (possibly empty) result. Identical inputs produce identical records,
/// aggregates, and totals.
pub fn run(
    files: &[SourceFile],
    source: &impl SheetSource,
    sink: &mut dyn DiagnosticSink,
) -> RunResult {
    let mut summary = RunSummary::default();
    let mut records: Vec<ClassificationRecord> = Vec::new();

    if files.is_empty() {
        sink.emit(Diagnostic::no_input());
        return finish(summary, records);
    }

    for file in files {
        let sheets = match source.extract(file) {
            Ok(sheets) => sheets,
            Err(err) => {
                let diag = match &err {
                    ExtractError::Unsupported(ext) => {
                        Diagnostic::unsupported_format(&file.name, ext)
                    }
                    ExtractError::Read(msg) => Diagnostic::read_failure(&file.name, msg),
                };
                sink.emit(diag);
                summary.files_skipped += 1;
                continue;
            }
        };

        summary.files_processed += 1;

        for (sheet_name, sheet) in &sheets {
            if !missing_columns(sheet).is_empty() {
                summary.degraded_sheets += 1;
            }
            records.push(classify_sheet(sheet, &file.name, sheet_name, sink));
            summary.sheets_processed += 1;
        }
    }

    if records.is_empty() {
        sink.emit(Diagnostic::no_records());
    }

    finish(summary, records)
}

fn finish(summary: RunSummary, records: Vec<ClassificationRecord>) -> RunResult {
    let files = aggregate_by_file(&records);
    let totals = grand_total(&records);

    RunResult {
        meta: RunMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        records,
        files,
        totals,
    }
}
