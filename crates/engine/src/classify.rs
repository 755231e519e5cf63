//! Per-sheet classification: bucket rows by CFOP prefix, sum amounts.

use crate::diag::{Diagnostic, DiagnosticSink};
use crate::model::{Cell, ClassificationRecord, RawSheet};
use crate::normalize::{amount_value, detect_amount_mode, normalize_code};

/// Column holding the CFOP transaction code.
pub const CODE_COLUMN: &str = "CFOP";
/// Column holding the invoice amount.
pub const AMOUNT_COLUMN: &str = "Valor NF";

/// Inflow/outflow bucket, decided by the code's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Entrada,
    Saida,
}

/// Bucket for a normalized code, or `None` for codes outside the six
/// meaningful prefixes ('4', '8', '9', empty, non-digit). Unbucketed rows
/// contribute to neither total.
pub fn bucket_for(code: &str) -> Option<Bucket> {
    match code.chars().next() {
        Some('1') | Some('2') | Some('3') => Some(Bucket::Entrada),
        Some('5') | Some('6') | Some('7') => Some(Bucket::Saida),
        _ => None,
    }
}

/// Required columns absent from a sheet, in declaration order.
pub fn missing_columns(sheet: &RawSheet) -> Vec<&'static str> {
    [CODE_COLUMN, AMOUNT_COLUMN]
        .into_iter()
        .filter(|name| sheet.column_index(name).is_none())
        .collect()
}

/// Classify one sheet into a record.
///
/// A sheet missing either required column gets a warning diagnostic naming
/// the missing column(s) and a degraded zero-totals record; processing of
/// other sheets continues unaffected.
pub fn classify_sheet(
    data: &RawSheet,
    file: &str,
    sheet: &str,
    sink: &mut dyn DiagnosticSink,
) -> ClassificationRecord {
    let missing = missing_columns(data);
    if !missing.is_empty() {
        sink.emit(Diagnostic::missing_columns(file, sheet, &missing));
        return ClassificationRecord {
            file: file.to_string(),
            sheet: sheet.to_string(),
            total_in: 0.0,
            total_out: 0.0,
        };
    }

    // Presence just checked
    let code_col = data.column_index(CODE_COLUMN).unwrap();
    let amount_col = data.column_index(AMOUNT_COLUMN).unwrap();

    let mode = detect_amount_mode(data, amount_col);

    let mut total_in = 0.0;
    let mut total_out = 0.0;

    for row in &data.rows {
        let code = normalize_code(row.get(code_col).unwrap_or(&Cell::Empty));
        let amount = row.get(amount_col).unwrap_or(&Cell::Empty);
        match bucket_for(&code) {
            Some(Bucket::Entrada) => total_in += amount_value(amount, mode),
            Some(Bucket::Saida) => total_out += amount_value(amount, mode),
            None => {}
        }
    }

    ClassificationRecord {
        file: file.to_string(),
        sheet: sheet.to_string(),
        total_in,
        total_out,
    }
}
