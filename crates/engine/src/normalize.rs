//! Code and amount normalization.
//!
//! Ledger exports arrive in two shapes: spreadsheet cells already typed as
//! numbers, or Brazilian-formatted text ("1.234,56"). Detection is per
//! column, once per sheet, so a mixed column behaves deterministically.

use crate::model::{Cell, RawSheet};

/// Render a cell the way a spreadsheet user reads it.
///
/// Whole-number floats drop the decimal tail so auto-typed codes like
/// `1102.0` come back as `"1102"`.
pub fn cell_to_text(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(s) => s.clone(),
        Cell::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
    }
}

/// Normalized transaction code: textual representation with surrounding
/// whitespace trimmed. Codes stay strings from here on — no numeric parse,
/// so leading zeros survive.
pub fn normalize_code(cell: &Cell) -> String {
    cell_to_text(cell).trim().to_string()
}

/// How a sheet's amount column is interpreted. Decided once per sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountMode {
    /// Every non-empty cell is already numeric; empty cells count as 0.0.
    Numeric,
    /// Locale-formatted text; each cell goes through the three-step cleanup
    /// before parsing.
    Textual,
}

/// Detect the amount mode for one column.
///
/// A single textual cell makes the whole column textual. Numeric cells in a
/// textual column are stringified before cleanup, same as a column-dtype
/// check would treat them.
pub fn detect_amount_mode(sheet: &RawSheet, col: usize) -> AmountMode {
    let all_numeric = sheet.rows.iter().all(|row| {
        matches!(
            row.get(col).unwrap_or(&Cell::Empty),
            Cell::Empty | Cell::Number(_)
        )
    });
    if all_numeric {
        AmountMode::Numeric
    } else {
        AmountMode::Textual
    }
}

/// Best-effort decimal parse of a Brazilian-formatted amount.
///
/// In order: strip thousands periods, comma becomes decimal point, drop
/// anything that is not a digit, period, or minus. Cells that still fail to
/// parse are 0.0 — malformed rows must not abort aggregation.
pub fn parse_textual_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .filter(|&c| c.is_ascii_digit() || c == '.' || c == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Amount value of one cell under the sheet's detected mode.
pub fn amount_value(cell: &Cell, mode: AmountMode) -> f64 {
    match mode {
        AmountMode::Numeric => match cell {
            Cell::Number(n) => *n,
            _ => 0.0,
        },
        AmountMode::Textual => parse_textual_amount(&cell_to_text(cell)),
    }
}
