// Excel workbook extraction (xlsx, xls) via calamine

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use cfopsum_engine::error::ExtractError;
use cfopsum_engine::model::{Cell, RawSheet};
use cfopsum_engine::normalize::cell_to_text;

use crate::SKIP_ROWS;

/// Extract every sheet of a workbook, in workbook order.
///
/// The buffered bytes are wrapped in a `Cursor` so calamine can seek over
/// them as often as it needs. Each sheet skips the same leading rows; a
/// sheet shorter than the skip count comes back empty and degrades
/// downstream.
pub fn extract(bytes: &[u8]) -> Result<Vec<(String, RawSheet)>, ExtractError> {
    let cursor = Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| ExtractError::Read(format!("failed to open workbook: {e}")))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for sheet_name in &sheet_names {
        let range = workbook.worksheet_range(sheet_name).map_err(|e| {
            ExtractError::Read(format!("failed to read sheet '{sheet_name}': {e}"))
        })?;
        sheets.push((sheet_name.clone(), range_to_sheet(&range)));
    }

    Ok(sheets)
}

fn range_to_sheet(range: &Range<Data>) -> RawSheet {
    // calamine ranges begin at the first occupied cell; count leading blank
    // rows toward the skip so it matches the sheet as the user sees it.
    let start_row = range.start().map(|(r, _)| r as usize).unwrap_or(0);
    let skip = SKIP_ROWS.saturating_sub(start_row);

    let mut rows_iter = range.rows().skip(skip);

    let columns: Vec<String> = match rows_iter.next() {
        Some(header) => header
            .iter()
            .map(|cell| cell_to_text(&convert_cell(cell)))
            .collect(),
        None => Vec::new(),
    };

    let rows: Vec<Vec<Cell>> = rows_iter
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    RawSheet::new(columns, rows)
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => {
            if s.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => Cell::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::Error(e) => Cell::Text(format!("#{e:?}")),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
