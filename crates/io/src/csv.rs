// Delimited text extraction

use cfopsum_engine::classify::CODE_COLUMN;
use cfopsum_engine::error::ExtractError;
use cfopsum_engine::model::{Cell, RawSheet};

use crate::SKIP_ROWS;

/// Synthetic sheet name for flat delimited files, which carry exactly one
/// logical table.
pub const CSV_SHEET: &str = "CSV";

/// Extract the single table of a delimited text file.
///
/// Leading rows are skipped before the header, the field delimiter is
/// sniffed from the remaining lines, and plain-number columns are promoted
/// to numeric cells — except the code column, which must stay text so
/// leading zeros survive.
pub fn extract(bytes: &[u8]) -> Result<(String, RawSheet), ExtractError> {
    let content = decode(bytes);
    let body = skip_rows(&content, SKIP_ROWS);
    let delimiter = sniff_delimiter(body);
    let mut sheet = parse_table(body, delimiter)?;
    promote_numeric_columns(&mut sheet);
    Ok((CSV_SHEET.to_string(), sheet))
}

/// Decode bytes as UTF-8, falling back to Windows-1252 (common for
/// Excel-exported CSVs).
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// Drop the first `skip` lines; the next line becomes the header row.
fn skip_rows(content: &str, skip: usize) -> &str {
    let mut rest = content;
    for _ in 0..skip {
        match rest.find('\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return "",
        }
    }
    rest
}

/// Detect the most likely field delimiter by checking consistency across the
/// first few lines.
///
/// For each candidate (tab, semicolon, comma, pipe), count fields per line.
/// The delimiter that produces the most consistent field count (>1 field)
/// wins; higher field counts break ties.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        // Must produce >1 field on the header line to be viable
        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        let target = counts[0];
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

fn parse_table(content: &str, delimiter: u8) -> Result<RawSheet, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| ExtractError::Read(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ExtractError::Read(e.to_string()))?;
        let row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(RawSheet::new(columns, rows))
}

/// Promote columns whose every non-empty field parses as a plain decimal to
/// numeric cells, mirroring how a dataframe reader would type them. The
/// code column is exempt: codes are text and leading zeros matter.
fn promote_numeric_columns(sheet: &mut RawSheet) {
    for col in 0..sheet.columns.len() {
        if sheet.columns[col].trim() == CODE_COLUMN {
            continue;
        }

        let all_numeric = sheet.rows.iter().all(|row| match row.get(col) {
            None | Some(Cell::Empty) | Some(Cell::Number(_)) => true,
            Some(Cell::Text(s)) => s.parse::<f64>().is_ok(),
        });
        if !all_numeric {
            continue;
        }

        for row in sheet.rows.iter_mut() {
            if let Some(cell) = row.get_mut(col) {
                if let Cell::Text(s) = cell {
                    // every cell just checked parseable
                    let n = s.parse::<f64>().unwrap();
                    *cell = Cell::Number(n);
                }
            }
        }
    }
}
