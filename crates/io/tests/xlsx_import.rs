// Workbook extraction against real .xlsx bytes built with rust_xlsxwriter.

use cfopsum_engine::model::{Cell, SourceFile};
use cfopsum_engine::pipeline::run;
use cfopsum_engine::Diagnostic;
use cfopsum_io::{xlsx, FileReader, SKIP_ROWS};
use rust_xlsxwriter::Workbook;

const HEADER_ROW: u32 = SKIP_ROWS as u32;

/// Workbook with one ledger sheet: preamble in the first rows, header at
/// row 18, then the given (code, amount) rows.
fn ledger_workbook(rows: &[(&str, f64)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Notas").unwrap();

    sheet.write_string(0, 0, "RELATÓRIO DE NOTAS FISCAIS").unwrap();
    sheet.write_string(1, 0, "Período: Janeiro").unwrap();

    sheet.write_string(HEADER_ROW, 0, "CFOP").unwrap();
    sheet.write_string(HEADER_ROW, 1, "Valor NF").unwrap();
    for (i, (code, amount)) in rows.iter().enumerate() {
        let row = HEADER_ROW + 1 + i as u32;
        sheet.write_string(row, 0, *code).unwrap();
        sheet.write_number(row, 1, *amount).unwrap();
    }

    workbook.save_to_buffer().unwrap()
}

#[test]
fn header_lands_on_row_eighteen() {
    let bytes = ledger_workbook(&[("1102", 1500.0), ("5102", 750.5)]);
    let sheets = xlsx::extract(&bytes).unwrap();

    assert_eq!(sheets.len(), 1);
    let (name, sheet) = &sheets[0];
    assert_eq!(name, "Notas");
    assert_eq!(sheet.columns, vec!["CFOP", "Valor NF"]);
    assert_eq!(sheet.rows.len(), 2);
    assert_eq!(sheet.rows[0][0], Cell::Text("1102".into()));
    assert_eq!(sheet.rows[0][1], Cell::Number(1500.0));
}

#[test]
fn numeric_codes_survive_as_classifiable_text() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(HEADER_ROW, 0, "CFOP").unwrap();
    sheet.write_string(HEADER_ROW, 1, "Valor NF").unwrap();
    // Code typed as a number, the way spreadsheets auto-type it
    sheet.write_number(HEADER_ROW + 1, 0, 1102.0).unwrap();
    sheet.write_number(HEADER_ROW + 1, 1, 99.9).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let source = SourceFile {
        name: "notas.xlsx".into(),
        bytes,
    };
    let mut diags: Vec<Diagnostic> = Vec::new();
    let result = run(&[source], &FileReader, &mut diags);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].total_in, 99.9);
    assert!(diags.is_empty());
}

#[test]
fn every_sheet_is_extracted_in_workbook_order() {
    let mut workbook = Workbook::new();
    let first = workbook.add_worksheet();
    first.set_name("Janeiro").unwrap();
    first.write_string(HEADER_ROW, 0, "CFOP").unwrap();
    first.write_string(HEADER_ROW, 1, "Valor NF").unwrap();
    first.write_string(HEADER_ROW + 1, 0, "1102").unwrap();
    first.write_number(HEADER_ROW + 1, 1, 100.0).unwrap();

    let second = workbook.add_worksheet();
    second.set_name("Fevereiro").unwrap();
    second.write_string(HEADER_ROW, 0, "CFOP").unwrap();
    second.write_string(HEADER_ROW, 1, "Valor NF").unwrap();
    second.write_string(HEADER_ROW + 1, 0, "6108").unwrap();
    second.write_number(HEADER_ROW + 1, 1, 50.0).unwrap();

    let bytes = workbook.save_to_buffer().unwrap();
    let sheets = xlsx::extract(&bytes).unwrap();

    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].0, "Janeiro");
    assert_eq!(sheets[1].0, "Fevereiro");

    let source = SourceFile {
        name: "ano.xlsx".into(),
        bytes,
    };
    let mut diags: Vec<Diagnostic> = Vec::new();
    let result = run(&[source], &FileReader, &mut diags);

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.totals.sum_in, 100.0);
    assert_eq!(result.totals.sum_out, 50.0);
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].sum_in, 100.0);
}

#[test]
fn textual_amounts_in_workbooks_are_normalized() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(HEADER_ROW, 0, "CFOP").unwrap();
    sheet.write_string(HEADER_ROW, 1, "Valor NF").unwrap();
    sheet.write_string(HEADER_ROW + 1, 0, "1102").unwrap();
    sheet.write_string(HEADER_ROW + 1, 1, "1.234,56").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let source = SourceFile {
        name: "notas.xlsx".into(),
        bytes,
    };
    let mut diags: Vec<Diagnostic> = Vec::new();
    let result = run(&[source], &FileReader, &mut diags);

    assert!((result.records[0].total_in - 1234.56).abs() < 1e-9);
}

#[test]
fn sheet_without_required_columns_degrades() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(HEADER_ROW, 0, "Data").unwrap();
    sheet.write_string(HEADER_ROW, 1, "Descrição").unwrap();
    sheet.write_string(HEADER_ROW + 1, 0, "2026-01-01").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let source = SourceFile {
        name: "outro.xlsx".into(),
        bytes,
    };
    let mut diags: Vec<Diagnostic> = Vec::new();
    let result = run(&[source], &FileReader, &mut diags);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].total_in, 0.0);
    assert_eq!(result.summary.degraded_sheets, 1);
    assert_eq!(diags.len(), 1);
}

#[test]
fn corrupt_workbook_is_a_read_error() {
    let err = xlsx::extract(b"definitely not a workbook").unwrap_err();
    assert!(err.to_string().contains("failed to open workbook"));
}
