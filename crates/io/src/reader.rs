//! Extension dispatch: which extraction strategy handles a file.

use std::path::Path;

use cfopsum_engine::error::ExtractError;
use cfopsum_engine::model::{RawSheet, SourceFile};
use cfopsum_engine::pipeline::SheetSource;

/// Default [`SheetSource`]: picks the reader from the file extension.
///
/// `.xlsx` / `.xls` → multi-sheet workbook, `.csv` → single delimited
/// table. Anything else is unsupported and skipped by the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReader;

impl SheetSource for FileReader {
    fn extract(&self, file: &SourceFile) -> Result<Vec<(String, RawSheet)>, ExtractError> {
        match extension(&file.name).as_str() {
            "xlsx" | "xls" => crate::xlsx::extract(&file.bytes),
            "csv" => crate::csv::extract(&file.bytes).map(|sheet| vec![sheet]),
            "" => Err(ExtractError::Unsupported("(no extension)".into())),
            ext => Err(ExtractError::Unsupported(format!(".{ext}"))),
        }
    }
}

fn extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> SourceFile {
        SourceFile {
            name: name.into(),
            bytes: Vec::new(),
        }
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension("NOTAS.XLSX"), "xlsx");
        assert_eq!(extension("a.b.csv"), "csv");
        assert_eq!(extension("semext"), "");
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = FileReader.extract(&file("doc.pdf")).unwrap_err();
        match err {
            ExtractError::Unsupported(ext) => assert_eq!(ext, ".pdf"),
            other => panic!("expected Unsupported, got {other:?}"),
        }
    }

    #[test]
    fn missing_extension_is_rejected() {
        assert!(matches!(
            FileReader.extract(&file("semext")),
            Err(ExtractError::Unsupported(_))
        ));
    }

    #[test]
    fn csv_dispatch_reads_a_single_sheet() {
        let mut content = String::new();
        for _ in 0..crate::SKIP_ROWS {
            content.push('\n');
        }
        content.push_str("CFOP;Valor NF\n1102;10,00\n");

        let sheets = FileReader
            .extract(&SourceFile {
                name: "extrato.csv".into(),
                bytes: content.into_bytes(),
            })
            .unwrap();

        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].0, "CSV");
        assert_eq!(sheets[0].1.rows.len(), 1);
    }
}
