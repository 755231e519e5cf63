//! The one wire format the engine commits to: a flat CSV of sheet records.
//!
//! Header `arquivo,sheet,total_entrada,total_saida`, one row per record,
//! amounts as plain decimal numbers. Re-parsing the output reproduces the
//! records, modulo floating-point representation.

use crate::error::ExportError;
use crate::model::ClassificationRecord;

const HEADER: [&str; 4] = ["arquivo", "sheet", "total_entrada", "total_saida"];

/// Serialize records to the export CSV, UTF-8, in record order.
pub fn to_csv(records: &[ClassificationRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if records.is_empty() {
        // serde only writes the header once a record is serialized
        writer
            .write_record(HEADER)
            .map_err(|e| ExportError::Csv(e.to_string()))?;
    }
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| ExportError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Csv(e.to_string()))
}

/// Re-parse exported CSV back into records. Inverse of [`to_csv`].
pub fn parse(data: &str) -> Result<Vec<ClassificationRecord>, ExportError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result.map_err(|e| ExportError::Csv(e.to_string()))?);
    }
    Ok(records)
}
