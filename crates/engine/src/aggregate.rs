//! File-level roll-up and grand totals, folded from sheet records.

use crate::model::{ClassificationRecord, FileAggregate, GrandTotal};

/// Group records by file label, summing both buckets per file.
///
/// Group order follows the first record seen for each file, which matches
/// upload order since records are appended file-by-file.
pub fn aggregate_by_file(records: &[ClassificationRecord]) -> Vec<FileAggregate> {
    let mut aggregates: Vec<FileAggregate> = Vec::new();

    for record in records {
        match aggregates.iter_mut().find(|a| a.file == record.file) {
            Some(agg) => {
                agg.sum_in += record.total_in;
                agg.sum_out += record.total_out;
            }
            None => aggregates.push(FileAggregate {
                file: record.file.clone(),
                sum_in: record.total_in,
                sum_out: record.total_out,
            }),
        }
    }

    aggregates
}

/// Totals across every record regardless of file or sheet.
pub fn grand_total(records: &[ClassificationRecord]) -> GrandTotal {
    let mut totals = GrandTotal::default();
    for record in records {
        totals.sum_in += record.total_in;
        totals.sum_out += record.total_out;
    }
    totals
}
