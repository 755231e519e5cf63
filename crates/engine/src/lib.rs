//! `cfopsum-engine` — CFOP inflow/outflow classification and aggregation.
//!
//! Pure engine crate: receives pre-extracted sheets, returns classified
//! results. No file-format or CLI dependencies.

pub mod aggregate;
pub mod classify;
pub mod diag;
pub mod error;
pub mod export;
pub mod model;
pub mod normalize;
pub mod pipeline;

pub use diag::{Diagnostic, DiagnosticSink, Severity};
pub use error::ExtractError;
pub use model::{
    Cell, ClassificationRecord, FileAggregate, GrandTotal, RawSheet, RunResult, SourceFile,
};
pub use pipeline::{run, SheetSource};
