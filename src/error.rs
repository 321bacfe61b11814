//! Crate error types.
//!
//! Load-time failures abort a session iteration; `NoDataForReport` and
//! `UnsupportedSchemaField` are recoverable conditions report callers
//! match on explicitly.

use thiserror::Error;

/// Errors produced by the loading, enrichment, and reporting pipeline.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// A `Start Time` value did not match any supported timestamp format.
    #[error("malformed start time {value:?}: no supported format matched")]
    MalformedTimestamp { value: String },

    /// A statistic was requested against an empty filtered table.
    #[error("no data for report: the filtered table has no rows")]
    NoDataForReport,

    /// A demographic field was requested from a source whose schema lacks it.
    #[error("source schema has no {0} column")]
    UnsupportedSchemaField(&'static str),

    /// City name outside the fixed registry.
    #[error("unknown city {0:?} (expected chicago, new york city, or washington)")]
    UnknownCity(String),

    /// Month or day selector outside the accepted set.
    #[error("invalid {kind} selector {value:?}")]
    InvalidSelector { kind: &'static str, value: String },

    /// I/O failure while reading a source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse or deserialization failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for pipeline operations.
pub type ExplorerResult<T> = Result<T, ExplorerError>;
