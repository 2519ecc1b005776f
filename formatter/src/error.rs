//! Error types for the Sankey formatting pipeline.
//!
//! This module defines a small hierarchy of error types:
//!
//! - [`CsvError`] - reading and parsing the flow CSV
//! - [`ConfigError`] - flow color files and other user-supplied settings
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors while reading or parsing the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Input file is missing or unreadable.
    #[error("Cannot read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode the raw bytes.
    #[error("Failed to decode input: {0}")]
    Encoding(String),

    /// The CSV reader rejected a row.
    #[error("Line {line}: invalid CSV: {message}")]
    Malformed { line: u64, message: String },

    /// Weight column is not a number.
    #[error("Line {line}: weight '{value}' is not a number")]
    InvalidWeight { line: u64, value: String },

    /// Row has too few columns (strict mode only).
    #[error("Line {line}: expected at least {required} columns, found {found}")]
    ShortRow {
        line: u64,
        found: usize,
        required: usize,
    },

    /// No header row.
    #[error("CSV file is empty")]
    EmptyFile,
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors in user-supplied configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Cannot read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for the expected shape.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Color is not a `#rrggbb` value.
    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    /// Delimiter cannot be used by the CSV reader.
    #[error("Invalid delimiter '{0}', expected a single ASCII character")]
    InvalidDelimiter(char),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::transform::pipeline::format_csv`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Writing the rendered output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> PipelineError
        let csv_err = CsvError::EmptyFile;
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("empty"));

        // ConfigError -> PipelineError
        let config_err = ConfigError::InvalidColor("red".into());
        let pipeline_err: PipelineError = config_err.into();
        assert!(pipeline_err.to_string().contains("red"));
    }

    #[test]
    fn test_invalid_weight_format() {
        let err = CsvError::InvalidWeight {
            line: 4,
            value: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Line 4"));
        assert!(msg.contains("'abc'"));
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let err = CsvError::Io {
            path: PathBuf::from("/nope/flows.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/nope/flows.csv"));
    }

    #[test]
    fn test_short_row_format() {
        let err = CsvError::ShortRow {
            line: 7,
            found: 2,
            required: 3,
        };
        assert_eq!(
            err.to_string(),
            "Line 7: expected at least 3 columns, found 2"
        );
    }
}
