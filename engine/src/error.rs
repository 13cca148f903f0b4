use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Record source '{0}' is empty: no header row found")]
    EmptySource(String),

    #[error("Missing required column '{column}' at line {line}")]
    MissingColumn { column: String, line: usize },

    #[error("Malformed week_commencing_date '{value}' at line {line}: {source}")]
    MalformedDate {
        value: String,
        line: usize,
        source: chrono::ParseError,
    },

    #[error("Malformed '{column}' value '{value}' at line {line}")]
    MalformedNumber {
        column: String,
        value: String,
        line: usize,
    },

    #[error("Ambiguous cohort for identifier '{identifier}' on {date_key}: {reason} (lines {lines:?})")]
    AmbiguousCohort {
        identifier: String,
        date_key: String,
        reason: String,
        lines: Vec<usize>,
    },

    #[error("Growth calculation error: previous period value is zero")]
    DivisionByZero,

    #[error("Internal processing error: {0}")]
    ProcessingError(String),
}

impl EngineError {
    // Short, stable name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::ConfigError(_) => "config",
            EngineError::CsvSystemError { .. } => "csv",
            EngineError::IoError { .. } => "io",
            EngineError::JsonError { .. } => "json",
            EngineError::EmptySource(_) => "empty_source",
            EngineError::MissingColumn { .. } => "missing_column",
            EngineError::MalformedDate { .. } => "malformed_date",
            EngineError::MalformedNumber { .. } => "malformed_number",
            EngineError::AmbiguousCohort { .. } => "ambiguous_cohort",
            EngineError::DivisionByZero => "division_by_zero",
            EngineError::ProcessingError(_) => "processing",
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = EngineError::MissingColumn { column: "brand".to_string(), line: 1 };
        assert_eq!(err.to_string(), "Missing required column 'brand' at line 1");
        assert_eq!(err.kind(), "missing_column");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::IoError { .. }));
        assert!(err.to_string().contains("gone"));
    }
}
