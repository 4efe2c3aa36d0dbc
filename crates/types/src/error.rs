use thiserror::Error;

/// Rejected inputs for money amounts, scan ranges and model constants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid amount '{value}', expected a decimal dollar value such as 4.20")]
    InvalidAmount { value: String },

    #[error("field '{field}' must be positive, got {value}")]
    NotPositive { field: &'static str, value: String },

    #[error("field '{field}' must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("scan covers {points} prices, more than the limit of {max}")]
    TooManyPoints { points: i64, max: i64 },

    #[error("scan low {low} exceeds scan high {high}")]
    InvertedRange { low: String, high: String },

    #[error("invalid report format '{value}', expected one of text, json")]
    InvalidReportFormat { value: String },
}
