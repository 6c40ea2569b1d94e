use crate::domain::validators::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),
    #[error("Calculation error: {0}")]
    Calculation(String),
    #[error("Please enter a valid 4-digit OTP.")]
    MalformedCode,
    #[error("This verification has already finished.")]
    ChallengeClosed,
    #[error("Please fill out the loan application form first.")]
    MissingHandoff,
}

pub type Result<T> = std::result::Result<T, LoanError>;

pub(crate) fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
