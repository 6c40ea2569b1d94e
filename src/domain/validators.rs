//! Field validators for the loan application form.
//!
//! Every predicate is total: malformed input, including the empty string,
//! simply yields `false`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.\S+$").expect("Invalid regex pattern"));

static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("Invalid regex pattern"));

static NAME_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("Invalid regex pattern"));

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,9}$").expect("Invalid regex pattern"));

/// Minimum number of letters in each word of a full name.
pub const MIN_NAME_WORD_LEN: usize = 4;

/// Minimal structural email check, not RFC-complete.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Five uppercase letters, four digits, one uppercase letter.
pub fn is_valid_pan(s: &str) -> bool {
    PAN_RE.is_match(s)
}

pub fn is_valid_full_name(s: &str) -> bool {
    if !NAME_CHARS_RE.is_match(s) {
        return false;
    }
    let words: Vec<&str> = s.split_whitespace().collect();
    words.len() >= 2 && words.iter().all(|w| w.chars().count() >= MIN_NAME_WORD_LEN)
}

/// Digits only, at most nine of them (below one hundred crore).
pub fn is_valid_amount(s: &str) -> bool {
    AMOUNT_RE.is_match(s)
}

/// A form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    FullName,
    Email,
    Pan,
    LoanAmount,
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::FullName => "full_name",
            FieldError::Email => "email",
            FieldError::Pan => "pan",
            FieldError::LoanAmount => "loan_amount",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            FieldError::FullName => {
                "Please enter your full name (at least two words of four or more letters)."
            }
            FieldError::Email => "Please enter a valid email address.",
            FieldError::Pan => "Please enter a valid PAN (e.g. ABCDE1234F).",
            FieldError::LoanAmount => {
                "Please enter a loan amount using digits only (up to 9 digits)."
            }
        };
        f.write_str(message)
    }
}
