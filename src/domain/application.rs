use super::validators::{
    FieldError, is_valid_amount, is_valid_email, is_valid_full_name, is_valid_pan,
};
use super::words::number_to_words_indian;
use crate::error::LoanError;
use serde::Deserialize;

/// The loan application form exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub pan: String,
    pub loan_amount: String,
}

impl ApplicationForm {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        pan: impl Into<String>,
        loan_amount: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            pan: pan.into(),
            loan_amount: loan_amount.into(),
        }
    }

    /// Trims every field and upper-cases the PAN.
    pub fn normalized(&self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            pan: self.pan.trim().to_uppercase(),
            loan_amount: self.loan_amount.trim().to_string(),
        }
    }

    /// Failing fields, in form order.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let checks = [
            (is_valid_full_name(&self.full_name), FieldError::FullName),
            (is_valid_email(&self.email), FieldError::Email),
            (is_valid_pan(&self.pan), FieldError::Pan),
            (is_valid_amount(&self.loan_amount), FieldError::LoanAmount),
        ];
        checks
            .into_iter()
            .filter_map(|(ok, err)| (!ok).then_some(err))
            .collect()
    }
}

/// An application whose four fields all passed validation.
///
/// Only constructible through `TryFrom<ApplicationForm>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationInput {
    full_name: String,
    email: String,
    pan: String,
    loan_amount: String,
}

impl ApplicationInput {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn pan(&self) -> &str {
        &self.pan
    }

    pub fn loan_amount(&self) -> &str {
        &self.loan_amount
    }

    /// Numeric loan amount. At most nine digits, so it always fits.
    pub fn loan_amount_value(&self) -> u64 {
        self.loan_amount.parse().unwrap_or_default()
    }

    pub fn amount_in_words(&self) -> String {
        number_to_words_indian(self.loan_amount_value() as i64)
    }
}

impl TryFrom<ApplicationForm> for ApplicationInput {
    type Error = LoanError;

    fn try_from(form: ApplicationForm) -> Result<Self, Self::Error> {
        let form = form.normalized();
        let errors = form.field_errors();
        if !errors.is_empty() {
            return Err(LoanError::Validation(errors));
        }
        Ok(Self {
            full_name: form.full_name,
            email: form.email,
            pan: form.pan,
            loan_amount: form.loan_amount,
        })
    }
}

impl From<ApplicationInput> for ApplicationForm {
    fn from(input: ApplicationInput) -> Self {
        Self {
            full_name: input.full_name,
            email: input.email,
            pan: input.pan,
            loan_amount: input.loan_amount,
        }
    }
}
