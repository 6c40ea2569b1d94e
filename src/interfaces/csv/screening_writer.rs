use crate::application::intake::quote_amount;
use crate::domain::application::{ApplicationForm, ApplicationInput};
use crate::domain::emi::EmiTerms;
use crate::error::{LoanError, Result};
use serde::Serialize;
use std::io::Write;

/// One screened application as written to CSV.
#[derive(Debug, Serialize, PartialEq)]
pub struct ScreeningRecord {
    pub full_name: String,
    pub email: String,
    pub pan: String,
    pub loan_amount: String,
    pub valid: bool,
    /// Field error messages joined with `;`. Empty when valid.
    pub errors: String,
    /// Rounded monthly installment. Empty when invalid.
    pub emi: String,
}

impl ScreeningRecord {
    /// Validates a form and, when it passes, estimates its installment.
    pub fn screen(form: ApplicationForm, terms: &EmiTerms) -> Result<Self> {
        let normalized = form.normalized();
        match ApplicationInput::try_from(form) {
            Ok(input) => {
                let quote = quote_amount(input.loan_amount(), terms)?;
                let form = ApplicationForm::from(input);
                Ok(Self {
                    full_name: form.full_name,
                    email: form.email,
                    pan: form.pan,
                    loan_amount: form.loan_amount,
                    valid: true,
                    errors: String::new(),
                    emi: quote.monthly_installment.to_string(),
                })
            }
            Err(LoanError::Validation(errors)) => Ok(Self {
                full_name: normalized.full_name,
                email: normalized.email,
                pan: normalized.pan,
                loan_amount: normalized.loan_amount,
                valid: false,
                errors: errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(";"),
                emi: String::new(),
            }),
            Err(e) => Err(e),
        }
    }
}

/// Writes screening results as CSV with a header row.
pub struct ScreeningWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ScreeningWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_records<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = ScreeningRecord>,
    {
        for record in records {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
