use crate::domain::application::{ApplicationForm, ApplicationInput};
use crate::domain::emi::{EmiTerms, calculate_emi, round_to_rupee};
use crate::domain::handoff::PendingApplication;
use crate::domain::ports::HandoffStoreBox;
use crate::domain::validators::{FieldError, is_valid_amount};
use crate::domain::words::number_to_words_indian;
use crate::error::{LoanError, Result};
use rust_decimal::Decimal;

/// Text derived from the loan amount field.
///
/// Amount in words and the EMI estimate are produced together whenever the
/// amount is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub amount_in_words: String,
    /// Rounded to the nearest rupee.
    pub monthly_installment: Decimal,
    pub terms: EmiTerms,
}

/// Builds the live quote for a loan amount as typed.
pub fn quote_amount(amount: &str, terms: &EmiTerms) -> Result<Quote> {
    let amount = amount.trim();
    if !is_valid_amount(amount) {
        return Err(LoanError::Validation(vec![FieldError::LoanAmount]));
    }
    let value: u64 = amount
        .parse()
        .map_err(|_| LoanError::Validation(vec![FieldError::LoanAmount]))?;
    let installment = calculate_emi(Decimal::from(value), terms)?;
    Ok(Quote {
        amount_in_words: number_to_words_indian(value as i64),
        monthly_installment: round_to_rupee(installment),
        terms: *terms,
    })
}

/// An accepted application together with its quote.
#[derive(Debug, Clone)]
pub struct Submission {
    pub application: ApplicationInput,
    pub quote: Quote,
}

/// The form step: validates input and writes the handoff.
pub struct IntakeService {
    store: HandoffStoreBox,
    terms: EmiTerms,
}

impl IntakeService {
    pub fn new(store: HandoffStoreBox, terms: EmiTerms) -> Self {
        Self { store, terms }
    }

    /// Validates every field; on success writes all four to the handoff in one call.
    pub async fn submit(&self, form: ApplicationForm) -> Result<Submission> {
        let application = match ApplicationInput::try_from(form) {
            Ok(application) => application,
            Err(e) => {
                if let LoanError::Validation(errors) = &e {
                    let fields: Vec<&str> = errors.iter().map(FieldError::field).collect();
                    tracing::info!(?fields, "Application rejected");
                }
                return Err(e);
            }
        };

        let quote = quote_amount(application.loan_amount(), &self.terms)?;
        self.store
            .save(&PendingApplication::from(&application))
            .await?;

        tracing::info!(
            loan_amount = application.loan_amount(),
            monthly_installment = %quote.monthly_installment,
            "Application accepted"
        );

        Ok(Submission { application, quote })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::HandoffStore;
    use crate::infrastructure::in_memory::InMemoryHandoffStore;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_shows_words_and_installment() {
        let quote = quote_amount("1000000", &EmiTerms::default()).unwrap();
        assert_eq!(quote.amount_in_words, "Ten Lakh Rupees.");
        assert_eq!(quote.monthly_installment, dec!(9847));
    }

    #[test]
    fn test_quote_rejects_invalid_amount() {
        assert!(matches!(
            quote_amount("12a", &EmiTerms::default()),
            Err(LoanError::Validation(_))
        ));
        assert!(matches!(
            quote_amount("", &EmiTerms::default()),
            Err(LoanError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_submit_writes_handoff() {
        let store = InMemoryHandoffStore::new();
        let service = IntakeService::new(Box::new(store.clone()), EmiTerms::default());

        let form =
            ApplicationForm::new("Priya Sharma", "priya@example.com", "abcde1234f", "500000");
        let submission = service.submit(form).await.unwrap();
        assert_eq!(submission.quote.amount_in_words, "Five Lakh Rupees.");

        let pending = store.load().await.unwrap().unwrap();
        assert_eq!(pending.full_name, "Priya Sharma");
        assert_eq!(pending.pan, "ABCDE1234F");
        assert_eq!(pending.loan_amount, "500000");
        assert!(pending.otp_code.is_none());
    }

    #[tokio::test]
    async fn test_rejected_submit_leaves_handoff_untouched() {
        let store = InMemoryHandoffStore::new();
        let service = IntakeService::new(Box::new(store.clone()), EmiTerms::default());

        let form = ApplicationForm::new("Jo Ann", "priya@example.com", "ABCDE1234F", "500000");
        let result = service.submit(form).await;
        assert!(matches!(
            result,
            Err(LoanError::Validation(ref e)) if e == &vec![FieldError::FullName]
        ));
        assert!(store.load().await.unwrap().is_none());
    }
}
