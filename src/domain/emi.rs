use crate::error::{LoanError, Result};
use rust_decimal::MathematicalOps;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

/// Interest rate and tenure used for an installment estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmiTerms {
    /// Annual interest rate as a percentage (8.5 means 8.5 %).
    pub annual_rate_percent: Decimal,
    pub tenure_years: u32,
}

impl EmiTerms {
    pub const DEFAULT_RATE_PERCENT: Decimal = dec!(8.5);
    pub const DEFAULT_TENURE_YEARS: u32 = 15;

    pub fn new(annual_rate_percent: Decimal, tenure_years: u32) -> Self {
        Self {
            annual_rate_percent,
            tenure_years,
        }
    }

    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate_percent / dec!(100) / dec!(12)
    }

    /// Total installments, or `None` if the tenure overflows a month count.
    pub fn months(&self) -> Option<u32> {
        self.tenure_years.checked_mul(12)
    }
}

impl Default for EmiTerms {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATE_PERCENT, Self::DEFAULT_TENURE_YEARS)
    }
}

/// Equated monthly installment for `principal` under `terms`.
///
/// A zero rate falls back to straight-line division over the tenure.
/// The principal is not validated; callers pass amounts that already
/// passed [`is_valid_amount`](crate::domain::validators::is_valid_amount).
pub fn calculate_emi(principal: Decimal, terms: &EmiTerms) -> Result<Decimal> {
    let r = terms.monthly_rate();
    let n = terms
        .months()
        .ok_or_else(|| overflow("tenure conversion to months"))?;
    if n == 0 {
        return Err(LoanError::Calculation(
            "Tenure must be at least one year".to_string(),
        ));
    }

    if r.is_zero() {
        return principal
            .checked_div(Decimal::from(n))
            .ok_or_else(|| overflow("straight-line division"));
    }

    let growth = (Decimal::ONE + r)
        .checked_powi(i64::from(n))
        .ok_or_else(|| overflow("compounding"))?;
    let numerator = principal
        .checked_mul(r)
        .and_then(|v| v.checked_mul(growth))
        .ok_or_else(|| overflow("installment numerator"))?;
    numerator
        .checked_div(growth - Decimal::ONE)
        .ok_or_else(|| overflow("installment denominator"))
}

/// Rounds an installment to the nearest whole rupee for display.
pub fn round_to_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn overflow(stage: &str) -> LoanError {
    LoanError::Calculation(format!("Arithmetic overflow during {stage}"))
}
