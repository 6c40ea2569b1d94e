//! Runtime settings for the application flow.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes.

use crate::domain::emi::EmiTerms;
use crate::domain::otp::MAX_ATTEMPTS;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SUCCESS_URL: &str = "https://www.example.com/";
pub const DEFAULT_FAILURE_URL: &str = "https://www.example.com/404";
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub annual_rate_percent: Decimal,
    pub tenure_years: u32,
    pub max_attempts: u8,
    pub redirect_delay_ms: u64,
    pub success_url: String,
    pub failure_url: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            annual_rate_percent: EmiTerms::DEFAULT_RATE_PERCENT,
            tenure_years: EmiTerms::DEFAULT_TENURE_YEARS,
            max_attempts: MAX_ATTEMPTS,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            success_url: DEFAULT_SUCCESS_URL.to_string(),
            failure_url: DEFAULT_FAILURE_URL.to_string(),
        }
    }
}

impl FlowConfig {
    /// Loads a JSON config file. Missing keys keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn emi_terms(&self) -> EmiTerms {
        EmiTerms::new(self.annual_rate_percent, self.tenure_years)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}
