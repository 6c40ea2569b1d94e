use super::application::ApplicationInput;
use super::otp::OtpCode;
use serde::{Deserialize, Serialize};

/// Fields handed from the form step to the confirmation step.
///
/// Read back from client-controlled storage, so every field may be missing
/// or empty; the confirmation step checks name and email before starting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendingApplication {
    pub full_name: String,
    pub email: String,
    pub pan: String,
    pub loan_amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_code: Option<OtpCode>,
}

impl PendingApplication {
    pub fn has_contact(&self) -> bool {
        !self.full_name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

impl From<&ApplicationInput> for PendingApplication {
    fn from(input: &ApplicationInput) -> Self {
        Self {
            full_name: input.full_name().to_string(),
            email: input.email().to_string(),
            pan: input.pan().to_string(),
            loan_amount: input.loan_amount().to_string(),
            otp_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let pending: PendingApplication = serde_json::from_str(r#"{"pan":"ABCDE1234F"}"#).unwrap();
        assert!(pending.full_name.is_empty());
        assert!(!pending.has_contact());
    }

    #[test]
    fn test_blank_email_is_missing_contact() {
        let pending = PendingApplication {
            full_name: "Priya Sharma".to_string(),
            email: "  ".to_string(),
            ..Default::default()
        };
        assert!(!pending.has_contact());
    }
}
