use crate::config::FlowConfig;
use crate::domain::handoff::PendingApplication;
use crate::domain::otp::{OtpChallenge, OtpCode, SubmitOutcome};
use crate::domain::ports::{CodeSource, HandoffStoreBox};
use crate::error::{LoanError, Result};
use std::fmt;
use std::time::Duration;

/// Where the user is sent once verification finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Success(String),
    Failure(String),
}

impl Destination {
    pub fn url(&self) -> &str {
        match self {
            Destination::Success(url) | Destination::Failure(url) => url,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}

/// The confirmation step: one OTP challenge for one pending application.
///
/// Starting the flow again issues a fresh code, the way reloading the page
/// would.
pub struct ConfirmationFlow {
    store: HandoffStoreBox,
    pending: PendingApplication,
    challenge: OtpChallenge,
    success_url: String,
    failure_url: String,
    outcome: Option<SubmitOutcome>,
}

impl ConfirmationFlow {
    /// Loads the handoff and creates a challenge.
    ///
    /// Fails with [`LoanError::MissingHandoff`] when there is no handoff or it
    /// lacks a name or email; no challenge is created in that case.
    pub async fn start(
        store: HandoffStoreBox,
        codes: &dyn CodeSource,
        config: &FlowConfig,
    ) -> Result<Self> {
        let Some(mut pending) = store.load().await?.filter(PendingApplication::has_contact) else {
            tracing::warn!("Confirmation opened without application details");
            return Err(LoanError::MissingHandoff);
        };

        let code = codes.next_code()?;
        pending.otp_code = Some(code.clone());
        store.save(&pending).await?;

        let challenge = OtpChallenge::new(code, config.max_attempts);
        tracing::info!(
            max_attempts = challenge.max_attempts(),
            "Verification challenge created"
        );

        Ok(Self {
            store,
            pending,
            challenge,
            success_url: config.success_url.clone(),
            failure_url: config.failure_url.clone(),
            outcome: None,
        })
    }

    pub fn pending(&self) -> &PendingApplication {
        &self.pending
    }

    pub fn challenge(&self) -> &OtpChallenge {
        &self.challenge
    }

    /// The code the user is expected to enter. Demo only.
    pub fn demo_code(&self) -> &OtpCode {
        self.challenge.code()
    }

    /// Submits a guess. The handoff is cleared once the challenge is terminal.
    pub async fn submit(&mut self, guess: &str) -> Result<SubmitOutcome> {
        let outcome = match self.challenge.submit(guess.trim()) {
            Ok(outcome) => outcome,
            Err(LoanError::MalformedCode) => {
                tracing::debug!("Malformed code rejected without using an attempt");
                return Err(LoanError::MalformedCode);
            }
            Err(e) => return Err(e),
        };

        match outcome {
            SubmitOutcome::Verified => {
                tracing::info!("Verification succeeded");
            }
            SubmitOutcome::Retry { remaining } => {
                tracing::info!(remaining, "Incorrect code");
            }
            SubmitOutcome::Exhausted => {
                tracing::warn!(
                    max_attempts = self.challenge.max_attempts(),
                    "Verification attempts exhausted"
                );
            }
        }

        if self.challenge.is_terminal() {
            self.outcome = Some(outcome);
            self.store.clear().await?;
        }
        Ok(outcome)
    }

    /// `None` while the challenge is still active.
    pub fn destination(&self) -> Option<Destination> {
        match self.outcome? {
            SubmitOutcome::Verified => Some(Destination::Success(self.success_url.clone())),
            SubmitOutcome::Exhausted => Some(Destination::Failure(self.failure_url.clone())),
            SubmitOutcome::Retry { .. } => None,
        }
    }
}

/// Waits out the visible delay, then hands back the destination.
pub async fn redirect_after(delay: Duration, destination: Destination) -> Destination {
    tokio::time::sleep(delay).await;
    tracing::info!(url = destination.url(), "Redirecting");
    destination
}
