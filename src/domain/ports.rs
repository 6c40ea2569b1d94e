use super::handoff::PendingApplication;
use super::otp::OtpCode;
use crate::error::Result;
use async_trait::async_trait;

/// Produces verification codes for new challenges.
pub trait CodeSource: Send + Sync {
    fn next_code(&self) -> Result<OtpCode>;
}

/// Session-scoped handoff between the form and confirmation steps.
#[async_trait]
pub trait HandoffStore: Send + Sync {
    /// Writes all fields in one call.
    async fn save(&self, pending: &PendingApplication) -> Result<()>;
    async fn load(&self) -> Result<Option<PendingApplication>>;
    async fn clear(&self) -> Result<()>;
}

pub type HandoffStoreBox = Box<dyn HandoffStore>;
pub type CodeSourceBox = Box<dyn CodeSource>;
