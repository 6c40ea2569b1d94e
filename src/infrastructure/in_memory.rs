use crate::domain::handoff::PendingApplication;
use crate::domain::ports::HandoffStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An in-memory handoff slot, shared by cloning.
///
/// Stands in for a browser session when both steps run in one process.
#[derive(Default, Clone)]
pub struct InMemoryHandoffStore {
    pending: Arc<RwLock<Option<PendingApplication>>>,
}

impl InMemoryHandoffStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HandoffStore for InMemoryHandoffStore {
    async fn save(&self, pending: &PendingApplication) -> Result<()> {
        let mut slot = self.pending.write().await;
        *slot = Some(pending.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<PendingApplication>> {
        let slot = self.pending.read().await;
        Ok(slot.clone())
    }

    async fn clear(&self) -> Result<()> {
        let mut slot = self.pending.write().await;
        *slot = None;
        Ok(())
    }
}
