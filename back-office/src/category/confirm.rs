//! Delete confirmation
//!
//! Deleting a category suspends on a [`DeleteConfirmer`] (the confirm
//! dialog). A board allows one open dialog at a time, tracked by
//! [`ConfirmationSlot`].

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

/// Asks the user whether node `id` called `name` may be deleted
#[async_trait]
pub trait DeleteConfirmer: Send + Sync {
    async fn confirm(&self, id: &str, name: &str) -> bool;
}

/// Confirmer that always gives the same answer
#[derive(Debug, Clone, Copy)]
pub struct StaticConfirmer(pub bool);

#[async_trait]
impl DeleteConfirmer for StaticConfirmer {
    async fn confirm(&self, id: &str, name: &str) -> bool {
        tracing::debug!(id, name, answer = self.0, "Delete confirmation answered");
        self.0
    }
}

/// Single pending-confirmation slot shared by every strategy of a board
#[derive(Debug, Clone, Default)]
pub struct ConfirmationSlot {
    pending: Arc<Mutex<Option<String>>>,
}

impl ConfirmationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for node `id`; `None` while another confirmation is open
    pub fn try_acquire(&self, id: &str) -> Option<ConfirmationGuard> {
        let mut pending = self.pending.lock();
        if pending.is_some() {
            return None;
        }
        *pending = Some(id.to_string());
        Some(ConfirmationGuard { slot: self.clone() })
    }

    /// Id of the node whose confirmation is open
    pub fn pending(&self) -> Option<String> {
        self.pending.lock().clone()
    }
}

/// Releases the slot on drop
#[derive(Debug)]
pub struct ConfirmationGuard {
    slot: ConfirmationSlot,
}

impl Drop for ConfirmationGuard {
    fn drop(&mut self) {
        *self.slot.pending.lock() = None;
    }
}
