use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::storages::StatusStorageTrait;

/// Process-wide on/off switch for automatic reactions.
///
/// The in-memory flag is what the running plugin obeys. The storage only keeps
/// it across restarts, so a failed save never changes the flag back.
pub struct EnablementState {
    enabled: AtomicBool,
    storage: Arc<dyn StatusStorageTrait>,
}

impl EnablementState {
    /// Read the persisted flag once, at startup
    pub async fn load(storage: Arc<dyn StatusStorageTrait>) -> Self {
        let enabled = storage.load().await;
        log::info!("Automatic emoji reply is {}", if enabled { "on" } else { "off" });
        Self {
            enabled: AtomicBool::new(enabled),
            storage,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub async fn enable(&self) {
        self.set(true).await;
    }

    pub async fn disable(&self) {
        self.set(false).await;
    }

    async fn set(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        self.storage.save(enabled).await;
    }
}
