//! Observable database readiness state

use std::sync::Arc;

use tokio::sync::watch;

/// Connection state of the database collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbStatus {
    Disconnected,
    Connecting,
    Ready,
    Failed,
}

/// Shared handle on the current [`DbStatus`].
///
/// Cloned into the application state and the readiness monitor; every clone
/// observes the same value.
#[derive(Clone, Debug)]
pub struct DbReadiness {
    tx: Arc<watch::Sender<DbStatus>>,
}

impl DbReadiness {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(DbStatus::Disconnected);
        Self { tx: Arc::new(tx) }
    }

    pub fn status(&self) -> DbStatus {
        *self.tx.borrow()
    }

    pub fn is_ready(&self) -> bool {
        self.status() == DbStatus::Ready
    }

    /// Record a new status, logging transitions
    pub fn set(&self, status: DbStatus) {
        self.tx.send_if_modified(|current| {
            if *current == status {
                return false;
            }
            tracing::info!("Database status: {:?} -> {:?}", current, status);
            *current = status;
            true
        });
    }
}

impl Default for DbReadiness {
    fn default() -> Self {
        Self::new()
    }
}
