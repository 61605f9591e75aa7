use std::future::Future;

use serde::Serialize;
use tokio::task::{self, JoinHandle};
use tracing::error;

/// Why a slot produced no data. The fetches themselves never fail, so the
/// only sources are the task layer.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("slot `{0}` panicked while loading")]
    Panicked(&'static str),
    #[error("slot `{0}` was cancelled")]
    Cancelled(&'static str),
}

/// Terminal state of one slot, as rendered into its page region.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotOutcome<T> {
    Resolved { data: T },
    Failed { error: String },
}

/// An independently rendered region of a page with its own asynchronous data
/// dependency. Each slot runs its fetch on its own task, so a slow or
/// panicking sibling can never block or poison it.
pub struct Slot<T> {
    name: &'static str,
    handle: JoinHandle<T>,
}

impl<T: Send + 'static> Slot<T> {
    pub fn spawn<F>(name: &'static str, fetch: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            name,
            handle: task::spawn(fetch),
        }
    }

    /// Awaits the slot's own task. A panic inside the task is contained
    /// here: it turns into a failed outcome for this region only.
    pub async fn resolve(self) -> SlotOutcome<T> {
        match self.handle.await {
            Ok(data) => SlotOutcome::Resolved { data },
            Err(join_err) => {
                let reason = if join_err.is_panic() {
                    SlotError::Panicked(self.name)
                } else {
                    SlotError::Cancelled(self.name)
                };
                error!("{}", reason);
                SlotOutcome::Failed {
                    error: reason.to_string(),
                }
            }
        }
    }
}
