//! Background purge task.

use std::sync::Weak;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info, warn};

use super::store::StoreInner;

/// Handle to the store's single background purge task.
///
/// Spawned once when the store is constructed; dropping the handle aborts
/// the task. The task only holds a weak reference to the store, so it also
/// winds down on its own once the store is gone.
pub(crate) struct Reaper {
    handle: JoinHandle<()>,
}

impl Reaper {
    /// Spawn the purge loop with the given tick interval.
    ///
    /// Each tick removes all expired sessions. A failed pass is logged and
    /// the loop continues; purge errors never reach callers and never stop
    /// future ticks.
    pub(crate) fn spawn(store: Weak<StoreInner>, tick: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(tick);

            // Skip the first immediate tick
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let Some(store) = store.upgrade() else {
                    debug!("session store dropped, stopping reaper");
                    break;
                };

                match store.purge_expired() {
                    Ok(0) => debug!("purge pass: no expired sessions"),
                    Ok(purged) => info!(purged, "purged expired sessions"),
                    Err(e) => warn!(error = %e, "purge pass failed"),
                }
            }
        });

        Self { handle }
    }

    #[cfg(test)]
    pub(crate) fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Reaper {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
