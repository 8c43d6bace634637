//! RemoteSync - fire-and-forget mutation dispatch with refetch-on-complete
//!
//! Handlers apply their optimistic update synchronously and hand the remote
//! call to [`RemoteSync::submit`], which spawns it and returns immediately.
//! When the call completes, success or failure alike, a full-board refetch runs
//! and overwrites the local view; that refetch is the only
//! consistency-restoring mechanism in the system. Mutation failures are
//! logged and never roll the optimistic state back.
//!
//! If several mutations are in flight at once, the last refetch to land
//! wins. There is no cancellation or timeout: a call that never resolves
//! leaves the optimistic state permanently unconfirmed.

use crate::error::Result;
use crate::remote::RemoteBoardStore;
use crate::store::BoardStateService;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::task::JoinSet;

/// Dispatches remote mutations and keeps the local view reconciled
pub struct RemoteSync {
    remote: Arc<dyn RemoteBoardStore>,
    store: Arc<BoardStateService>,
    in_flight: Mutex<JoinSet<()>>,
}

impl RemoteSync {
    /// Create a sync collaborator over the given remote store and view
    pub fn new(remote: Arc<dyn RemoteBoardStore>, store: Arc<BoardStateService>) -> Self {
        Self {
            remote,
            store,
            in_flight: Mutex::new(JoinSet::new()),
        }
    }

    /// Handle on the remote store, for building mutation futures
    pub fn remote(&self) -> Arc<dyn RemoteBoardStore> {
        Arc::clone(&self.remote)
    }

    /// Fetch the authoritative board and replace the local view.
    ///
    /// This is both the initial load and the user-triggered reload: the
    /// store passes through `Loading` and ends `Ready` or `Failed`, with
    /// the failure message surfaced unmodified.
    pub async fn load(&self) -> Result<()> {
        self.store.set_loading();
        match self.remote.fetch_board().await {
            Ok(board) => {
                tracing::info!(board = %board.id, "board loaded");
                self.store.replace_from_remote(board);
                Ok(())
            }
            Err(error) => {
                tracing::error!(%error, "board fetch failed");
                self.store.fail(error.to_string());
                Err(error)
            }
        }
    }

    /// Dispatch a mutation fire-and-forget.
    ///
    /// The handler returns as soon as the task is spawned. On completion the
    /// full board is refetched; a refetch failure here is logged but leaves
    /// the current view in place (only [`RemoteSync::load`] surfaces fetch
    /// errors to the UI).
    pub fn submit<F>(&self, op: &'static str, fut: F)
    where
        F: Future<Output = Result<()>> + Send + 'static,
    {
        let remote = Arc::clone(&self.remote);
        let store = Arc::clone(&self.store);

        let mut in_flight = self.in_flight.lock().expect("in-flight task set poisoned");
        in_flight.spawn(async move {
            if let Err(error) = fut.await {
                tracing::error!(op, %error, "remote mutation failed");
            }
            match remote.fetch_board().await {
                Ok(board) => store.replace_from_remote(board),
                Err(error) => tracing::error!(op, %error, "refetch after mutation failed"),
            }
        });
    }

    /// Await every in-flight mutation and its refetch.
    ///
    /// Tests and graceful shutdown use this; the UI never does.
    pub async fn flush(&self) {
        loop {
            let mut drained = {
                let mut in_flight = self.in_flight.lock().expect("in-flight task set poisoned");
                if in_flight.is_empty() {
                    break;
                }
                std::mem::take(&mut *in_flight)
            };
            while let Some(joined) = drained.join_next().await {
                if let Err(error) = joined {
                    tracing::error!(%error, "sync task aborted");
                }
            }
        }
    }
}
