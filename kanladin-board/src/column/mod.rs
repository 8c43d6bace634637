//! Column operations
//!
//! Same two-phase protocol as the card operations, at column granularity:
//! synchronous optimistic apply, then a fire-and-forget remote mutation
//! whose completion triggers a full refetch.

mod create;
mod delete;
mod edit;
mod reorder;

use crate::store::BoardStateService;
use crate::sync::RemoteSync;
use std::sync::Arc;

/// Column-level operations against the shared board view
pub struct ColumnOperations {
    pub(crate) store: Arc<BoardStateService>,
    pub(crate) sync: Arc<RemoteSync>,
}

impl ColumnOperations {
    /// Create the service with its explicit dependencies
    pub fn new(store: Arc<BoardStateService>, sync: Arc<RemoteSync>) -> Self {
        Self { store, sync }
    }
}
