//! Card operations
//!
//! Every operation follows the same two-phase protocol: apply the new local
//! state synchronously through the [`BoardStateService`], then dispatch the
//! matching remote mutation through [`RemoteSync`]. Completion triggers a
//! full refetch; a remote error is logged and the optimistic change stays
//! in place until the next refetch corrects it.

mod create;
mod delete;
mod edit;
mod mv;
mod order;

use crate::store::BoardStateService;
use crate::sync::RemoteSync;
use std::sync::Arc;

/// Card-level operations against the shared board view
pub struct CardOperations {
    pub(crate) store: Arc<BoardStateService>,
    pub(crate) sync: Arc<RemoteSync>,
}

impl CardOperations {
    /// Create the service with its explicit dependencies
    pub fn new(store: Arc<BoardStateService>, sync: Arc<RemoteSync>) -> Self {
        Self { store, sync }
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    use super::*;
    use crate::remote::InMemoryRemote;
    use crate::types::{Board, Card, Column};

    pub(crate) fn seeded_board() -> Board {
        Board::new("board-1", "Demo").with_columns(vec![
            Column::new("todo", "To Do").with_order(0).with_cards(vec![
                Card::new("card-1", "Card 1", "todo").with_order(0),
                Card::new("card-2", "Card 2", "todo").with_order(1),
            ]),
            Column::new("done", "Done").with_order(1),
        ])
    }

    pub(crate) fn stack(board: Board) -> (Arc<InMemoryRemote>, Arc<BoardStateService>, CardOperations) {
        let remote = Arc::new(InMemoryRemote::with_board(board.clone()));
        let store = Arc::new(BoardStateService::new());
        store.replace_from_remote(board);
        let sync = Arc::new(RemoteSync::new(remote.clone(), store.clone()));
        let ops = CardOperations::new(store.clone(), sync);
        (remote, store, ops)
    }
}
