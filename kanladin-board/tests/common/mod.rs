//! Shared wiring for integration tests

use kanladin_board::remote::InMemoryRemote;
use kanladin_board::types::{Board, Card, Column};
use kanladin_board::{
    BoardStateService, CardOperations, ColumnOperations, DragResolver, RemoteSync,
};
use std::sync::Arc;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Two-column fixture: To Do with two cards, Done empty
pub fn two_column_board() -> Board {
    Board::new("board-1", "Kanladin Project Board").with_columns(vec![
        Column::new("todo", "To Do").with_order(0).with_cards(vec![
            Card::new("card-1", "Card 1", "todo").with_order(0),
            Card::new("card-2", "Card 2", "todo").with_order(1),
        ]),
        Column::new("done", "Done").with_order(1),
    ])
}

pub struct Harness {
    pub remote: Arc<InMemoryRemote>,
    pub store: Arc<BoardStateService>,
    pub sync: Arc<RemoteSync>,
    pub cards: Arc<CardOperations>,
    pub columns: Arc<ColumnOperations>,
    pub resolver: DragResolver,
}

/// Wire the full stack over an in-memory remote and load the board
pub async fn harness(board: Board) -> Harness {
    init_tracing();

    let remote = Arc::new(InMemoryRemote::with_board(board));
    let store = Arc::new(BoardStateService::new());
    let sync = Arc::new(RemoteSync::new(remote.clone(), store.clone()));
    sync.load().await.expect("initial load");

    let cards = Arc::new(CardOperations::new(store.clone(), sync.clone()));
    let columns = Arc::new(ColumnOperations::new(store.clone(), sync.clone()));
    let resolver = DragResolver::new(store.clone(), cards.clone(), columns.clone());

    Harness {
        remote,
        store,
        sync,
        cards,
        columns,
        resolver,
    }
}
