//! BoardStateService - the in-memory optimistic view of the board
//!
//! The service holds the current best-known columns plus the load phase and
//! board identity, and exposes get/set/subscribe access. Operations and the
//! drag resolver receive it explicitly; nothing discovers it through ambient
//! context.
//!
//! The view is a materialized, possibly-stale optimistic mirror: the remote
//! store is authoritative, and every successful fetch replaces the content
//! wholesale via [`BoardStateService::replace_from_remote`].

use crate::defaults::FALLBACK_BOARD_TITLE;
use crate::ordering::sort_by_order;
use crate::types::{Board, BoardId, Column};
use tokio::sync::watch;

/// Load phase of the board view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Initial fetch (or a user-triggered reload) is pending
    Loading,
    /// An authoritative response has been applied
    Ready,
    /// The fetch failed; the message is surfaced to the UI unmodified
    Failed(String),
}

/// Snapshot of everything the rendering layer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub phase: LoadPhase,
    pub board_id: Option<BoardId>,
    pub title: String,
    pub columns: Vec<Column>,
}

impl BoardView {
    fn initial() -> Self {
        Self {
            phase: LoadPhase::Loading,
            board_id: None,
            title: FALLBACK_BOARD_TITLE.to_string(),
            columns: Vec::new(),
        }
    }
}

/// Shared, observable board state
pub struct BoardStateService {
    tx: watch::Sender<BoardView>,
}

impl BoardStateService {
    /// Create a new service in the `Loading` phase with no columns
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(BoardView::initial());
        Self { tx }
    }

    /// Current snapshot of the whole view
    pub fn snapshot(&self) -> BoardView {
        self.tx.borrow().clone()
    }

    /// Current load phase
    pub fn phase(&self) -> LoadPhase {
        self.tx.borrow().phase.clone()
    }

    /// Current columns, in display order
    pub fn columns(&self) -> Vec<Column> {
        self.tx.borrow().columns.clone()
    }

    /// Id of the board in scope, once known
    pub fn board_id(&self) -> Option<BoardId> {
        self.tx.borrow().board_id.clone()
    }

    /// Board title, falling back to the built-in placeholder
    pub fn title(&self) -> String {
        let title = self.tx.borrow().title.clone();
        if title.is_empty() {
            FALLBACK_BOARD_TITLE.to_string()
        } else {
            title
        }
    }

    /// Every column and card id currently in the view.
    ///
    /// Temporary-id minting checks uniqueness against this set.
    pub fn known_ids(&self) -> Vec<String> {
        let view = self.tx.borrow();
        let mut ids = Vec::new();
        for column in &view.columns {
            ids.push(column.id.as_str().to_string());
            for card in &column.cards {
                ids.push(card.id.as_str().to_string());
            }
        }
        ids
    }

    /// Replace the column vector (the single optimistic-mutation entry point)
    pub fn set_columns(&self, columns: Vec<Column>) {
        self.tx.send_modify(|view| view.columns = columns);
    }

    /// Replace the whole view with an authoritative remote response.
    ///
    /// A card order of 0 is substituted when the server omitted one, then
    /// columns and cards are arranged into display order.
    pub fn replace_from_remote(&self, board: Board) {
        let mut columns = sort_by_order(&board.columns);
        for column in &mut columns {
            for card in &mut column.cards {
                if card.order.is_none() {
                    card.order = Some(0);
                }
            }
            column.cards = sort_by_order(&column.cards);
        }

        tracing::debug!(
            board = %board.id,
            columns = columns.len(),
            "replacing local state with authoritative board"
        );

        self.tx.send_modify(|view| {
            view.phase = LoadPhase::Ready;
            view.board_id = Some(board.id.clone());
            view.title = board.title.clone();
            view.columns = columns;
        });
    }

    /// Record a fetch failure; the message reaches subscribers verbatim
    pub fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        self.tx.send_modify(|view| view.phase = LoadPhase::Failed(message.clone()));
    }

    /// Re-enter the pending phase (user-triggered reload)
    pub fn set_loading(&self) {
        self.tx.send_modify(|view| view.phase = LoadPhase::Loading);
    }

    /// Observe every change to the view
    pub fn subscribe(&self) -> watch::Receiver<BoardView> {
        self.tx.subscribe()
    }
}

impl Default for BoardStateService {
    fn default() -> Self {
        Self::new()
    }
}
