//! In-memory remote board store
//!
//! Reference implementation of [`RemoteBoardStore`] for tests and embedders
//! running without a server. It behaves like a well-behaved backend:
//! authoritative id allocation, cascade delete of a column's cards, and
//! index-based resequencing whenever a card or column changes position.
//!
//! Every successful mutation is appended to an operation journal so callers
//! can assert exactly which remote operations were issued. `fail_next` arms
//! a one-shot injected failure for exercising the mutation-error path.

use super::{CreateCard, CreateColumn, RemoteBoardStore, UpdateCard, UpdateColumn};
use crate::error::{BoardError, Result};
use crate::types::{Board, Card, CardId, Column, ColumnId};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// One journaled mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    CreateColumn {
        title: String,
        order: Option<i64>,
    },
    UpdateColumn {
        id: ColumnId,
        title: Option<String>,
        order: Option<i64>,
    },
    DeleteColumn {
        id: ColumnId,
    },
    ReorderColumns {
        columns: Vec<ColumnId>,
    },
    CreateCard {
        title: String,
        column_id: ColumnId,
        order: Option<i64>,
    },
    UpdateCard {
        id: CardId,
        title: Option<String>,
        description: Option<String>,
    },
    DeleteCard {
        id: CardId,
    },
    MoveCard {
        id: CardId,
        column_id: ColumnId,
        order: Option<i64>,
    },
    UpdateCardOrder {
        id: CardId,
        order: i64,
    },
}

struct RemoteState {
    board: Board,
    next_column: u64,
    next_card: u64,
    journal: Vec<RemoteCall>,
    fail_next: Option<String>,
}

/// In-memory implementation of the remote board store
pub struct InMemoryRemote {
    state: Mutex<RemoteState>,
    fetches: AtomicU64,
}

impl InMemoryRemote {
    /// Create a store holding one empty board with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_board(Board::new("board-1", title))
    }

    /// Create a store seeded with an existing board.
    ///
    /// Id counters start past any `col-{n}` / `card-{n}` ids already in the
    /// seed so allocation never collides with seeded entities.
    pub fn with_board(board: Board) -> Self {
        let next_column = board
            .columns
            .iter()
            .filter_map(|c| numeric_suffix(c.id.as_str(), "col-"))
            .max()
            .unwrap_or(0);
        let next_card = board
            .columns
            .iter()
            .flat_map(|c| &c.cards)
            .filter_map(|c| numeric_suffix(c.id.as_str(), "card-"))
            .max()
            .unwrap_or(0);

        Self {
            state: Mutex::new(RemoteState {
                board,
                next_column,
                next_card,
                journal: Vec::new(),
                fail_next: None,
            }),
            fetches: AtomicU64::new(0),
        }
    }

    /// Arm a one-shot failure for the named operation
    pub fn fail_next(&self, op: impl Into<String>) {
        self.lock().fail_next = Some(op.into());
    }

    /// Journaled mutations so far, oldest first
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.lock().journal.clone()
    }

    /// Drain the journal (useful after test setup)
    pub fn take_calls(&self) -> Vec<RemoteCall> {
        std::mem::take(&mut self.lock().journal)
    }

    /// Number of full-board fetches served
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RemoteState> {
        self.state.lock().expect("remote state poisoned")
    }
}

fn numeric_suffix(id: &str, prefix: &str) -> Option<u64> {
    id.strip_prefix(prefix)?.parse().ok()
}

impl RemoteState {
    fn take_failure(&mut self, op: &str) -> Option<BoardError> {
        if self.fail_next.as_deref() == Some(op) {
            self.fail_next = None;
            Some(BoardError::mutation(op, "injected failure"))
        } else {
            None
        }
    }

    fn find_card_home(&self, id: &CardId) -> Result<(usize, usize)> {
        crate::types::locate_card(&self.board.columns, id).ok_or_else(|| {
            BoardError::CardNotFound { id: id.to_string() }
        })
    }

    /// Re-assign sequential orders to one column's cards
    fn resequence_cards(&mut self, column_index: usize) {
        for (i, card) in self.board.columns[column_index].cards.iter_mut().enumerate() {
            card.order = Some(i as i64);
        }
    }
}

#[async_trait]
impl RemoteBoardStore for InMemoryRemote {
    async fn fetch_board(&self) -> Result<Board> {
        let mut state = self.lock();
        if let Some(err) = state.take_failure("fetch board") {
            return Err(BoardError::fetch(err.to_string()));
        }
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(state.board.clone())
    }

    async fn create_column(&self, input: CreateColumn) -> Result<Column> {
        let mut state = self.lock();
        if let Some(err) = state.take_failure("create column") {
            return Err(err);
        }
        if state.board.id != input.board_id {
            return Err(BoardError::BoardNotFound);
        }

        state.next_column += 1;
        let id = ColumnId::from_string(format!("col-{}", state.next_column));
        let order = input.order.unwrap_or_else(|| state.board.next_column_order());
        let column = Column::new(id, &input.title).with_order(order);
        state.board.columns.push(column.clone());

        state.journal.push(RemoteCall::CreateColumn {
            title: input.title,
            order: input.order,
        });
        Ok(column)
    }

    async fn update_column(&self, input: UpdateColumn) -> Result<Column> {
        let mut state = self.lock();
        if let Some(err) = state.take_failure("update column") {
            return Err(err);
        }

        let column = state.board.find_column_mut(&input.id).ok_or_else(|| {
            BoardError::ColumnNotFound {
                id: input.id.to_string(),
            }
        })?;
        if let Some(title) = &input.title {
            column.title = title.clone();
        }
        if let Some(order) = input.order {
            column.order = Some(order);
        }
        let updated = column.clone();

        state.journal.push(RemoteCall::UpdateColumn {
            id: input.id,
            title: input.title,
            order: input.order,
        });
        Ok(updated)
    }

    async fn delete_column(&self, id: &ColumnId) -> Result<bool> {
        let mut state = self.lock();
        if let Some(err) = state.take_failure("delete column") {
            return Err(err);
        }

        // Cascade: removing the column drops its cards with it
        let before = state.board.columns.len();
        state.board.columns.retain(|c| &c.id != id);
        let deleted = state.board.columns.len() < before;

        state.journal.push(RemoteCall::DeleteColumn { id: id.clone() });
        Ok(deleted)
    }

    async fn reorder_columns(&self, columns: &[ColumnId]) -> Result<bool> {
        let mut state = self.lock();
        if let Some(err) = state.take_failure("reorder columns") {
            return Err(err);
        }

        for (index, id) in columns.iter().enumerate() {
            if let Some(column) = state.board.find_column_mut(id) {
                column.order = Some(index as i64);
            }
        }

        state.journal.push(RemoteCall::ReorderColumns {
            columns: columns.to_vec(),
        });
        Ok(true)
    }

    async fn create_card(&self, input: CreateCard) -> Result<Card> {
        let mut state = self.lock();
        if let Some(err) = state.take_failure("create card") {
            return Err(err);
        }

        state.next_card += 1;
        let id = CardId::from_string(format!("card-{}", state.next_card));
        let column = state.board.find_column_mut(&input.column_id).ok_or_else(|| {
            BoardError::ColumnNotFound {
                id: input.column_id.to_string(),
            }
        })?;
        let order = input.order.unwrap_or_else(|| column.next_card_order());
        let card = Card::new(id, &input.title, input.column_id.clone())
            .with_description(&input.description)
            .with_order(order);
        column.cards.push(card.clone());

        state.journal.push(RemoteCall::CreateCard {
            title: input.title,
            column_id: input.column_id,
            order: input.order,
        });
        Ok(card)
    }

    async fn update_card(&self, input: UpdateCard) -> Result<Card> {
        let mut state = self.lock();
        if let Some(err) = state.take_failure("update card") {
            return Err(err);
        }

        let (column_index, card_index) = state.find_card_home(&input.id)?;
        {
            let card = &mut state.board.columns[column_index].cards[card_index];
            if let Some(title) = &input.title {
                card.title = title.clone();
            }
            if let Some(description) = &input.description {
                card.description = description.clone();
            }
            if let Some(order) = input.order {
                card.order = Some(order);
            }
        }

        // A column change relocates the card to the end of its new home
        if let Some(target) = &input.column_id {
            let target_index = crate::types::column_index(&state.board.columns, target)
                .ok_or_else(|| BoardError::ColumnNotFound {
                    id: target.to_string(),
                })?;
            if target_index != column_index {
                let mut card = state.board.columns[column_index].cards.remove(card_index);
                card.column_id = target.clone();
                state.board.columns[target_index].cards.push(card);
                state.resequence_cards(column_index);
                state.resequence_cards(target_index);
            }
        }

        let (column_index, card_index) = state.find_card_home(&input.id)?;
        let updated = state.board.columns[column_index].cards[card_index].clone();

        state.journal.push(RemoteCall::UpdateCard {
            id: input.id,
            title: input.title,
            description: input.description,
        });
        Ok(updated)
    }

    async fn delete_card(&self, id: &CardId) -> Result<bool> {
        let mut state = self.lock();
        if let Some(err) = state.take_failure("delete card") {
            return Err(err);
        }

        let deleted = match crate::types::locate_card(&state.board.columns, id) {
            Some((column_index, card_index)) => {
                state.board.columns[column_index].cards.remove(card_index);
                true
            }
            None => false,
        };

        state.journal.push(RemoteCall::DeleteCard { id: id.clone() });
        Ok(deleted)
    }

    async fn move_card(
        &self,
        id: &CardId,
        column_id: &ColumnId,
        order: Option<i64>,
    ) -> Result<Card> {
        let mut state = self.lock();
        if let Some(err) = state.take_failure("move card") {
            return Err(err);
        }

        let target_index = crate::types::column_index(&state.board.columns, column_id)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: column_id.to_string(),
            })?;
        let (source_index, card_index) = state.find_card_home(id)?;

        let mut card = state.board.columns[source_index].cards.remove(card_index);
        card.column_id = column_id.clone();

        let target_len = state.board.columns[target_index].cards.len();
        let insert_at = order
            .map(|o| (o.max(0) as usize).min(target_len))
            .unwrap_or(target_len);
        state.board.columns[target_index].cards.insert(insert_at, card);

        state.resequence_cards(source_index);
        state.resequence_cards(target_index);

        let moved = state.board.columns[target_index].cards[insert_at].clone();
        state.journal.push(RemoteCall::MoveCard {
            id: id.clone(),
            column_id: column_id.clone(),
            order,
        });
        Ok(moved)
    }

    async fn update_card_order(&self, id: &CardId, order: i64) -> Result<Card> {
        let mut state = self.lock();
        if let Some(err) = state.take_failure("update card order") {
            return Err(err);
        }

        let (column_index, card_index) = state.find_card_home(id)?;
        let card = state.board.columns[column_index].cards.remove(card_index);
        let len = state.board.columns[column_index].cards.len();
        let insert_at = (order.max(0) as usize).min(len);
        state.board.columns[column_index].cards.insert(insert_at, card);
        state.resequence_cards(column_index);

        let updated = state.board.columns[column_index].cards[insert_at].clone();
        state.journal.push(RemoteCall::UpdateCardOrder {
            id: id.clone(),
            order,
        });
        Ok(updated)
    }
}
