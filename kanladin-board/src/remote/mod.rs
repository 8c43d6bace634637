//! Remote board store contract
//!
//! The abstract query/mutation surface the client core consumes. Transport,
//! schema, and caching belong to the implementation behind this trait; the
//! core only sees typed inputs and the entities that come back. Every
//! mutating operation, on completion, is followed by a full-board refetch
//! (see [`crate::sync::RemoteSync`]); the refetch is the system's sole
//! consistency-restoring mechanism.

pub mod memory;

use crate::error::Result;
use crate::types::{Board, BoardId, Card, CardId, Column, ColumnId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use memory::{InMemoryRemote, RemoteCall};

/// Input for creating a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateColumn {
    pub title: String,
    pub board_id: BoardId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl CreateColumn {
    /// Create a column-creation input
    pub fn new(title: impl Into<String>, board_id: impl Into<BoardId>) -> Self {
        Self {
            title: title.into(),
            board_id: board_id.into(),
            order: None,
        }
    }

    /// Set the display position
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

/// Input for updating a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateColumn {
    pub id: ColumnId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl UpdateColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            order: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

/// Input for creating a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCard {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub column_id: ColumnId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl CreateCard {
    pub fn new(title: impl Into<String>, column_id: impl Into<ColumnId>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            column_id: column_id.into(),
            order: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

/// Input for updating a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCard {
    pub id: CardId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl UpdateCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            column_id: None,
            order: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_column(mut self, column_id: impl Into<ColumnId>) -> Self {
        self.column_id = Some(column_id.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

/// The remote board store: queries and mutations over the single board in
/// scope. Implementations must be shareable across tasks.
#[async_trait]
pub trait RemoteBoardStore: Send + Sync {
    /// Fetch the full authoritative board
    async fn fetch_board(&self) -> Result<Board>;

    /// Create a column; the store allocates the authoritative id
    async fn create_column(&self, input: CreateColumn) -> Result<Column>;

    /// Update a column's title and/or order
    async fn update_column(&self, input: UpdateColumn) -> Result<Column>;

    /// Delete a column; contained cards are cascaded by the store
    async fn delete_column(&self, id: &ColumnId) -> Result<bool>;

    /// Apply a full column ordering in one call (order = index in sequence)
    async fn reorder_columns(&self, columns: &[ColumnId]) -> Result<bool>;

    /// Create a card; the store allocates the authoritative id
    async fn create_card(&self, input: CreateCard) -> Result<Card>;

    /// Update a card's fields
    async fn update_card(&self, input: UpdateCard) -> Result<Card>;

    /// Delete a card
    async fn delete_card(&self, id: &CardId) -> Result<bool>;

    /// Move a card to a column, at the given position (end when `None`)
    async fn move_card(&self, id: &CardId, column_id: &ColumnId, order: Option<i64>)
        -> Result<Card>;

    /// Set a card's position within its current column
    async fn update_card_order(&self, id: &CardId, order: i64) -> Result<Card>;
}
