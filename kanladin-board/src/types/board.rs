//! Board entity types: Board, Column, Card

use super::ids::{BoardId, CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// A kanban board: a titled, ordered sequence of columns.
///
/// The client treats the board as read-mostly; a single board is in scope
/// and the remote store is authoritative for its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Create a new board with the given id and title
    pub fn new(id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            columns: Vec::new(),
        }
    }

    /// Set the columns
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Find a column by id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find a column by id (mutable)
    pub fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// Order value for the next appended column
    pub fn next_column_order(&self) -> i64 {
        next_order(self.columns.iter().map(|c| c.order))
    }
}

/// A column: an ordered container of cards with a display position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Create a new, empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            order: None,
            cards: Vec::new(),
        }
    }

    /// Set the display position
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the cards
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Find a card by id
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Order value for the next appended card.
    ///
    /// Max over existing orders (missing treated as 0, empty set as -1),
    /// plus one, so the first card in an empty column gets 0.
    pub fn next_card_order(&self) -> i64 {
        next_order(self.cards.iter().map(|c| c.order))
    }
}

/// A card: a task unit with a display position within its owning column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub column_id: ColumnId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Card {
    /// Create a new card owned by the given column
    pub fn new(id: impl Into<CardId>, title: impl Into<String>, column_id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            column_id: column_id.into(),
            order: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the display position
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

fn next_order(orders: impl Iterator<Item = Option<i64>>) -> i64 {
    orders.map(|o| o.unwrap_or(0)).fold(-1, i64::max) + 1
}

/// Locate a card across a column list, returning (column index, card index)
pub fn locate_card(columns: &[Column], id: &CardId) -> Option<(usize, usize)> {
    for (column_index, column) in columns.iter().enumerate() {
        if let Some(card_index) = column.cards.iter().position(|c| &c.id == id) {
            return Some((column_index, card_index));
        }
    }
    None
}

/// Index of a column within a column list
pub fn column_index(columns: &[Column], id: &ColumnId) -> Option<usize> {
    columns.iter().position(|c| &c.id == id)
}
