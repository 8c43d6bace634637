//! Core types for the board client

mod board;
mod ids;

pub use board::{column_index, locate_card, Board, Card, Column};
pub use ids::{BoardId, CardId, ColumnId, TEMP_ID_PREFIX};
