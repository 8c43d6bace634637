//! Kanban board client core
//!
//! This crate is the domain core of a Kanban board client: boards contain
//! ordered columns, columns contain ordered cards, and every create / edit /
//! delete / drag-reorder is applied optimistically to an in-memory view and
//! then pushed to an authoritative remote store.
//!
//! ## Overview
//!
//! - **Optimistic first** - handlers mutate the local view synchronously,
//!   then dispatch the remote mutation fire-and-forget
//! - **Refetch wins** - every completed mutation triggers a full-board
//!   refetch that overwrites the local view; the remote store is always
//!   authoritative
//! - **Explicit wiring** - the state service, the operations, and the drag
//!   resolver receive their dependencies by constructor, never through
//!   ambient context
//!
//! Rendering, transport, and pointer handling live outside this crate: the
//! UI layer subscribes to [`BoardStateService`] and feeds drag signals to
//! [`DragResolver`]; anything implementing [`RemoteBoardStore`] can sit on
//! the other side.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use kanladin_board::{
//!     BoardStateService, CardOperations, ColumnOperations, DragEnd, DragResolver, DragStart,
//!     RemoteSync,
//! };
//! use kanladin_board::remote::InMemoryRemote;
//! use std::sync::Arc;
//!
//! # async fn example() -> kanladin_board::Result<()> {
//! let remote = Arc::new(InMemoryRemote::new("My Project"));
//! let store = Arc::new(BoardStateService::new());
//! let sync = Arc::new(RemoteSync::new(remote, store.clone()));
//!
//! sync.load().await?;
//!
//! let cards = Arc::new(CardOperations::new(store.clone(), sync.clone()));
//! let columns = Arc::new(ColumnOperations::new(store.clone(), sync.clone()));
//! let resolver = DragResolver::new(store.clone(), cards.clone(), columns.clone());
//!
//! // A column, a card, and a drag of that card onto the column surface
//! let column_id = columns.create().expect("board is loaded");
//! let card_id = cards.create(&column_id).expect("column exists");
//! resolver.drag_end(DragEnd::new(
//!     DragStart::card(card_id.as_str()),
//!     column_id.as_str(),
//! ));
//!
//! sync.flush().await;
//! # Ok(())
//! # }
//! ```

pub mod card;
pub mod column;
pub mod defaults;
pub mod drag;
mod error;
pub mod ordering;
pub mod remote;
pub mod store;
pub mod sync;
pub mod types;

pub use card::CardOperations;
pub use column::ColumnOperations;
pub use drag::{ActiveEntity, DragEnd, DragKind, DragOutcome, DragResolver, DragStart};
pub use error::{BoardError, Result};
pub use remote::RemoteBoardStore;
pub use store::{BoardStateService, BoardView, LoadPhase};
pub use sync::RemoteSync;

// Re-export commonly used types
pub use types::{Board, BoardId, Card, CardId, Column, ColumnId};
