//! Drag-and-drop resolution
//!
//! A drag gesture runs `Idle → Dragging(active) → Resolved | Cancelled →
//! Idle`. The resolver receives the drag-start and drag-end signals from
//! the input layer (which owns sensors, geometry, and the guarantee that at
//! most one gesture is active at a time) and turns the drop target into a
//! column reorder, a same-column card reorder, or a cross-column card move.
//! The resulting state change is applied optimistically and the matching
//! remote mutation is dispatched through the card/column operations.

mod resolve;

use crate::card::CardOperations;
use crate::column::ColumnOperations;
use crate::store::BoardStateService;
use crate::types::{Card, CardId, Column, ColumnId};
use std::sync::{Arc, Mutex};

/// Kind of entity a drag gesture declared at drag-start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Card,
    Column,
}

/// Drag-start signal: which entity, of which declared kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragStart {
    pub id: String,
    pub kind: DragKind,
}

impl DragStart {
    pub fn card(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: DragKind::Card,
        }
    }

    pub fn column(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: DragKind::Column,
        }
    }
}

/// Drag-end signal: the active entity plus the drop target, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub active: DragStart,
    pub over: Option<String>,
}

impl DragEnd {
    pub fn new(active: DragStart, over: impl Into<String>) -> Self {
        Self {
            active,
            over: Some(over.into()),
        }
    }

    /// A drag that ended with no drop target
    pub fn without_target(active: DragStart) -> Self {
        Self { active, over: None }
    }
}

/// Snapshot of the dragged entity, kept for floating-preview rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveEntity {
    Card(Card),
    Column(Column),
}

/// How a drag gesture was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// No drop target, source equals target, or state diverged underneath
    /// the gesture: nothing was mutated, no remote call was issued
    Cancelled,
    /// Columns were reordered into the given sequence
    ColumnsReordered { order: Vec<ColumnId> },
    /// A card changed position within its column
    CardReordered {
        card: CardId,
        column: ColumnId,
        index: usize,
    },
    /// A card moved to another column
    CardMoved {
        card: CardId,
        from: ColumnId,
        to: ColumnId,
        index: usize,
    },
}

/// Resolves drag gestures into board mutations
pub struct DragResolver {
    pub(crate) store: Arc<BoardStateService>,
    pub(crate) cards: Arc<CardOperations>,
    pub(crate) columns: Arc<ColumnOperations>,
    active: Mutex<Option<ActiveEntity>>,
}

impl DragResolver {
    /// Create the resolver with its explicit dependencies
    pub fn new(
        store: Arc<BoardStateService>,
        cards: Arc<CardOperations>,
        columns: Arc<ColumnOperations>,
    ) -> Self {
        Self {
            store,
            cards,
            columns,
            active: Mutex::new(None),
        }
    }

    /// Record the entity a gesture picked up.
    ///
    /// Cards are located by linear search across all columns, columns by
    /// direct lookup. An id missing from current state leaves no active
    /// entity; resolution will then be a defensive no-op.
    pub fn drag_start(&self, event: DragStart) {
        let snapshot = self.store.columns();
        let active = match event.kind {
            DragKind::Card => {
                let id = CardId::from_string(&event.id);
                crate::types::locate_card(&snapshot, &id)
                    .map(|(ci, xi)| ActiveEntity::Card(snapshot[ci].cards[xi].clone()))
            }
            DragKind::Column => {
                let id = ColumnId::from_string(&event.id);
                snapshot
                    .iter()
                    .find(|c| c.id == id)
                    .map(|c| ActiveEntity::Column(c.clone()))
            }
        };
        *self.lock_active() = active;
    }

    /// The entity currently being dragged, if any
    pub fn active_entity(&self) -> Option<ActiveEntity> {
        self.lock_active().clone()
    }

    pub(crate) fn clear_active(&self) {
        *self.lock_active() = None;
    }

    fn lock_active(&self) -> std::sync::MutexGuard<'_, Option<ActiveEntity>> {
        self.active.lock().expect("active drag slot poisoned")
    }
}
