//! Drag-end resolution
//!
//! The only subtle part of the board: deciding, once a drop target is
//! known, whether the gesture is a column reorder, a same-column card
//! reorder, or a cross-column move, and computing the resulting positions.

use super::{DragEnd, DragKind, DragOutcome, DragResolver};
use crate::types::{locate_card, CardId, Column, ColumnId};

impl DragResolver {
    /// Resolve a finished drag gesture.
    ///
    /// Degenerate gestures (no target, source equals target, source no
    /// longer in state) cancel without mutating anything. Every branch
    /// clears the active entity on the way out.
    pub fn drag_end(&self, event: DragEnd) -> DragOutcome {
        let outcome = self.resolve(&event);
        self.clear_active();
        outcome
    }

    fn resolve(&self, event: &DragEnd) -> DragOutcome {
        let Some(over) = event.over.as_deref() else {
            tracing::debug!(active = %event.active.id, "drag ended with no target");
            return DragOutcome::Cancelled;
        };

        if event.active.id == over {
            return DragOutcome::Cancelled;
        }

        match event.active.kind {
            DragKind::Card => self.resolve_card_drag(&event.active.id, over),
            DragKind::Column => self.resolve_column_drag(&event.active.id, over),
        }
    }

    /// A card was dropped on another card or on a column surface.
    fn resolve_card_drag(&self, active_id: &str, over_id: &str) -> DragOutcome {
        let mut columns = self.store.columns();
        let card_id = CardId::from_string(active_id);

        // State and drag snapshot can diverge (a refetch landed mid-drag);
        // a vanished source cancels the gesture silently.
        let Some((source_column, source_index)) = locate_card(&columns, &card_id) else {
            tracing::debug!(card = %card_id, "drag source no longer in state");
            return DragOutcome::Cancelled;
        };

        let over_card = locate_card(&columns, &CardId::from_string(over_id));
        if let Some((target_column, target_index)) = over_card {
            if source_column == target_column {
                self.reorder_within_column(columns, source_column, source_index, target_index)
            } else {
                self.move_between_columns(
                    columns,
                    (source_column, source_index),
                    (target_column, target_index),
                )
            }
        } else {
            // Dropped on a column surface rather than on a card
            let target = ColumnId::from_string(over_id);
            let Some(target_column) = crate::types::column_index(&columns, &target) else {
                tracing::debug!(column = %target, "drop target no longer in state");
                return DragOutcome::Cancelled;
            };
            self.append_to_column(columns, (source_column, source_index), target_column)
        }
    }

    /// Same-column reorder: relocate one card, then resequence the column.
    fn reorder_within_column(
        &self,
        mut columns: Vec<Column>,
        column_index: usize,
        source_index: usize,
        target_index: usize,
    ) -> DragOutcome {
        let column_id = columns[column_index].id.clone();
        let cards = &mut columns[column_index].cards;

        let card = cards.remove(source_index);
        let card_id = card.id.clone();
        cards.insert(target_index, card);
        resequence(cards);

        tracing::debug!(card = %card_id, column = %column_id, index = target_index, "card reordered");
        self.store.set_columns(columns);
        self.cards.update_order(&card_id, target_index as i64);

        DragOutcome::CardReordered {
            card: card_id,
            column: column_id,
            index: target_index,
        }
    }

    /// Cross-column move onto a specific card: insert at that card's index.
    fn move_between_columns(
        &self,
        mut columns: Vec<Column>,
        (source_column, source_index): (usize, usize),
        (target_column, target_index): (usize, usize),
    ) -> DragOutcome {
        let from = columns[source_column].id.clone();
        let to = columns[target_column].id.clone();

        let mut card = columns[source_column].cards.remove(source_index);
        resequence(&mut columns[source_column].cards);

        let card_id = card.id.clone();
        card.column_id = to.clone();
        card.order = Some(target_index as i64);
        columns[target_column].cards.insert(target_index, card);

        tracing::debug!(card = %card_id, %from, %to, index = target_index, "card moved");
        self.store.set_columns(columns);
        self.cards.mv(&card_id, &to, target_index as i64);

        DragOutcome::CardMoved {
            card: card_id,
            from,
            to,
            index: target_index,
        }
    }

    /// Drop on a column surface: append to the end of that column.
    fn append_to_column(
        &self,
        mut columns: Vec<Column>,
        (source_column, source_index): (usize, usize),
        target_column: usize,
    ) -> DragOutcome {
        let from = columns[source_column].id.clone();
        let to = columns[target_column].id.clone();

        let mut card = columns[source_column].cards.remove(source_index);
        resequence(&mut columns[source_column].cards);

        let card_id = card.id.clone();
        let end_index = columns[target_column].cards.len();
        card.column_id = to.clone();
        card.order = Some(end_index as i64);
        columns[target_column].cards.push(card);

        tracing::debug!(card = %card_id, %from, %to, index = end_index, "card appended to column");
        self.store.set_columns(columns);
        self.cards.mv(&card_id, &to, end_index as i64);

        DragOutcome::CardMoved {
            card: card_id,
            from,
            to,
            index: end_index,
        }
    }

    /// Column-over-column: single-element move, then resequence every
    /// column and push the full ordering in one bulk call.
    fn resolve_column_drag(&self, active_id: &str, over_id: &str) -> DragOutcome {
        let mut columns = self.store.columns();

        let old_index = crate::types::column_index(&columns, &ColumnId::from_string(active_id));
        let new_index = crate::types::column_index(&columns, &ColumnId::from_string(over_id));
        let (Some(old_index), Some(new_index)) = (old_index, new_index) else {
            tracing::debug!(active = active_id, over = over_id, "column drag ids not in state");
            return DragOutcome::Cancelled;
        };

        let column = columns.remove(old_index);
        columns.insert(new_index, column);
        for (index, column) in columns.iter_mut().enumerate() {
            column.order = Some(index as i64);
        }

        let order: Vec<ColumnId> = columns.iter().map(|c| c.id.clone()).collect();
        tracing::debug!(?order, "columns reordered");
        self.store.set_columns(columns);
        self.columns.reorder(order.clone());

        DragOutcome::ColumnsReordered { order }
    }
}

/// Re-assign sequential 0-based orders to a card list
fn resequence(cards: &mut [crate::types::Card]) {
    for (index, card) in cards.iter_mut().enumerate() {
        card.order = Some(index as i64);
    }
}
