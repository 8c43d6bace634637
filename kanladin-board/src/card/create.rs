//! Create a card

use super::CardOperations;
use crate::defaults::DEFAULT_CARD_TITLE;
use crate::remote::CreateCard;
use crate::types::{Card, CardId, ColumnId};

impl CardOperations {
    /// Create a card at the end of the given column.
    ///
    /// The card appears immediately under a temporary id with order one past
    /// the column's current maximum (0 for an empty column); the remote
    /// create runs fire-and-forget and the next refetch swaps in the
    /// authoritative id. An unknown column is a no-op returning `None`.
    pub fn create(&self, column_id: &ColumnId) -> Option<CardId> {
        let mut columns = self.store.columns();
        let taken = self.store.known_ids();

        let column = match columns.iter_mut().find(|c| &c.id == column_id) {
            Some(column) => column,
            None => {
                tracing::debug!(column = %column_id, "create card: column not in local state");
                return None;
            }
        };

        let order = column.next_card_order();
        let id = CardId::temporary(&taken);
        let card = Card::new(id.clone(), DEFAULT_CARD_TITLE, column_id.clone()).with_order(order);
        column.cards.push(card);

        tracing::debug!(card = %id, column = %column_id, order, "card created optimistically");
        self.store.set_columns(columns);

        let remote = self.sync.remote();
        let input = CreateCard::new(DEFAULT_CARD_TITLE, column_id.clone()).with_order(order);
        self.sync.submit("create card", async move {
            remote.create_card(input).await.map(|_| ())
        });

        Some(id)
    }
}
