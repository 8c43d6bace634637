//! Delete a card

use super::CardOperations;
use crate::types::{locate_card, CardId};

impl CardOperations {
    /// Remove a card from whichever column contains it.
    ///
    /// A card absent from local state is a no-op (double-click races on a
    /// delete button land here).
    pub fn delete(&self, card_id: &CardId) {
        let mut columns = self.store.columns();

        let Some((column_index, card_index)) = locate_card(&columns, card_id) else {
            tracing::debug!(card = %card_id, "delete card: not in local state");
            return;
        };
        columns[column_index].cards.remove(card_index);

        tracing::debug!(card = %card_id, "card deleted optimistically");
        self.store.set_columns(columns);

        let remote = self.sync.remote();
        let id = card_id.clone();
        self.sync.submit("delete card", async move {
            remote.delete_card(&id).await.map(|_| ())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixture::{seeded_board, stack};
    use crate::remote::RemoteCall;

    #[tokio::test]
    async fn test_delete_removes_card() {
        let (remote, store, ops) = stack(seeded_board());

        ops.delete(&"card-1".into());

        let columns = store.columns();
        assert!(columns[0].find_card(&"card-1".into()).is_none());
        assert_eq!(columns[0].cards.len(), 1);

        ops.sync.flush().await;
        assert_eq!(
            remote.take_calls(),
            vec![RemoteCall::DeleteCard { id: "card-1".into() }]
        );
    }

    #[tokio::test]
    async fn test_delete_missing_card_is_noop() {
        let (remote, store, ops) = stack(seeded_board());
        let before = store.columns();

        ops.delete(&"missing".into());

        ops.sync.flush().await;
        assert_eq!(store.columns(), before);
        assert!(remote.calls().is_empty());
    }
}
