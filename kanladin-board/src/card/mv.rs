//! Move a card between columns

use super::CardOperations;
use crate::types::{CardId, ColumnId};

impl CardOperations {
    /// Issue the remote move mutation for a card.
    ///
    /// The drag resolver has already applied the local state change; this
    /// operation's sole responsibility is the remote call with its explicit
    /// target column and position.
    pub fn mv(&self, card_id: &CardId, target_column_id: &ColumnId, new_order: i64) {
        let remote = self.sync.remote();
        let id = card_id.clone();
        let target = target_column_id.clone();
        self.sync.submit("move card", async move {
            remote.move_card(&id, &target, Some(new_order)).await.map(|_| ())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixture::{seeded_board, stack};
    use crate::remote::RemoteCall;

    #[tokio::test]
    async fn test_mv_issues_remote_call_only() {
        let (remote, store, ops) = stack(seeded_board());
        let before = store.columns();

        ops.mv(&"card-1".into(), &"done".into(), 0);

        // No local change until the post-mutation refetch lands
        assert_eq!(store.columns(), before);

        ops.sync.flush().await;
        assert_eq!(
            remote.take_calls(),
            vec![RemoteCall::MoveCard {
                id: "card-1".into(),
                column_id: "done".into(),
                order: Some(0),
            }]
        );
        // The refetch then reflects the server-side move
        let columns = store.columns();
        assert!(columns[1].find_card(&"card-1".into()).is_some());
    }
}
