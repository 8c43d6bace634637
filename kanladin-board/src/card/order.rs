//! Update a card's position within its column

use super::CardOperations;
use crate::types::CardId;

impl CardOperations {
    /// Issue the remote order update for a card.
    ///
    /// Same contract as [`CardOperations::mv`]: the caller already applied
    /// the local reorder, only the remote call remains.
    pub fn update_order(&self, card_id: &CardId, new_order: i64) {
        let remote = self.sync.remote();
        let id = card_id.clone();
        self.sync.submit("update card order", async move {
            remote.update_card_order(&id, new_order).await.map(|_| ())
        });
    }
}
