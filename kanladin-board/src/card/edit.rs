//! Edit a card's title and description

use super::CardOperations;
use crate::remote::UpdateCard;
use crate::types::CardId;

impl CardOperations {
    /// Replace a card's title and description in place.
    ///
    /// The card is located by its first match across all columns (ids are
    /// globally unique). A card absent from local state is a no-op: stale
    /// references must not crash or emit a mutation.
    pub fn edit(&self, card_id: &CardId, title: &str, description: &str) {
        let mut columns = self.store.columns();

        let mut found = false;
        'search: for column in &mut columns {
            for card in &mut column.cards {
                if &card.id == card_id {
                    card.title = title.to_string();
                    card.description = description.to_string();
                    found = true;
                    break 'search;
                }
            }
        }

        if !found {
            tracing::debug!(card = %card_id, "edit card: not in local state");
            return;
        }

        self.store.set_columns(columns);

        let remote = self.sync.remote();
        let input = UpdateCard::new(card_id.clone())
            .with_title(title)
            .with_description(description);
        self.sync.submit("update card", async move {
            remote.update_card(input).await.map(|_| ())
        });
    }
}
