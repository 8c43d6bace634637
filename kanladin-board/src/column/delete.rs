//! Delete a column

use super::ColumnOperations;
use crate::types::ColumnId;

impl ColumnOperations {
    /// Remove a column, and implicitly its cards, from local state.
    ///
    /// Exactly one remote delete is issued for the column itself; the
    /// remote store's cascade semantics take care of the contained cards.
    /// A column absent from local state is a no-op.
    pub fn delete(&self, column_id: &ColumnId) {
        let mut columns = self.store.columns();

        let before = columns.len();
        columns.retain(|c| &c.id != column_id);
        if columns.len() == before {
            tracing::debug!(column = %column_id, "delete column: not in local state");
            return;
        }

        tracing::debug!(column = %column_id, "column deleted optimistically");
        self.store.set_columns(columns);

        let remote = self.sync.remote();
        let id = column_id.clone();
        self.sync.submit("delete column", async move {
            remote.delete_column(&id).await.map(|_| ())
        });
    }
}
