//! Edit a column's title

use super::ColumnOperations;
use crate::remote::UpdateColumn;
use crate::types::ColumnId;

impl ColumnOperations {
    /// Replace a column's title in place.
    ///
    /// A column absent from local state is a no-op, matching the card
    /// operations' stale-reference policy.
    pub fn edit(&self, column_id: &ColumnId, title: &str) {
        let mut columns = self.store.columns();

        let Some(column) = columns.iter_mut().find(|c| &c.id == column_id) else {
            tracing::debug!(column = %column_id, "edit column: not in local state");
            return;
        };
        column.title = title.to_string();

        self.store.set_columns(columns);

        let remote = self.sync.remote();
        let input = UpdateColumn::new(column_id.clone()).with_title(title);
        self.sync.submit("update column", async move {
            remote.update_column(input).await.map(|_| ())
        });
    }
}
