//! Reorder the board's columns

use super::ColumnOperations;
use crate::types::ColumnId;

impl ColumnOperations {
    /// Issue the bulk reorder mutation with the full post-drag id sequence.
    ///
    /// The drag resolver has already applied the local reorder; a single
    /// remote call carries the complete ordering.
    pub fn reorder(&self, column_ids: Vec<ColumnId>) {
        let remote = self.sync.remote();
        self.sync.submit("reorder columns", async move {
            remote.reorder_columns(&column_ids).await.map(|_| ())
        });
    }
}
