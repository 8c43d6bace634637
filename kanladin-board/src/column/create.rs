//! Create a column

use super::ColumnOperations;
use crate::defaults::DEFAULT_COLUMN_TITLE;
use crate::remote::CreateColumn;
use crate::types::{Column, ColumnId};

impl ColumnOperations {
    /// Append an empty column to the board.
    ///
    /// No-op returning `None` until the board id is known (the initial
    /// fetch has not landed yet). The column appears immediately under a
    /// temporary id with order one past the current maximum.
    pub fn create(&self) -> Option<ColumnId> {
        let Some(board_id) = self.store.board_id() else {
            tracing::debug!("create column: board id not known yet");
            return None;
        };

        let mut columns = self.store.columns();
        let taken = self.store.known_ids();

        let order = columns.iter().map(|c| c.order.unwrap_or(0)).fold(-1, i64::max) + 1;
        let id = ColumnId::temporary(&taken);
        columns.push(Column::new(id.clone(), DEFAULT_COLUMN_TITLE).with_order(order));

        tracing::debug!(column = %id, order, "column created optimistically");
        self.store.set_columns(columns);

        let remote = self.sync.remote();
        let input = CreateColumn::new(DEFAULT_COLUMN_TITLE, board_id).with_order(order);
        self.sync.submit("create column", async move {
            remote.create_column(input).await.map(|_| ())
        });

        Some(id)
    }
}
