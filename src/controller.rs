//! List controller.
//!
//! Holds the ordered in-memory rows and mediates between user events and
//! the [`Store`]. `reload()` is the only place rows are rebuilt from
//! storage, and it runs after every successful mutation. Rows are never
//! patched incrementally.

use crate::error::{ALERT_TITLE, Error, Result};
use crate::model::Row;
use crate::storage::Store;
use crate::ui::{AlertSink, Event};
use tracing::{debug, warn};

/// In-memory view of the to-do list backed by an injected store.
#[derive(Debug)]
pub struct ListController<S: Store> {
    store: S,
    rows: Vec<Row>,
}

impl<S: Store> ListController<S> {
    /// Wrap `store` without reading from it yet.
    pub fn new(store: S) -> Self {
        Self {
            store,
            rows: Vec::new(),
        }
    }

    /// Wrap `store` and load the initial list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageRead`] if the startup read fails.
    pub fn open(store: S) -> Result<Self> {
        let mut controller = Self::new(store);
        controller.reload()?;
        Ok(controller)
    }

    /// Current row snapshot, in storage order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Add a new item and reload.
    ///
    /// Text that is empty or only whitespace is rejected without touching
    /// storage. Accepted text is stored as typed.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyText`] for blank input
    /// - [`Error::StorageWrite`] if the insert fails (rows unchanged)
    /// - [`Error::StorageRead`] if the follow-up reload fails (the item was
    ///   stored, rows keep their previous state)
    pub fn submit_text(&mut self, text: &str) -> Result<i64> {
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }

        let id = self.store.insert(text)?;
        debug!(id, "Submitted item");
        self.reload()?;
        Ok(id)
    }

    /// Replace the rows with a fresh read of the store.
    ///
    /// Every row comes back unchecked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageRead`] if the read fails. The previous rows
    /// are kept in that case.
    pub fn reload(&mut self) -> Result<()> {
        let items = self.store.list_all()?;
        self.rows = items.into_iter().map(Row::from).collect();
        debug!(count = self.rows.len(), "Reloaded list");
        Ok(())
    }

    /// Delete the item shown at `index` and reload.
    ///
    /// Returns the deleted item's id.
    ///
    /// # Errors
    ///
    /// - [`Error::RowOutOfRange`] if `index` is not in the current snapshot;
    ///   the store is not called
    /// - [`Error::StorageWrite`] if the delete fails (rows unchanged)
    /// - [`Error::StorageRead`] if the follow-up reload fails
    pub fn delete_row(&mut self, index: usize) -> Result<i64> {
        let id = self.row(index)?.id;
        self.store.delete(id)?;
        debug!(id, index, "Deleted row");
        self.reload()?;
        Ok(id)
    }

    /// Delete the item with `id` and reload.
    ///
    /// Unlike [`delete_row`](Self::delete_row) the id need not be in the
    /// current snapshot. Unknown ids are a no-op at the store. Returns
    /// whether a stored row was removed.
    ///
    /// # Errors
    ///
    /// - [`Error::StorageWrite`] if the delete fails (rows unchanged)
    /// - [`Error::StorageRead`] if the follow-up reload fails
    pub fn delete_item(&mut self, id: i64) -> Result<bool> {
        let removed = self.store.delete(id)?;
        debug!(id, removed, "Deleted item");
        self.reload()?;
        Ok(removed)
    }

    /// Flip the checkmark on the row at `index` and return its new state.
    ///
    /// Only this row changes. Storage is not touched and no reload happens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowOutOfRange`] if `index` is not in the snapshot.
    pub fn toggle_row(&mut self, index: usize) -> Result<bool> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .map(Row::toggle)
            .ok_or(Error::RowOutOfRange { index, len })
    }

    /// Dispatch a presentation event.
    ///
    /// Failures are shown on `alerts` and leave the rows as they were.
    /// Returns whether the event succeeded.
    pub fn handle(&mut self, event: Event, alerts: &mut dyn AlertSink) -> bool {
        let result = match event {
            Event::Submit(text) => self.submit_text(&text).map(drop),
            Event::Delete(index) => self.delete_row(index).map(drop),
            Event::Toggle(index) => self.toggle_row(index).map(drop),
            Event::Reload => self.reload(),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Event failed");
                alerts.show_error(ALERT_TITLE, &e.alert_message());
                false
            }
        }
    }

    fn row(&self, index: usize) -> Result<&Row> {
        self.rows.get(index).ok_or(Error::RowOutOfRange {
            index,
            len: self.rows.len(),
        })
    }
}
