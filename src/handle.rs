//! Handle-based table API
//!
//! Free functions over a possibly-absent table, for callers that keep the
//! table behind an `Option` (a table that failed to construct, or one that
//! has already been destroyed). Operating on an absent table is reported
//! as `InvalidTable` by `insert`, yields `None` from `fetch`, and is a
//! no-op for `remove` and `destroy`.

use crate::infrastructure::hash_table::{Table, TableError, TableResult};
use log::warn;

/// Create a table, returning `None` if the bucket array cannot be allocated
pub fn create(initial_capacity: usize) -> Option<Box<Table>> {
    match Table::create(initial_capacity) {
        Ok(table) => Some(Box::new(table)),
        Err(err) => {
            warn!("failed to create table with capacity {}: {}", initial_capacity, err);
            None
        }
    }
}

/// Insert or overwrite a key-value pair
pub fn insert(table: Option<&mut Table>, key: &str, value: &str) -> TableResult<()> {
    let table = table.ok_or(TableError::InvalidTable)?;
    table.insert(key, value)?;
    Ok(())
}

/// Look up the value stored for `key`
pub fn fetch<'a>(table: Option<&'a Table>, key: &str) -> Option<&'a str> {
    table?.fetch(key)
}

/// Remove `key` if present
pub fn remove(table: Option<&mut Table>, key: &str) {
    if let Some(table) = table {
        table.remove(key);
    }
}

/// Release the table and everything it owns
///
/// Takes the handle by value so it cannot be used afterwards.
pub fn destroy(table: Option<Box<Table>>) {
    if let Some(table) = table {
        table.destroy();
    }
}
