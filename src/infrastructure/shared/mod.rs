// Shared table - a Table behind a parking_lot read-write lock
// The table itself does no locking; this wrapper is the external
// synchronization callers need before sharing one across threads.

use crate::config::TableConfig;
use crate::infrastructure::hash_table::{Insertion, Table, TableResult};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A `Table` that can be shared between threads
///
/// Lookups take the read lock; insert and remove take the write lock, so a
/// resize never overlaps any other access.
pub struct SharedTable {
    inner: RwLock<Table>,
}

impl SharedTable {
    /// Wrap an existing table
    pub fn new(table: Table) -> Self {
        SharedTable {
            inner: RwLock::new(table),
        }
    }

    /// Create a shared table with the given bucket count
    pub fn create(initial_capacity: usize) -> TableResult<Self> {
        Ok(Self::new(Table::create(initial_capacity)?))
    }

    /// Create a shared table from a configuration
    pub fn with_config(config: TableConfig) -> TableResult<Self> {
        Ok(Self::new(Table::with_config(config)?))
    }

    pub fn insert(&self, key: &str, value: &str) -> TableResult<Insertion> {
        self.inner.write().insert(key, value)
    }

    /// Look up `key`, copying the value out so the lock is not held
    pub fn fetch(&self, key: &str) -> Option<String> {
        self.inner.read().fetch(key).map(str::to_owned)
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.inner.write().remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    /// Acquires a read lock for a batch of lookups
    pub fn read(&self) -> RwLockReadGuard<'_, Table> {
        self.inner.read()
    }

    /// Acquires a write lock for a batch of updates
    pub fn write(&self) -> RwLockWriteGuard<'_, Table> {
        self.inner.write()
    }

    /// Unwrap the table, releasing the lock
    pub fn into_inner(self) -> Table {
        self.inner.into_inner()
    }
}
