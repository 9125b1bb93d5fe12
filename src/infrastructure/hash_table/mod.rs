// String-to-string hash table with separate chaining

use crate::config::TableConfig;
use crate::infrastructure::hash::bucket_index;
use crate::types::MIN_CAPACITY;
use log::{debug, trace, warn};
use std::alloc::{self, Layout};
use std::fmt;
use std::mem;

pub mod error;
pub use error::{TableError, TableResult};

/// Owning link to the next entry of a chain
type Link = Option<Box<Entry>>;

/// Chain node: one key-value pair
struct Entry {
    key: String,
    value: String,
    next: Link,
}

/// Outcome of a successful insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The key was new; the entry count grew by one
    Inserted,
    /// The key existed; its value was overwritten in place
    Replaced,
}

/// Hash table mapping string keys to string values
///
/// Each bucket holds the head of a singly linked chain. New entries are
/// linked at the head of their chain. Before every insert the table grows
/// if `len() / capacity()` has reached the configured maximum load factor;
/// growth relinks the existing nodes into the new bucket array without
/// copying keys or values. Capacity never shrinks.
///
/// Keys are compared by content. The table does no internal locking: any
/// sharing across threads needs an external lock such as `SharedTable`.
pub struct Table {
    /// Bucket heads; the length is the table's capacity
    buckets: Vec<Link>,
    /// Number of live key-value pairs across all chains
    entries: usize,
    config: TableConfig,
}

impl Table {
    /// Create a table with the default policy and the given bucket count
    ///
    /// A capacity of 0 is clamped to 1.
    pub fn create(initial_capacity: usize) -> TableResult<Self> {
        Self::with_config(TableConfig::with_capacity(initial_capacity))
    }

    /// Create a table from a validated configuration
    pub fn with_config(config: TableConfig) -> TableResult<Self> {
        config.validate()?;
        let capacity = config.initial_capacity.max(MIN_CAPACITY);
        let buckets = allocate_buckets(capacity)?;
        debug!(
            "created table: capacity={} max_load_factor={} hash={:?}",
            capacity, config.max_load_factor, config.hash
        );

        Ok(Table {
            buckets,
            entries: 0,
            config,
        })
    }

    /// Insert a key-value pair, overwriting the value of an existing key
    ///
    /// Grows the table first when the load factor has reached its limit.
    /// If that growth cannot allocate, the insert fails with `OutOfMemory`
    /// and the table is left exactly as it was.
    pub fn insert(&mut self, key: &str, value: &str) -> TableResult<Insertion> {
        if self.load_factor() >= self.config.max_load_factor {
            if let Err(err) = self.resize() {
                warn!(
                    "resize failed at capacity {} with {} entries: {}",
                    self.capacity(),
                    self.entries,
                    err
                );
                return Err(err);
            }
        }

        let index = self.index_of(key);

        let mut current = self.buckets[index].as_deref_mut();
        while let Some(entry) = current {
            if entry.key == key {
                entry.value = try_copy(value)?;
                trace!("replaced value for key {:?} in bucket {}", key, index);
                return Ok(Insertion::Replaced);
            }
            current = entry.next.as_deref_mut();
        }

        let mut entry = try_alloc_entry(Entry {
            key: try_copy(key)?,
            value: try_copy(value)?,
            next: None,
        })?;
        entry.next = self.buckets[index].take();
        self.buckets[index] = Some(entry);
        self.entries += 1;
        trace!("inserted key {:?} into bucket {}", key, index);

        Ok(Insertion::Inserted)
    }

    /// Look up the value stored for `key`
    pub fn fetch(&self, key: &str) -> Option<&str> {
        let mut current = self.buckets[self.index_of(key)].as_deref();
        while let Some(entry) = current {
            if entry.key == key {
                return Some(&entry.value);
            }
            current = entry.next.as_deref();
        }
        None
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.fetch(key).is_some()
    }

    /// Remove `key`, returning its value
    ///
    /// Removing an absent key is a no-op and returns `None`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.index_of(key);

        let mut cursor = &mut self.buckets[index];
        loop {
            match cursor {
                None => return None,
                Some(entry) if entry.key == key => break,
                Some(entry) => cursor = &mut entry.next,
            }
        }

        // cursor now holds the matching entry; splice it out
        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.entries -= 1;
        trace!("removed key {:?} from bucket {}", key, index);

        Some(mem::take(&mut removed.value))
    }

    /// Release every entry and the bucket array
    pub fn destroy(self) {
        debug!(
            "destroying table: capacity={} entries={}",
            self.capacity(),
            self.entries
        );
        drop(self);
    }

    /// Number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of key-value pairs
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Average chain length, rounded down
    pub fn load_factor(&self) -> usize {
        self.entries / self.capacity()
    }

    /// Configuration the table was created with
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    fn index_of(&self, key: &str) -> usize {
        bucket_index(self.config.hash, key, self.capacity())
    }

    /// Grow the bucket array and relink every entry into it
    ///
    /// The new array is allocated before anything is touched, so a failed
    /// allocation leaves the table unchanged.
    fn resize(&mut self) -> TableResult<()> {
        let old_capacity = self.capacity();
        let new_capacity = self
            .config
            .grown_capacity(old_capacity)
            .ok_or(TableError::OutOfMemory)?;
        let mut new_buckets = allocate_buckets(new_capacity)?;
        let hash = self.config.hash;

        for bucket in self.buckets.iter_mut() {
            let mut chain = bucket.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                let index = bucket_index(hash, &entry.key, new_capacity);
                entry.next = new_buckets[index].take();
                new_buckets[index] = Some(entry);
            }
        }

        self.buckets = new_buckets;
        debug!(
            "resized table: capacity {} -> {}, entries={}",
            old_capacity, new_capacity, self.entries
        );
        Ok(())
    }
}

/// Implement Drop to release chains without recursing once per node
impl Drop for Table {
    fn drop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            let mut chain = bucket.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
            }
        }
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("capacity", &self.capacity())
            .field("entries", &self.entries)
            .field("hash", &self.config.hash)
            .finish()
    }
}

/// Allocate `capacity` empty buckets, reporting allocation failure
fn allocate_buckets(capacity: usize) -> TableResult<Vec<Link>> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(capacity)?;
    buckets.resize_with(capacity, || None);
    Ok(buckets)
}

/// Copy a string, reporting allocation failure
fn try_copy(s: &str) -> TableResult<String> {
    let mut owned = String::new();
    owned.try_reserve_exact(s.len())?;
    owned.push_str(s);
    Ok(owned)
}

/// Box an entry, reporting allocation failure
fn try_alloc_entry(entry: Entry) -> TableResult<Box<Entry>> {
    let layout = Layout::new::<Entry>();
    unsafe {
        // Entry is not zero-sized, so the global allocator may be called directly
        let ptr = alloc::alloc(layout) as *mut Entry;
        if ptr.is_null() {
            return Err(TableError::OutOfMemory);
        }
        ptr.write(entry);
        Ok(Box::from_raw(ptr))
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
