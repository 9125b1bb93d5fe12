//! Chaintable: an in-memory string-to-string hash table
//!
//! Separate chaining over a growable bucket array. See `Table` for the
//! growth policy and `handle` for the nullable-handle API.

// Global type definitions
pub mod types;

pub mod config;
pub mod handle;
pub mod infrastructure;

// Re-export the table surface for easier access
pub use config::TableConfig;
pub use infrastructure::hash::HashKind;
pub use infrastructure::hash_table::{Insertion, Table, TableError, TableResult};
pub use infrastructure::shared::SharedTable;
