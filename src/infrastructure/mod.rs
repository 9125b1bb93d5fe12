//! Table internals: hashing, the chained table, its lock wrapper and logging

pub mod hash;
pub mod hash_table;
pub mod logger;
pub mod shared;
