//! Table configuration
//!
//! Sizing, growth policy and hash selection for a `Table`, loadable from
//! JSON. Every field has a default, so `{}` is a valid configuration.

use crate::infrastructure::hash::HashKind;
use crate::infrastructure::hash_table::{TableError, TableResult};
use crate::types::{
    DEFAULT_GROWTH_DENOMINATOR, DEFAULT_GROWTH_NUMERATOR, DEFAULT_INITIAL_CAPACITY,
    DEFAULT_MAX_LOAD_FACTOR,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Configuration for a `Table`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Requested bucket count; clamped to at least 1
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Resize before an insert once `entries / capacity` reaches this value
    #[serde(default = "default_max_load_factor")]
    pub max_load_factor: usize,

    /// New capacity is `old * growth_numerator / growth_denominator`
    #[serde(default = "default_growth_numerator")]
    pub growth_numerator: usize,

    #[serde(default = "default_growth_denominator")]
    pub growth_denominator: usize,

    /// Hash function used to pick buckets
    #[serde(default)]
    pub hash: HashKind,
}

fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

fn default_max_load_factor() -> usize {
    DEFAULT_MAX_LOAD_FACTOR
}

fn default_growth_numerator() -> usize {
    DEFAULT_GROWTH_NUMERATOR
}

fn default_growth_denominator() -> usize {
    DEFAULT_GROWTH_DENOMINATOR
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            growth_numerator: DEFAULT_GROWTH_NUMERATOR,
            growth_denominator: DEFAULT_GROWTH_DENOMINATOR,
            hash: HashKind::default(),
        }
    }
}

impl TableConfig {
    /// Default configuration with the given initial capacity
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    /// Replace the hash function
    pub fn hash(mut self, hash: HashKind) -> Self {
        self.hash = hash;
        self
    }

    /// Check that the growth policy always makes progress
    pub fn validate(&self) -> TableResult<()> {
        if self.max_load_factor == 0 {
            return Err(TableError::InvalidConfig(
                "max_load_factor must be at least 1".to_string(),
            ));
        }
        if self.growth_denominator == 0 {
            return Err(TableError::InvalidConfig(
                "growth_denominator must be non-zero".to_string(),
            ));
        }
        if self.growth_numerator <= self.growth_denominator {
            return Err(TableError::InvalidConfig(format!(
                "growth factor {}/{} does not grow the table",
                self.growth_numerator, self.growth_denominator
            )));
        }
        Ok(())
    }

    /// Capacity after one growth step, or `None` if it would overflow
    ///
    /// Always strictly greater than `old`.
    pub fn grown_capacity(&self, old: usize) -> Option<usize> {
        let scaled = old.checked_mul(self.growth_numerator)? / self.growth_denominator;
        Some(scaled.max(old.checked_add(1)?))
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> TableResult<Self> {
        let file = File::open(path.as_ref())?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> TableResult<()> {
        let file = File::create(path.as_ref())?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> TableResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> TableResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
