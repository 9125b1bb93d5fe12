//! Global type definitions
//!
//! Constants shared by the table, its configuration and the demo driver

/// Bucket count used when no capacity is requested
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Smallest bucket count a table may have
pub const MIN_CAPACITY: usize = 1;

/// Average chain length (integer division) that triggers a resize
pub const DEFAULT_MAX_LOAD_FACTOR: usize = 15;

/// Growth factor 5/2: capacity becomes floor(capacity * 2.5)
pub const DEFAULT_GROWTH_NUMERATOR: usize = 5;
pub const DEFAULT_GROWTH_DENOMINATOR: usize = 2;
