// Hash functions for string keys

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh64::xxh64;

/// Shift applied to the first byte of a key by `positional_hash`
const POSITIONAL_SHIFT_START: u32 = 2;

/// Amount the shift advances by for every following byte
const POSITIONAL_SHIFT_STEP: u32 = 3;

/// Positional shift-and-add hash
///
/// Walks the key byte by byte, rotating each byte left by a running shift
/// (starting at 2, advancing by 3) and summing the results. The accumulator
/// is a `u64` with wrapping addition, and shifts wrap modulo 64, so the
/// result is defined for keys of any length. For short ASCII keys the sum
/// is identical to a plain `byte << shift` accumulation.
///
/// This is not collision resistant: keys that are permutations of each
/// other collide more often than a uniform hash would predict.
pub fn positional_hash(s: &str) -> u64 {
    let mut sum: u64 = 0;
    let mut shift = POSITIONAL_SHIFT_START;

    for byte in s.as_bytes() {
        sum = sum.wrapping_add((*byte as u64).rotate_left(shift));
        shift = shift.wrapping_add(POSITIONAL_SHIFT_STEP);
    }

    sum
}

/// FNV-1a hash implementation for strings
/// Returns a 64-bit integer hash value
pub fn fnv1a_hash(s: &str) -> u64 {
    const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
    const FNV_PRIME: u64 = 1099511628211;

    s.as_bytes().iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ *byte as u64).wrapping_mul(FNV_PRIME)
    })
}

/// XXH64 with a zero seed
pub fn xxh64_hash(s: &str) -> u64 {
    xxh64(s.as_bytes(), 0)
}

/// CRC32 checksum widened to 64 bits
pub fn crc32_hash(s: &str) -> u64 {
    crc32fast::hash(s.as_bytes()) as u64
}

/// Selects the hash function a table distributes its keys with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashKind {
    /// Shift-and-add hash, see `positional_hash`
    #[default]
    Positional,
    Fnv1a,
    Xxh64,
    Crc32,
}

impl HashKind {
    /// Hash a key with the selected function
    pub fn hash(self, key: &str) -> u64 {
        match self {
            HashKind::Positional => positional_hash(key),
            HashKind::Fnv1a => fnv1a_hash(key),
            HashKind::Xxh64 => xxh64_hash(key),
            HashKind::Crc32 => crc32_hash(key),
        }
    }
}

/// Map a key to a bucket in `[0, capacity)`
///
/// `capacity` must be at least 1.
pub fn bucket_index(kind: HashKind, key: &str, capacity: usize) -> usize {
    debug_assert!(capacity >= 1);
    (kind.hash(key) % capacity as u64) as usize
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
