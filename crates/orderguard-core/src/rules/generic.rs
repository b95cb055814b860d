use std::collections::HashSet;

use arrow::array::Array;
use arrow_array::StringArray;
use xxhash_rust::xxh3::xxh3_64;

use crate::utils::hasher::Xxh3Builder;

/// Counts missing values in any array.
pub struct NullCheck;

impl NullCheck {
    pub fn validate(&self, array: &dyn Array) -> usize {
        array.null_count()
    }
}

/// Tracks distinct non-missing values across batches.
///
/// Values are stored as xxh3 hashes; the distinct count is the size of
/// the accumulated set.
pub struct UnicityCheck {
    seen: HashSet<u64, Xxh3Builder>,
}

impl Default for UnicityCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl UnicityCheck {
    pub fn new() -> Self {
        Self {
            seen: HashSet::with_hasher(Xxh3Builder),
        }
    }

    /// Record one batch of values. Missing values are ignored.
    pub fn scan(&mut self, array: &StringArray) {
        for value in array.iter().flatten() {
            self.seen.insert(xxh3_64(value.as_bytes()));
        }
    }

    /// Number of distinct non-missing values recorded so far.
    pub fn distinct(&self) -> usize {
        self.seen.len()
    }
}
