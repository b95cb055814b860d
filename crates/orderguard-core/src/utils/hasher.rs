use std::hash::BuildHasher;

use xxhash_rust::xxh3::Xxh3;

/// BuildHasher for sets keyed by pre-computed xxh3 hashes.
#[derive(Clone, Copy, Default)]
pub struct Xxh3Builder;

impl BuildHasher for Xxh3Builder {
    type Hasher = Xxh3;

    fn build_hasher(&self) -> Xxh3 {
        Xxh3::new()
    }
}
