use std::hash::{BuildHasher, Hasher};

/// A hasher that sends every key to the same bucket. Used to check that nothing in the mapping
/// operations depends on keys being spread out, and that the hasher type survives a rebind.
#[derive(Debug)]
pub struct CollidingHasher;

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CollidingHasherBuilder;

impl BuildHasher for CollidingHasherBuilder {
    type Hasher = CollidingHasher;

    fn build_hasher(&self) -> Self::Hasher {
        CollidingHasher
    }
}
