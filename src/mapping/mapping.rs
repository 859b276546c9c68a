use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// An associative collection with unique keys.
///
/// The trait only asks for what the mapping operations need: borrowed iteration over entries, a
/// length, and a way to build a new mapping of the same kind from owned entries. [`Rebind`]
/// names "this kind of mapping, but holding `R` values", which is what lets
/// [`map_mapping`](super::map_mapping) return a `HashMap` for a `HashMap` (keeping its hasher) and a
/// `BTreeMap` for a `BTreeMap`.
///
/// [`Rebind`]: Mapping::Rebind
pub trait Mapping: Sized {
    type Key;
    type Value;

    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)> where Self: 'a;

    type Rebind<R>: Mapping<Key = Self::Key, Value = R>;

    /// Returns an iterator over all entries, as references. The order is unspecified.
    fn iter(&self) -> Self::Iter<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds a mapping from owned entries. A later entry with an existing key replaces the earlier
    /// one.
    fn from_entries<I: IntoIterator<Item = (Self::Key, Self::Value)>>(entries: I) -> Self;
}

impl<K: Eq + Hash, V, S: BuildHasher + Default> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    type Iter<'a> = hash_map::Iter<'a, K, V> where Self: 'a;

    type Rebind<R> = HashMap<K, R, S>;

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn from_entries<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    type Iter<'a> = btree_map::Iter<'a, K, V> where Self: 'a;

    type Rebind<R> = BTreeMap<K, R>;

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn from_entries<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        entries.into_iter().collect()
    }
}
