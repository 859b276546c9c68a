use std::iter;

use super::Mapping;

/// Applies `f` to every entry, producing a mapping of the same kind with the same keys and the
/// transformed values.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use collection_utils::mapping::map_mapping;
/// let ages = HashMap::from([("amy", 30), ("bob", 40)]);
/// let labels = map_mapping(&ages, |name, age| format!("{name}:{age}"));
/// assert_eq!(labels["amy"], "amy:30");
/// assert_eq!(labels.len(), 2);
/// ```
pub fn map_mapping<M, R, F>(map: &M, f: F) -> M::Rebind<R>
where
    M: Mapping,
    M::Key: Clone,
    F: FnMut(&M::Key, &M::Value) -> R,
{
    map_mapping_opt(Some(map), f)
}

/// Like [`map_mapping`], but for a mapping that may be absent. An absent mapping gives an empty
/// mapping rather than an error.
///
/// # Examples
/// ```
/// # use std::collections::BTreeMap;
/// # use collection_utils::mapping::map_mapping_opt;
/// let absent: Option<&BTreeMap<u8, u8>> = None;
/// assert!(map_mapping_opt(absent, |_, v| *v as u32).is_empty());
/// ```
pub fn map_mapping_opt<M, R, F>(map: Option<&M>, mut f: F) -> M::Rebind<R>
where
    M: Mapping,
    M::Key: Clone,
    F: FnMut(&M::Key, &M::Value) -> R,
{
    match map {
        Some(map) => {
            <M::Rebind<R>>::from_entries(map.iter().map(|(k, v)| (k.clone(), f(k, v))))
        }
        None => <M::Rebind<R>>::from_entries(iter::empty()),
    }
}

/// Returns a new mapping of the same kind holding clones of the entries for which `predicate`
/// returns true.
pub fn filter_mapping<M, F>(map: &M, mut predicate: F) -> M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
    F: FnMut(&M::Key, &M::Value) -> bool,
{
    M::from_entries(
        map.iter()
            .filter(|(k, v)| predicate(k, v))
            .map(|(k, v)| (k.clone(), v.clone())),
    )
}

/// Folds every entry into a single value, starting from `initial`. The order entries are visited
/// in is unspecified, so `f` should not depend on it.
pub fn reduce_mapping<M, R, F>(map: &M, mut f: F, initial: R) -> R
where
    M: Mapping,
    F: FnMut(R, &M::Key, &M::Value) -> R,
{
    map.iter().fold(initial, |acc, (k, v)| f(acc, k, v))
}

/// Calls `f` once for every entry, in an unspecified order.
pub fn each_mapping<M, F>(map: &M, mut f: F)
where
    M: Mapping,
    F: FnMut(&M::Key, &M::Value),
{
    map.iter().for_each(|(k, v)| f(k, v));
}

/// Returns true if `predicate` holds for every entry. Vacuously true for an empty mapping.
pub fn every_mapping<M, F>(map: &M, mut predicate: F) -> bool
where
    M: Mapping,
    F: FnMut(&M::Key, &M::Value) -> bool,
{
    map.iter().all(|(k, v)| predicate(k, v))
}

/// Returns true if `predicate` holds for at least one entry. Always false for an empty mapping.
pub fn some_mapping<M, F>(map: &M, mut predicate: F) -> bool
where
    M: Mapping,
    F: FnMut(&M::Key, &M::Value) -> bool,
{
    map.iter().any(|(k, v)| predicate(k, v))
}

/// Returns some entry for which `predicate` holds, or [`None`]. If several entries match, which
/// one is returned is unspecified.
pub fn find_mapping_entry<M, F>(map: &M, mut predicate: F) -> Option<(&M::Key, &M::Value)>
where
    M: Mapping,
    F: FnMut(&M::Key, &M::Value) -> bool,
{
    map.iter().find(|(k, v)| predicate(k, v))
}

/// Sentinel-returning form of [`find_mapping_entry`]: gives clones of a matching entry, or
/// `(K::default(), V::default())` if nothing matches.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use collection_utils::mapping::find_mapping;
/// let scores = HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
/// assert_eq!(find_mapping(&scores, |_, v| *v == 2), ("b".to_string(), 2));
/// assert_eq!(find_mapping(&scores, |_, v| *v > 5), (String::new(), 0));
/// ```
pub fn find_mapping<M, F>(map: &M, predicate: F) -> (M::Key, M::Value)
where
    M: Mapping,
    M::Key: Default + Clone,
    M::Value: Default + Clone,
    F: FnMut(&M::Key, &M::Value) -> bool,
{
    match find_mapping_entry(map, predicate) {
        Some((k, v)) => (k.clone(), v.clone()),
        None => Default::default(),
    }
}
