/// Applies `f` to every element, producing a new [`Vec`] of the same length where `out[i]` is
/// `f(&items[i])`.
///
/// # Examples
/// ```
/// # use collection_utils::seq::map;
/// let doubled = map(&[1, 2, 3], |x| x * 2);
/// assert_eq!(doubled, [2, 4, 6]);
///
/// let empty: Vec<String> = map(&[] as &[i32], |x| x.to_string());
/// assert!(empty.is_empty());
/// ```
pub fn map<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    items.iter().map(f).collect()
}

/// Returns a new [`Vec`] holding clones of the elements for which `predicate` returns true, in
/// their original relative order.
///
/// # Examples
/// ```
/// # use collection_utils::seq::filter;
/// let evens = filter(&[1, 2, 3, 4, 5], |x| x % 2 == 0);
/// assert_eq!(evens, [2, 4]);
/// ```
pub fn filter<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Consumes an owned collection and rebuilds the same kind of collection from the items for which
/// `predicate` returns true.
///
/// This works for anything that can be both iterated by value and collected back into itself, so
/// a [`VecDeque`](std::collections::VecDeque) comes back as a `VecDeque` and a
/// [`HashMap`](std::collections::HashMap) as a `HashMap` (with items as `(key, value)` pairs).
///
/// # Examples
/// ```
/// # use std::collections::VecDeque;
/// # use collection_utils::seq::retain_into;
/// let words = VecDeque::from(["foo", "", "bar"]);
/// let kept: VecDeque<_> = retain_into(words, |s| !s.is_empty());
/// assert_eq!(kept, ["foo", "bar"]);
/// ```
pub fn retain_into<C, F>(items: C, predicate: F) -> C
where
    C: IntoIterator + FromIterator<<C as IntoIterator>::Item>,
    F: FnMut(&<C as IntoIterator>::Item) -> bool,
{
    items.into_iter().filter(predicate).collect()
}

/// Left-folds the sequence into a single value, starting from `initial`. An empty sequence gives
/// back `initial` unchanged.
///
/// # Examples
/// ```
/// # use collection_utils::seq::reduce;
/// assert_eq!(reduce(&[1, 2, 3, 4, 5], |acc, x| acc + x, 0), 15);
/// assert_eq!(reduce(&["a", "b"], |acc, s| acc + *s, String::new()), "ab");
/// ```
pub fn reduce<T, R, F>(items: &[T], f: F, initial: R) -> R
where
    F: FnMut(R, &T) -> R,
{
    items.iter().fold(initial, f)
}

/// Calls `f` once for every element, left to right.
pub fn each<T, F>(items: &[T], f: F)
where
    F: FnMut(&T),
{
    items.iter().for_each(f);
}

/// Calls `f` once for every element, right to left.
///
/// # Examples
/// ```
/// # use collection_utils::seq::each_right;
/// let mut seen = Vec::new();
/// each_right(&[1, 2, 3], |x| seen.push(*x));
/// assert_eq!(seen, [3, 2, 1]);
/// ```
pub fn each_right<T, F>(items: &[T], f: F)
where
    F: FnMut(&T),
{
    items.iter().rev().for_each(f);
}

/// Returns true if `predicate` holds for every element. Stops at the first element that fails.
/// Vacuously true for an empty sequence.
pub fn every<T, F>(items: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().all(predicate)
}

/// Returns true if `predicate` holds for at least one element. Stops at the first element that
/// matches. Always false for an empty sequence.
pub fn some<T, F>(items: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().any(predicate)
}

/// Returns the lowest index whose element satisfies `predicate`, along with a reference to that
/// element, or [`None`] if nothing matches.
///
/// # Examples
/// ```
/// # use collection_utils::seq::find_entry;
/// assert_eq!(find_entry(&[1, 2, 3, 4, 5], |x| *x > 3), Some((3, &4)));
/// assert_eq!(find_entry(&[1, 2, 3], |x| *x > 10), None);
/// ```
pub fn find_entry<T, F>(items: &[T], mut predicate: F) -> Option<(usize, &T)>
where
    F: FnMut(&T) -> bool,
{
    items.iter().enumerate().find(|(_, item)| predicate(item))
}

/// Sentinel-returning form of [`find_entry`]: gives `(index, element)` for the first match, or
/// `(-1, T::default())` if nothing matches.
///
/// # Examples
/// ```
/// # use collection_utils::seq::find;
/// assert_eq!(find(&[1, 2, 3, 4, 5], |x| *x > 3), (3, 4));
/// assert_eq!(find(&[1, 2, 3, 4, 5], |x| *x > 10), (-1, 0));
/// ```
pub fn find<T, F>(items: &[T], predicate: F) -> (isize, T)
where
    T: Default + Clone,
    F: FnMut(&T) -> bool,
{
    match find_entry(items, predicate) {
        // Slices never hold more than isize::MAX elements, so the index always fits.
        Some((index, item)) => (index as isize, item.clone()),
        None => (-1, T::default()),
    }
}
