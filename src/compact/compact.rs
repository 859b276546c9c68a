use super::IsZero;

/// Returns clones of every element that isn't [zero](IsZero), in their original relative order.
///
/// # Examples
/// ```
/// # use collection_utils::compact::compact;
/// assert_eq!(compact(&[0, 1, 2, 2, 0, 3, 0, 4]), [1, 2, 2, 3, 4]);
/// assert_eq!(compact(&["", "foo", "", "bar"]), ["foo", "bar"]);
///
/// let (zero, one) = (0, 1);
/// assert_eq!(compact(&[Some(&zero), None, Some(&one)]), [Some(&0), Some(&1)]);
/// ```
pub fn compact<T: IsZero + Clone>(items: &[T]) -> Vec<T> {
    items.iter().filter(|item| !item.is_zero()).cloned().collect()
}
