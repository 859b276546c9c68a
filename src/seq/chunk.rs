use crate::util::error::{InvalidArgument, SizeLessThanOne};

/// Splits the sequence into consecutive groups of `size` elements. The final group holds whatever
/// is left over, so it may be shorter. An empty sequence gives zero groups.
///
/// # Errors
/// Returns [`InvalidArgument::SizeLessThanOne`] if `size` is below 1. The size is checked before
/// the sequence is looked at, so this happens even for an empty sequence.
///
/// # Examples
/// ```
/// # use collection_utils::seq::chunk;
/// let groups = chunk(&[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(groups, [vec![1, 2], vec![3, 4], vec![5]]);
///
/// let err = chunk(&[1, 2, 3], 0).unwrap_err();
/// assert_eq!(err.to_string(), "cannot be less than 1");
/// ```
pub fn chunk<T: Clone>(items: &[T], size: isize) -> Result<Vec<Vec<T>>, InvalidArgument> {
    if size < 1 {
        return Err(SizeLessThanOne { size }.into());
    }

    Ok(items.chunks(size as usize).map(<[T]>::to_vec).collect())
}
