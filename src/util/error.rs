use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A group size below 1 was requested, which can't partition anything.
///
/// The message is fixed as `cannot be less than 1`, regardless of the size that was requested.
///
/// # Examples
/// ```
/// # use collection_utils::util::error::SizeLessThanOne;
/// let err = SizeLessThanOne { size: -3 };
/// assert_eq!(err.to_string(), "cannot be less than 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cannot be less than 1")]
pub struct SizeLessThanOne {
    pub size: isize,
}

/// An argument was rejected before any traversal started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum InvalidArgument {
    SizeLessThanOne(SizeLessThanOne),
}
