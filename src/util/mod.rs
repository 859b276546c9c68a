//! Items shared between the operation modules. Only [`error`] is part of the public API.

pub mod error;
#[cfg(feature = "value")]
pub(crate) mod fmt;
#[cfg(test)]
pub(crate) mod hash;
