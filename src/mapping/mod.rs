//! Operations over key-value mappings, and the [`Mapping`] trait they are written against.
//!
//! None of these functions depend on iteration order. [`HashMap`](std::collections::HashMap)
//! enumerates in an unspecified order and [`BTreeMap`](std::collections::BTreeMap) in key order,
//! but both are treated the same: an operation that returns one matching entry returns *some*
//! matching entry.

mod mapping;
mod ops;

pub use mapping::*;
pub use ops::*;
