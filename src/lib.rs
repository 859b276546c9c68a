//! A small set of functional-style helpers over ordered sequences and key-value mappings.
//!
//! # Purpose
//! Every function here is a single pass over a collection that the caller already owns: map,
//! filter, reduce, each, every/some, find, chunk and compact. Nothing keeps state between calls and
//! nothing does I/O, so all of them are safe to call from any thread on collections that aren't
//! being mutated elsewhere.
//!
//! # Method
//! Sequences are borrowed as slices, which means [`Vec`], arrays and anything else that derefs to
//! `[T]` work without conversion. Mappings go through the [`Mapping`](mapping::Mapping) trait, so
//! that filtering a map gives back the same kind of map (including its hasher).
//!
//! Iteration order of a mapping is never relied upon. If an operation over a mapping looks like it
//! returns "the first" entry, it returns *some* entry.
//!
//! # Error Handling
//! Only [`chunk`](seq::chunk) can fail, and only when asked for a group size below 1. That failure
//! is reported through [`InvalidArgument`](util::error::InvalidArgument) before any traversal
//! starts. Everything else is total: "not found" is a sentinel (or a [`None`] from the `_entry`
//! variants), never an error.
//!
//! # Features
//! - `seq`: sequence operations.
//! - `mapping`: mapping operations and the [`Mapping`](mapping::Mapping) trait.
//! - `compact`: the [`IsZero`](compact::IsZero) capability and [`compact`](compact::compact).
//! - `value`: the dynamic [`Value`](compact::Value) type, for sequences of mixed kinds.
//! - `all` (default): all of the above.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "compact")]
pub mod compact;
#[cfg(feature = "mapping")]
pub mod mapping;
#[cfg(feature = "seq")]
pub mod seq;
pub mod util;
