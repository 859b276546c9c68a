//! Removing "empty" elements from a sequence.
//!
//! What counts as empty is decided per type by [`IsZero`]: the zero of a number, `false`, empty
//! text, an empty container, or a null pointer. [`Option`] plays the part of a nullable pointer, so
//! `None` is dropped but `Some(0)` is kept. Only the outermost layer is inspected.
//!
//! For sequences that mix kinds at runtime, [`Value`] is a tagged variant with the same rules
//! (behind the `value` feature).

mod compact;
#[cfg(feature = "value")]
mod value;
mod zero;

pub use compact::*;
#[cfg(feature = "value")]
pub use value::*;
pub use zero::*;
