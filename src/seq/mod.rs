//! Operations over ordered sequences.
//!
//! Every function borrows its input as a slice and walks it once, left to right, with the
//! exception of [`each_right`]. Functions that produce a sequence return a freshly built [`Vec`]
//! and leave the input untouched.
//!
//! [`retain_into`] is the owned counterpart to [`filter`], for callers that want the same concrete
//! container back without cloning.

mod chunk;
mod seq;
mod tests;

pub use chunk::*;
pub use seq::*;
