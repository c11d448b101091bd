//! Prelude module for packed_datetime crate.
//!
//! Re-exports the derive macros used across the crate.

pub use derive_more::{Deref, Display};
