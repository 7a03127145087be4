//! Prelude module for the sdate crate.
//!
//! Re-exports the derive macros used from derive_more.

pub use derive_more::{Display, Into};
