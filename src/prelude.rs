//! Prelude module for the kurdical crate.
//!
//! Re-exports the derive macros from derive_more used across the crate.

pub use derive_more::{Display, From, Into};
