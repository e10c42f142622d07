//! Tree Model
//!
//! In-memory directory topology that mirrors what the emitted script has
//! done to the filesystem under test so far.

pub mod types;
pub mod tree;

pub use types::*;
pub use tree::{TreeModel, DEFAULT_CAPACITY};
