//! Terminal input.
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`] values. The
//! bindings are fixed; there is no key repeat handling beyond what the
//! terminal itself sends.

pub mod map;

pub use tris_types as types;

pub use map::{handle_key_event, should_quit};
