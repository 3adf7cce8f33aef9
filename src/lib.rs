//! Falling-block game engine (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this
//! package re-exports them under one name for the binary, the integration
//! tests, and the benchmarks.

pub use tris_core as core;
pub use tris_engine as engine;
pub use tris_input as input;
pub use tris_types as types;
