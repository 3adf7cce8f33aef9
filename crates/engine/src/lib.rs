//! Host-side plumbing around the game core
//!
//! The core session is synchronous and has no notion of time. This crate
//! supplies everything a host needs to drive it:
//!
//! - [`queue`]: merges gravity ticks, commands, and quit into ordered frames
//! - [`clock`]: turns elapsed milliseconds into due gravity ticks for
//!   hosts that run their own loop
//! - [`runtime`]: tokio loop with a gravity timer and a channel for input
//! - [`config`]: seed, gravity interval, and log path from the environment
//! - [`log`]: JSON-lines touchdown log

pub mod clock;
pub mod config;
pub mod log;
pub mod queue;
pub mod runtime;

pub use tris_core as core;
pub use tris_types as types;

pub use clock::GravityClock;
pub use config::EngineConfig;
pub use log::{TouchdownLog, TouchdownRecord};
pub use queue::{EventQueue, FrameReport, HostEvent};
pub use runtime::{Engine, EngineHandle};
