//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block game and nothing else. It
//! has **no dependency** on rendering, input devices, timers, or I/O:
//!
//! - **Deterministic**: a session is fully described by its seed and the events applied to it
//! - **Synchronous**: every operation returns immediately; the host decides when gravity ticks
//! - **Zero-allocation**: boards and pieces are fixed-size arrays
//!
//! # Module Structure
//!
//! - [`geometry`]: integer vectors and quarter-turn rotations
//! - [`pieces`]: the seven shapes, their offset tables and colors, spawn placement
//! - [`collision`]: classifies a candidate placement as free, side-blocked, or bottom-blocked
//! - [`board`]: 10x16 settled-cell grid with line clearing and row packing
//! - [`session`]: the active piece and the gravity/move/rotate/drop transitions
//! - [`rng`]: seeded generator for shape draws and spawn columns
//! - [`snapshot`]: copyable read-only view for renderers
//!
//! # Rules
//!
//! - **Rotation**: pure quarter turns about the pivot; a side collision tries
//!   horizontal kicks of +1, -1, +2, -2 columns in that order
//! - **Collision**: floor and stack contact are both `Bottom`; walls are `Side`
//! - **Touchdown**: settle, clear full rows, pack, score, spawn the next piece
//! - **Scoring**: each full row in one touchdown updates `d = d * 2 + 1000`
//!   and adds `d`, so one row earns 1000 and two rows earn 4000
//! - **No game over**: a spawn that overlaps the stack is reported by
//!   [`Session::collides_at_spawn`] and left to the host
//!
//! # Example
//!
//! ```
//! use tris_core::{Session, Vec2};
//! use tris_core::types::{GameAction, Shape};
//!
//! let mut session = Session::new(12345);
//! session.spawn_at(Shape::I, Vec2::new(5, 0));
//!
//! session.apply_action(GameAction::MoveRight);
//! session.tick_gravity();
//! assert_eq!(session.active_piece().pivot, Vec2::new(6, 1));
//!
//! // Fifteen more rows and the bar settles on the floor.
//! let landed = (0..15).filter(|_| session.tick_gravity().is_touchdown()).count();
//! assert_eq!(landed, 1);
//! assert!(session.board().is_occupied(6, 15));
//! ```

pub mod board;
pub mod collision;
pub mod geometry;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineClear};
pub use collision::check;
pub use geometry::Vec2;
pub use pieces::{random_shape, shape_color, shape_offsets, ActivePiece, PieceShape};
pub use rng::SimpleRng;
pub use session::{Outcome, Session, Touchdown};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
