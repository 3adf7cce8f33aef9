//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the game core, the host engine, and input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 16 rows (indexed 0-15, y grows downward)
//! - **Storage**: row-major, `index = y * BOARD_WIDTH + x`
//!
//! # Timing
//!
//! The core has no clock. The host schedules gravity ticks; the reference
//! cadence is one tick every `DEFAULT_GRAVITY_MS` (800ms).
//!
//! # Examples
//!
//! ```
//! use tris_types::{Cell, Color, GameAction, Shape, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let shape = Shape::from_str("t").unwrap();
//! assert_eq!(shape, Shape::T);
//! assert_eq!(shape.color(), Color::Blue);
//!
//! assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
//! assert!(Cell::Filled(Color::Red).is_filled());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 16);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i32 = 10;

/// Board height in cells (16 rows)
pub const BOARD_HEIGHT: i32 = 16;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Reference gravity interval (one row every 800ms)
pub const DEFAULT_GRAVITY_MS: u32 = 800;

/// Smallest gravity interval a host may configure
pub const MIN_GRAVITY_MS: u32 = 16;

/// Horizontal shifts tried, in order, after a rotation hits a wall
pub const KICK_OFFSETS: [i32; 4] = [1, -1, 2, -2];

/// Base reward added to the running line-clear delta for each full row
pub const SCORE_PER_LINE: u32 = 1000;

/// The seven piece shapes
///
/// Each shape has exactly one color:
/// - **I**: light blue, straight bar
/// - **O**: yellow, 2x2 square
/// - **T**: blue
/// - **J**: orange
/// - **L**: purple
/// - **S**: red
/// - **Z**: green
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl Shape {
    /// Every shape, in catalog order
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::J,
        Shape::L,
        Shape::S,
        Shape::Z,
    ];

    /// Number of distinct shapes
    pub const COUNT: usize = 7;

    /// Shape at catalog position `n`.
    ///
    /// Out-of-range positions yield `None`; there is no eighth shape.
    ///
    /// ```
    /// use tris_types::Shape;
    ///
    /// assert_eq!(Shape::from_index(0), Some(Shape::I));
    /// assert_eq!(Shape::from_index(6), Some(Shape::Z));
    /// assert_eq!(Shape::from_index(7), None);
    /// ```
    pub fn from_index(n: usize) -> Option<Self> {
        Self::ALL.get(n).copied()
    }

    /// Position of this shape in [`Shape::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The color uniquely associated with this shape
    pub fn color(self) -> Color {
        match self {
            Shape::I => Color::LightBlue,
            Shape::O => Color::Yellow,
            Shape::T => Color::Blue,
            Shape::J => Color::Orange,
            Shape::L => Color::Purple,
            Shape::S => Color::Red,
            Shape::Z => Color::Green,
        }
    }

    /// Parse shape from string (case-insensitive)
    ///
    /// ```
    /// use tris_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("i"), Some(Shape::I));
    /// assert_eq!(Shape::from_str("Z"), Some(Shape::Z));
    /// assert_eq!(Shape::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Shape::I),
            "o" => Some(Shape::O),
            "t" => Some(Shape::T),
            "j" => Some(Shape::J),
            "l" => Some(Shape::L),
            "s" => Some(Shape::S),
            "z" => Some(Shape::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "i",
            Shape::O => "o",
            Shape::T => "t",
            Shape::J => "j",
            Shape::L => "l",
            Shape::S => "s",
            Shape::Z => "z",
        }
    }
}

/// Piece colors, one per shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    Blue,
    Red,
    Orange,
    LightBlue,
    Yellow,
    Purple,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::LightBlue => "lightBlue",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
        }
    }

    /// Compact code used by grid snapshots (1..=7)
    pub fn code(self) -> u8 {
        match self {
            Color::Green => 1,
            Color::Blue => 2,
            Color::Red => 3,
            Color::Orange => 4,
            Color::LightBlue => 5,
            Color::Yellow => 6,
            Color::Purple => 7,
        }
    }
}

/// A cell on the board
///
/// - `Empty`: nothing settled here
/// - `Filled(color)`: a settled piece cell
/// - `Border`: reserved for a visual gutter; boards never store it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
    Border,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn is_filled(self) -> bool {
        !self.is_empty()
    }

    /// Compact code used by grid snapshots: 0 empty, 1..=7 color, 8 border
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled(color) => color.code(),
            Cell::Border => 8,
        }
    }
}

/// Rotation direction (90° steps about the pivot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Cw,
    Ccw,
}

impl RotationDirection {
    pub fn inverse(self) -> Self {
        match self {
            RotationDirection::Cw => RotationDirection::Ccw,
            RotationDirection::Ccw => RotationDirection::Cw,
        }
    }
}

/// Result of testing a candidate placement
///
/// - **None**: every cell is free
/// - **Side**: a cell left the board horizontally (kickable)
/// - **Bottom**: a cell hit the floor or the stack (terminal for gravity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    None,
    Side,
    Bottom,
}

/// Commands a host may apply to the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// One immediate gravity step, flagged as forced
    ForceDown,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// ```
    /// use tris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("forcedown"), Some(GameAction::ForceDown));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "forcedown" => Some(GameAction::ForceDown),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::ForceDown => "forceDown",
        }
    }
}
