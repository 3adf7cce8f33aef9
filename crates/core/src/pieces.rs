//! Pieces module - the shape catalog
//!
//! Each shape is four cell offsets relative to a pivot plus one color. The
//! offsets are literal tables; rotation is applied to the current offsets at
//! runtime (pure quarter turns about the pivot, no re-centering and no SRS
//! kick tables). The same table is read for every spawn.

use crate::geometry::Vec2;
use crate::rng::SimpleRng;
use crate::types::{Color, Shape, BOARD_WIDTH};

/// Shape of a piece - 4 cell offsets from the pivot
pub type PieceShape = [Vec2; 4];

const fn v(x: i32, y: i32) -> Vec2 {
    Vec2::new(x, y)
}

struct CatalogEntry {
    offsets: PieceShape,
    color: Color,
}

/// Indexed by `Shape::index()`
const CATALOG: [CatalogEntry; Shape::COUNT] = [
    // I
    CatalogEntry {
        offsets: [v(-1, 0), v(0, 0), v(1, 0), v(2, 0)],
        color: Color::LightBlue,
    },
    // O
    CatalogEntry {
        offsets: [v(0, 0), v(1, 0), v(0, 1), v(1, 1)],
        color: Color::Yellow,
    },
    // T
    CatalogEntry {
        offsets: [v(0, 1), v(1, 1), v(1, 2), v(1, 0)],
        color: Color::Blue,
    },
    // J
    CatalogEntry {
        offsets: [v(1, 0), v(1, 1), v(1, 2), v(0, 2)],
        color: Color::Orange,
    },
    // L
    CatalogEntry {
        offsets: [v(0, 0), v(0, 1), v(0, 2), v(1, 2)],
        color: Color::Purple,
    },
    // S
    CatalogEntry {
        offsets: [v(-1, 1), v(1, 0), v(0, 0), v(0, 1)],
        color: Color::Red,
    },
    // Z
    CatalogEntry {
        offsets: [v(-1, 0), v(0, 0), v(0, 1), v(1, 1)],
        color: Color::Green,
    },
];

/// Spawn row for every new piece
pub const SPAWN_Y: i32 = 0;

/// Leftmost spawn pivot column
pub const SPAWN_X_MIN: i32 = 2;

/// Number of pivot columns in the spawn band (x in `2..=7`)
pub const SPAWN_X_SPAN: u32 = (BOARD_WIDTH - 4) as u32;

/// Get the fixed offset table for a shape
pub fn shape_offsets(shape: Shape) -> PieceShape {
    CATALOG[shape.index()].offsets
}

/// Get the color for a shape
pub fn shape_color(shape: Shape) -> Color {
    CATALOG[shape.index()].color
}

/// Draw a shape uniformly from the seven valid shapes
pub fn random_shape(rng: &mut SimpleRng) -> Shape {
    let n = rng.next_range(Shape::COUNT as u32) as usize;
    // next_range(7) is always < 7.
    Shape::ALL[n]
}

/// Draw a spawn pivot from the centered band, on the top row
pub fn random_spawn_pivot(rng: &mut SimpleRng) -> Vec2 {
    let x = SPAWN_X_MIN + rng.next_range(SPAWN_X_SPAN) as i32;
    Vec2::new(x, SPAWN_Y)
}

/// The falling piece: pivot, current offsets, and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub pivot: Vec2,
    pub offsets: PieceShape,
    pub color: Color,
}

impl ActivePiece {
    /// Fresh piece with the shape's catalog offsets
    pub fn new(shape: Shape, pivot: Vec2) -> Self {
        Self {
            shape,
            pivot,
            offsets: shape_offsets(shape),
            color: shape_color(shape),
        }
    }

    /// Absolute board positions of the four cells
    pub fn cells(&self) -> [Vec2; 4] {
        self.offsets.map(|offset| self.pivot + offset)
    }
}

/// Horizontal extent of an offset table as (min_dx, max_dx)
pub fn horizontal_extent(offsets: &PieceShape) -> (i32, i32) {
    offsets.iter().fold((i32::MAX, i32::MIN), |(lo, hi), o| {
        (lo.min(o.x), hi.max(o.x))
    })
}
