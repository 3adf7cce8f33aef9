use crate::geometry::Vec2;
use crate::pieces::ActivePiece;
use crate::types::{Color, Shape, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub color: Color,
    pub pivot: Vec2,
    pub cells: [Vec2; 4],
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            shape: value.shape,
            color: value.color,
            pivot: value.pivot,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub score: u32,
    pub lines_cleared: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Board codes with the active piece painted in, as a renderer would draw it
    pub fn composed_board(&self) -> [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = self.board;
        for cell in self.active.cells {
            if (0..BOARD_WIDTH).contains(&cell.x) && (0..BOARD_HEIGHT).contains(&cell.y) {
                grid[cell.y as usize][cell.x as usize] = self.active.color.code();
            }
        }
        grid
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                shape: Shape::I,
                color: Shape::I.color(),
                pivot: Vec2::ZERO,
                cells: [Vec2::ZERO; 4],
            },
            score: 0,
            lines_cleared: 0,
            piece_id: 0,
        }
    }
}
