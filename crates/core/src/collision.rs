//! Collision checker - classifies a candidate placement
//!
//! Cells are tested in offset order and the first blocked cell decides the
//! result. Per cell the floor is tested before the side walls, so a cell that
//! is both below the floor and outside the walls reports `Bottom`; rotation
//! relies on this to avoid kicking a piece that is resting on the floor.

use crate::board::Board;
use crate::geometry::Vec2;
use crate::types::{Collision, BOARD_HEIGHT, BOARD_WIDTH};

/// Classify placing `offsets` around `pivot` on `board`
pub fn check(board: &Board, offsets: &[Vec2; 4], pivot: Vec2) -> Collision {
    for &offset in offsets {
        let cell = pivot + offset;

        if cell.y >= BOARD_HEIGHT {
            return Collision::Bottom;
        }

        if cell.x < 0 || cell.x >= BOARD_WIDTH {
            return Collision::Side;
        }

        // Above the top edge: blocked like the stack, never kicked, never indexed.
        if cell.y < 0 {
            return Collision::Bottom;
        }

        if board.at(cell).is_filled() {
            return Collision::Bottom;
        }
    }

    Collision::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_offsets;
    use crate::types::{Cell, Color, Shape};

    #[test]
    fn test_free_placement() {
        let board = Board::new();
        let offsets = shape_offsets(Shape::T);
        assert_eq!(check(&board, &offsets, Vec2::new(4, 0)), Collision::None);
    }

    #[test]
    fn test_floor() {
        let board = Board::new();
        let offsets = shape_offsets(Shape::O);
        // O occupies rows pivot.y and pivot.y + 1.
        assert_eq!(check(&board, &offsets, Vec2::new(4, 14)), Collision::None);
        assert_eq!(check(&board, &offsets, Vec2::new(4, 15)), Collision::Bottom);
    }

    #[test]
    fn test_side_walls() {
        let board = Board::new();
        let offsets = shape_offsets(Shape::I);
        // I spans dx -1..=2.
        assert_eq!(check(&board, &offsets, Vec2::new(1, 3)), Collision::None);
        assert_eq!(check(&board, &offsets, Vec2::new(0, 3)), Collision::Side);
        assert_eq!(check(&board, &offsets, Vec2::new(7, 3)), Collision::None);
        assert_eq!(check(&board, &offsets, Vec2::new(8, 3)), Collision::Side);
    }

    #[test]
    fn test_stack_counts_as_bottom() {
        let mut board = Board::new();
        board.set(5, 8, Cell::Filled(Color::Red));
        let offsets = shape_offsets(Shape::O);
        assert_eq!(check(&board, &offsets, Vec2::new(4, 7)), Collision::Bottom);
        assert_eq!(check(&board, &offsets, Vec2::new(4, 6)), Collision::None);
    }

    #[test]
    fn test_floor_wins_over_side_for_same_cell() {
        let board = Board::new();
        let offsets = [
            Vec2::new(-1, 1),
            Vec2::new(0, 0),
            Vec2::new(0, 0),
            Vec2::new(0, 0),
        ];
        // The first cell is both left of the wall and below the floor.
        assert_eq!(check(&board, &offsets, Vec2::new(0, 15)), Collision::Bottom);
    }

    #[test]
    fn test_first_blocked_cell_decides() {
        let board = Board::new();
        let offsets = [
            Vec2::new(-1, 0),
            Vec2::new(0, 5),
            Vec2::new(0, 0),
            Vec2::new(0, 0),
        ];
        // Cell 0 is out to the left before cell 1 reaches the floor.
        assert_eq!(check(&board, &offsets, Vec2::new(0, 12)), Collision::Side);
    }

    #[test]
    fn test_above_top_is_bottom() {
        let board = Board::new();
        let offsets = [
            Vec2::new(0, -1),
            Vec2::new(0, 0),
            Vec2::new(0, 1),
            Vec2::new(0, 2),
        ];
        assert_eq!(check(&board, &offsets, Vec2::new(5, 0)), Collision::Bottom);
        assert_eq!(check(&board, &offsets, Vec2::new(5, 1)), Collision::None);
    }
}
