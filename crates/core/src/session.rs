//! Session module - the active piece and the per-event state transitions
//!
//! The session owns the board, the single active piece, the score, and the
//! generator used for the next shape and spawn column. Every operation is
//! synchronous; the host decides when gravity ticks happen.
//!
//! Rejected moves and rotations are ordinary outcomes, never errors. A side
//! collision during a vertical step is impossible for a legally placed piece
//! and aborts loudly.

use crate::board::{Board, LineClear};
use crate::collision::check;
use crate::geometry::{rotate_offsets, Vec2};
use crate::pieces::{random_shape, random_spawn_pivot, ActivePiece};
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Collision, GameAction, RotationDirection, Shape, KICK_OFFSETS};

/// A piece that could no longer fall and was written into the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Touchdown {
    /// The piece as it was settled
    pub piece: ActivePiece,
    /// Spawn counter value of the settled piece
    pub piece_id: u32,
    /// Rows emptied by this touchdown and the points they earned
    pub clear: LineClear,
    /// Set when the touchdown came from an explicit down command.
    /// Output signal only; board mechanics are identical.
    pub forced: bool,
    /// Session score including this touchdown
    pub score: u32,
}

/// Result of applying one event to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The piece moved or rotated
    Applied,
    /// The command was blocked; nothing changed
    Rejected,
    /// The piece settled and a new one spawned
    Touchdown(Touchdown),
}

impl Outcome {
    pub fn is_touchdown(&self) -> bool {
        matches!(self, Outcome::Touchdown(_))
    }

    pub fn touchdown(&self) -> Option<&Touchdown> {
        match self {
            Outcome::Touchdown(t) => Some(t),
            _ => None,
        }
    }

    pub fn into_touchdown(self) -> Option<Touchdown> {
        match self {
            Outcome::Touchdown(t) => Some(t),
            _ => None,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: ActivePiece,
    rng: SimpleRng,
    score: u32,
    lines_cleared: u32,
    /// Number of pieces spawned so far, the opening piece included
    piece_id: u32,
}

impl Session {
    /// Start a session on an empty board with a random opening piece
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Start a session on a prepared board with a random opening piece
    pub fn with_board(seed: u32, board: Board) -> Self {
        let mut rng = SimpleRng::new(seed);
        let shape = random_shape(&mut rng);
        let pivot = random_spawn_pivot(&mut rng);

        Self {
            board,
            active: ActivePiece::new(shape, pivot),
            rng,
            score: 0,
            lines_cleared: 0,
            piece_id: 1,
        }
    }

    /// Replace the opening piece with `shape`. Called once by the host at startup.
    pub fn spawn_initial(&mut self, shape: Shape) {
        let pivot = random_spawn_pivot(&mut self.rng);
        self.active = ActivePiece::new(shape, pivot);
    }

    /// Spawn `shape` at a random column of the spawn band on the top row.
    ///
    /// The stack is not consulted; see [`Session::collides_at_spawn`].
    pub fn spawn(&mut self, shape: Shape) {
        let pivot = random_spawn_pivot(&mut self.rng);
        self.spawn_at(shape, pivot);
    }

    /// Spawn `shape` with an explicit pivot
    pub fn spawn_at(&mut self, shape: Shape, pivot: Vec2) {
        self.active = ActivePiece::new(shape, pivot);
        self.piece_id = self.piece_id.wrapping_add(1);
    }

    /// True when the active piece overlaps the stack or leaves the board,
    /// the caller's "board full" probe right after a spawn.
    pub fn collides_at_spawn(&self) -> bool {
        check(&self.board, &self.active.offsets, self.active.pivot) != Collision::None
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_piece(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// One periodic gravity step
    pub fn tick_gravity(&mut self) -> Outcome {
        self.step_down(false)
    }

    /// One gravity step requested by an explicit down command.
    ///
    /// Moves a single row like [`Session::tick_gravity`]; a resulting
    /// touchdown carries `forced = true`.
    pub fn hard_drop(&mut self) -> Outcome {
        self.step_down(true)
    }

    fn step_down(&mut self, forced: bool) -> Outcome {
        let candidate = self.active.pivot + Vec2::new(0, 1);

        match check(&self.board, &self.active.offsets, candidate) {
            Collision::None => {
                self.active.pivot = candidate;
                Outcome::Applied
            }
            Collision::Bottom => Outcome::Touchdown(self.touchdown(forced)),
            Collision::Side => unreachable!(
                "vertical step to ({}, {}) reported a side collision",
                candidate.x, candidate.y
            ),
        }
    }

    /// Settle the active piece, clear and pack rows, score, and spawn the next piece
    fn touchdown(&mut self, forced: bool) -> Touchdown {
        let piece = self.active;
        let piece_id = self.piece_id;
        self.board.settle(&piece);

        let clear = self.board.clear_full_rows();
        if clear.score_delta > 0 {
            self.board.pack();
        }

        self.score = self.score.saturating_add(clear.score_delta);
        self.lines_cleared = self.lines_cleared.saturating_add(clear.count() as u32);

        let next = random_shape(&mut self.rng);
        self.spawn(next);

        Touchdown {
            piece,
            piece_id,
            clear,
            forced,
            score: self.score,
        }
    }

    /// Shift the active piece one column. Returns false when blocked.
    pub fn move_lateral(&mut self, dx: i32) -> bool {
        debug_assert!(dx == -1 || dx == 1, "lateral move of {} columns", dx);

        let candidate = self.active.pivot + Vec2::new(dx, 0);
        if check(&self.board, &self.active.offsets, candidate) == Collision::None {
            self.active.pivot = candidate;
            return true;
        }
        false
    }

    /// Rotate the active piece a quarter turn about its pivot.
    ///
    /// A side collision triggers a kick search over [`KICK_OFFSETS`] in order.
    /// Returns the applied horizontal kick (`Some(0)` when none was needed),
    /// or `None` when the rotation was rejected and nothing changed.
    pub fn rotate(&mut self, direction: RotationDirection) -> Option<i32> {
        let rotated = rotate_offsets(&self.active.offsets, direction);
        let pivot = self.active.pivot;

        match check(&self.board, &rotated, pivot) {
            Collision::None => {
                self.active.offsets = rotated;
                Some(0)
            }
            Collision::Bottom => None,
            Collision::Side => {
                for &shift in KICK_OFFSETS.iter() {
                    let kicked = pivot + Vec2::new(shift, 0);
                    if check(&self.board, &rotated, kicked) == Collision::None {
                        self.active.pivot = kicked;
                        self.active.offsets = rotated;
                        return Some(shift);
                    }
                }
                None
            }
        }
    }

    /// Apply a host command
    pub fn apply_action(&mut self, action: GameAction) -> Outcome {
        let applied = match action {
            GameAction::MoveLeft => self.move_lateral(-1),
            GameAction::MoveRight => self.move_lateral(1),
            GameAction::RotateCw => self.rotate(RotationDirection::Cw).is_some(),
            GameAction::RotateCcw => self.rotate(RotationDirection::Ccw).is_some(),
            GameAction::ForceDown => return self.hard_drop(),
        };

        if applied {
            Outcome::Applied
        } else {
            Outcome::Rejected
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.score = self.score;
        out.lines_cleared = self.lines_cleared;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_offsets;
    use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

    fn session_with(shape: Shape, pivot: Vec2) -> Session {
        let mut s = Session::new(12345);
        s.spawn_at(shape, pivot);
        s
    }

    fn fill_row(board: &mut Board, y: i32, skip: &[i32]) {
        for x in 0..BOARD_WIDTH {
            if !skip.contains(&x) {
                board.set(x, y, Cell::Filled(Color::Green));
            }
        }
    }

    #[test]
    fn test_new_session() {
        let s = Session::new(12345);
        assert_eq!(s.score(), 0);
        assert_eq!(s.lines_cleared(), 0);
        assert_eq!(s.piece_id(), 1);
        assert_eq!(s.seed(), 12345);
        assert_eq!(s.active_piece().pivot.y, 0);
        assert!(!s.collides_at_spawn());
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let mut a = Session::new(77);
        let mut b = Session::new(77);
        for _ in 0..200 {
            a.tick_gravity();
            b.tick_gravity();
            assert_eq!(a.active_piece(), b.active_piece());
        }
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_spawn_initial_keeps_piece_count() {
        let mut s = Session::new(5);
        s.spawn_initial(Shape::I);
        assert_eq!(s.active_piece().shape, Shape::I);
        assert_eq!(s.active_piece().offsets, shape_offsets(Shape::I));
        assert_eq!(s.piece_id(), 1);
    }

    #[test]
    fn test_gravity_moves_one_row() {
        let mut s = session_with(Shape::T, Vec2::new(4, 0));
        assert_eq!(s.tick_gravity(), Outcome::Applied);
        assert_eq!(s.active_piece().pivot, Vec2::new(4, 1));
    }

    #[test]
    fn test_touchdown_spawns_next_piece() {
        let mut s = session_with(Shape::O, Vec2::new(4, 14));
        let outcome = s.tick_gravity();
        let touchdown = outcome.touchdown().expect("O at row 14 lands");
        assert!(!touchdown.forced);
        assert!(touchdown.clear.is_empty());
        assert_eq!(touchdown.piece_id, 2);
        assert_eq!(s.piece_id(), 3);
        assert_eq!(s.active_piece().pivot.y, 0);
        assert!(s.board().is_occupied(4, 15));
        assert!(s.board().is_occupied(5, 14));
    }

    #[test]
    fn test_hard_drop_is_single_forced_step() {
        let mut s = session_with(Shape::O, Vec2::new(4, 5));
        assert_eq!(s.hard_drop(), Outcome::Applied);
        assert_eq!(s.active_piece().pivot, Vec2::new(4, 6));

        let mut s = session_with(Shape::O, Vec2::new(4, 14));
        let touchdown = s.hard_drop().into_touchdown().expect("forced landing");
        assert!(touchdown.forced);
    }

    #[test]
    fn test_move_lateral_blocked_by_wall() {
        // I spans dx -1..=2, so pivot x=1 is the leftmost legal column.
        let mut s = session_with(Shape::I, Vec2::new(1, 4));
        assert!(!s.move_lateral(-1));
        assert_eq!(s.active_piece().pivot, Vec2::new(1, 4));
        assert!(s.move_lateral(1));
        assert_eq!(s.active_piece().pivot, Vec2::new(2, 4));
    }

    #[test]
    fn test_move_lateral_blocked_by_stack() {
        let mut board = Board::new();
        board.set(6, 5, Cell::Filled(Color::Red));
        let mut s = Session::with_board(1, board);
        s.spawn_at(Shape::O, Vec2::new(4, 4));
        assert!(!s.move_lateral(1));
        assert!(s.move_lateral(-1));
    }

    #[test]
    fn test_rotate_without_kick() {
        let mut s = session_with(Shape::T, Vec2::new(4, 4));
        let before = *s.active_piece();
        assert_eq!(s.rotate(RotationDirection::Cw), Some(0));
        assert_ne!(s.active_piece().offsets, before.offsets);
        assert_eq!(s.rotate(RotationDirection::Ccw), Some(0));
        assert_eq!(*s.active_piece(), before);
    }

    #[test]
    fn test_rotate_kicks_right_off_left_wall() {
        let mut s = session_with(Shape::I, Vec2::new(5, 5));
        assert_eq!(s.rotate(RotationDirection::Cw), Some(0));
        for _ in 0..5 {
            assert!(s.move_lateral(-1));
        }
        assert_eq!(s.active_piece().pivot.x, 0);

        // Horizontal again spans x-2..=x+1; +1 still leaves the wall, +2 fits.
        assert_eq!(s.rotate(RotationDirection::Cw), Some(2));
        assert_eq!(s.active_piece().pivot, Vec2::new(2, 5));
    }

    #[test]
    fn test_rotate_on_floor_is_rejected() {
        let mut s = session_with(Shape::I, Vec2::new(5, BOARD_HEIGHT - 1));
        let before = *s.active_piece();
        assert_eq!(s.rotate(RotationDirection::Cw), None);
        assert_eq!(*s.active_piece(), before);
    }

    #[test]
    fn test_rotate_at_top_edge_is_rejected() {
        // Vertical I needs the row above its pivot.
        let mut s = session_with(Shape::I, Vec2::new(5, 0));
        assert_eq!(s.rotate(RotationDirection::Cw), None);
        assert_eq!(s.active_piece().offsets, shape_offsets(Shape::I));
    }

    #[test]
    fn test_single_line_clear_scores_1000() {
        let mut board = Board::new();
        fill_row(&mut board, 15, &[4, 5, 6, 7]);
        let mut s = Session::with_board(9, board);
        s.spawn_at(Shape::I, Vec2::new(5, 14));

        let touchdown = s.tick_gravity();
        assert!(matches!(touchdown, Outcome::Applied));
        let touchdown = s.tick_gravity().into_touchdown().expect("lands on floor");

        assert_eq!(touchdown.clear.rows.as_slice(), &[15]);
        assert_eq!(touchdown.clear.score_delta, 1000);
        assert_eq!(touchdown.score, 1000);
        assert_eq!(s.score(), 1000);
        assert_eq!(s.lines_cleared(), 1);
        assert!(s.board().cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut s = session_with(Shape::T, Vec2::new(4, 4));
        assert_eq!(s.apply_action(GameAction::MoveLeft), Outcome::Applied);
        assert_eq!(s.active_piece().pivot.x, 3);
        assert_eq!(s.apply_action(GameAction::MoveRight), Outcome::Applied);
        assert_eq!(s.apply_action(GameAction::RotateCw), Outcome::Applied);
        assert_eq!(s.apply_action(GameAction::RotateCcw), Outcome::Applied);
        assert_eq!(s.apply_action(GameAction::ForceDown), Outcome::Applied);
        assert_eq!(s.active_piece().pivot, Vec2::new(4, 5));

        let mut s = session_with(Shape::O, Vec2::new(0, 4));
        assert_eq!(s.apply_action(GameAction::MoveLeft), Outcome::Rejected);
    }

    #[test]
    fn test_collides_at_spawn_detects_full_board() {
        let mut board = Board::new();
        for y in 0..3 {
            fill_row(&mut board, y, &[0]);
        }
        let mut s = Session::with_board(3, board);
        s.spawn_at(Shape::O, Vec2::new(4, 0));
        assert!(s.collides_at_spawn());
    }

    #[test]
    fn test_snapshot() {
        let mut s = session_with(Shape::O, Vec2::new(4, 14));
        s.tick_gravity();
        let snap = s.snapshot();
        assert_eq!(snap.board[15][4], Color::Yellow.code());
        assert_eq!(snap.active.pivot, s.active_piece().pivot);
        assert_eq!(snap.active.cells, s.active_piece().cells());
        assert_eq!(snap.piece_id, s.piece_id());
    }
}
