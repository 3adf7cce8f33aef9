//! Frame event queue.
//!
//! Host events from every source are funneled into one queue and applied to
//! the session one frame at a time. Within a frame all queued input is
//! applied in arrival order, strictly before any pending gravity tick. A
//! touchdown mid-frame has already spawned the next piece, so later input in
//! the same frame moves the new piece.

use std::collections::VecDeque;

use tris_core::{Outcome, Session, Touchdown};

use crate::types::GameAction;

/// One event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The gravity timer fired
    Gravity,
    /// An input command
    Action(GameAction),
    /// Stop the session
    Quit,
}

/// What one processed frame did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Touchdowns in the order they happened
    pub touchdowns: Vec<Touchdown>,
    /// Moves, rotations, and gravity steps that changed the piece
    pub applied: u32,
    /// Commands that were blocked
    pub rejected: u32,
    pub gravity_ticks: u32,
    /// A quit request was seen; events after it were discarded
    pub quit: bool,
}

impl FrameReport {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Applied => self.applied += 1,
            Outcome::Rejected => self.rejected += 1,
            Outcome::Touchdown(t) => self.touchdowns.push(t),
        }
    }
}

/// Pending events for the next frame
#[derive(Debug, Default)]
pub struct EventQueue {
    actions: VecDeque<GameAction>,
    pending_ticks: u32,
    quit: bool,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: HostEvent) {
        if self.quit {
            return;
        }
        match event {
            HostEvent::Gravity => self.pending_ticks = self.pending_ticks.saturating_add(1),
            HostEvent::Action(action) => self.actions.push_back(action),
            HostEvent::Quit => self.quit = true,
        }
    }

    pub fn push_ticks(&mut self, n: u32) {
        if !self.quit {
            self.pending_ticks = self.pending_ticks.saturating_add(n);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.pending_ticks == 0 && !self.quit
    }

    pub fn pending_actions(&self) -> usize {
        self.actions.len()
    }

    pub fn pending_ticks(&self) -> u32 {
        self.pending_ticks
    }

    /// Apply everything queued to `session` and empty the queue.
    ///
    /// Input queued before a quit is still applied; gravity is skipped once
    /// a quit has been seen.
    pub fn process_frame(&mut self, session: &mut Session) -> FrameReport {
        let mut report = FrameReport::default();

        while let Some(action) = self.actions.pop_front() {
            report.record(session.apply_action(action));
        }

        let ticks = std::mem::take(&mut self.pending_ticks);
        if std::mem::take(&mut self.quit) {
            report.quit = true;
            return report;
        }

        for _ in 0..ticks {
            report.gravity_ticks += 1;
            report.record(session.tick_gravity());
        }

        report
    }
}
