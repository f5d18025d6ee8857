use tracing::{debug, info};

use crate::generator::{generate_grid, generate_order, GridCell, Order, RandomSource};

pub const SESSION_SECS: u32 = 60;
pub const MATCH_REWARD: u32 = 10;
pub const MISMATCH_PENALTY: u32 = 5;
pub const TARGET_SCORE: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Not active, no order, or the index is off the grid
    Ignored,
    Matched { fulfilled: bool },
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Ignored,
    Running(u32),
    Expired,
}

/// End of session message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    ChallengeBeaten,
    TryAgain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub phase: Phase,
    pub score: u32,
    pub seconds_remaining: u32,
    pub order: Option<Order>,
    pub grid: Vec<GridCell>,
    pub last_picked: Option<usize>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            score: 0,
            seconds_remaining: SESSION_SECS,
            order: None,
            grid: Vec::new(),
            last_picked: None,
        }
    }
}

impl SessionState {
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn has_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Only meaningful once the session has ended
    pub fn verdict(&self) -> Option<Verdict> {
        match self.phase {
            Phase::Ended if self.score >= TARGET_SCORE => Some(Verdict::ChallengeBeaten),
            Phase::Ended => Some(Verdict::TryAgain),
            _ => None,
        }
    }
}

/// Owns the game state and applies every transition to it
#[derive(Debug)]
pub struct Session<S: RandomSource> {
    state: SessionState,
    source: S,
}

impl<S: RandomSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            state: SessionState::default(),
            source,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn start(&mut self) {
        let grid = generate_grid(&mut self.source);
        let order = generate_order(&mut self.source);

        self.state = SessionState {
            phase: Phase::Active,
            score: 0,
            seconds_remaining: SESSION_SECS,
            order: Some(order),
            grid,
            last_picked: None,
        };

        info!(
            item = %order.item,
            quantity = order.quantity,
            "session started"
        );
    }

    pub fn pick(&mut self, index: usize) -> PickOutcome {
        if !self.state.is_active() {
            return PickOutcome::Ignored;
        }
        let Some(cell) = self.state.grid.get(index).copied() else {
            return PickOutcome::Ignored;
        };
        let Some(order) = self.state.order.as_mut() else {
            return PickOutcome::Ignored;
        };

        self.state.last_picked = Some(index);

        if cell.item == order.item {
            self.state.score += MATCH_REWARD;
            let fulfilled = order.collect();
            debug!(index, score = self.state.score, fulfilled, "matched pick");

            if fulfilled {
                let next = generate_order(&mut self.source);
                info!(item = %next.item, quantity = next.quantity, "order fulfilled, next order issued");
                self.state.order = Some(next);
            }

            PickOutcome::Matched { fulfilled }
        } else {
            self.state.score = self.state.score.saturating_sub(MISMATCH_PENALTY);
            debug!(index, score = self.state.score, "missed pick");
            PickOutcome::Missed
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_active() {
            return TickOutcome::Ignored;
        }

        self.state.seconds_remaining = self.state.seconds_remaining.saturating_sub(1);

        if self.state.seconds_remaining == 0 {
            self.state.phase = Phase::Ended;
            info!(score = self.state.score, "session ended");
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.state.seconds_remaining)
        }
    }
}
