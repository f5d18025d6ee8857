//! Short-lived visual cues layered over the game.
//!
//! None of this feeds back into scoring. Every cue carries its own deadline
//! and is dropped once `expire` sees that deadline pass.

use std::time::{Duration, Instant};

pub const PICK_FLASH: Duration = Duration::from_millis(500);
pub const ORDER_FILLED_BANNER: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub cell: usize,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct FeedbackLayer {
    flash: Option<Flash>,
    order_filled_until: Option<Instant>,
}

impl FeedbackLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any flash still showing
    pub fn flash(&mut self, kind: FlashKind, cell: usize, now: Instant) {
        self.flash = Some(Flash {
            kind,
            cell,
            expires_at: now + PICK_FLASH,
        });
    }

    pub fn order_filled(&mut self, now: Instant) {
        self.order_filled_until = Some(now + ORDER_FILLED_BANNER);
    }

    /// Drops cues whose deadline has passed. Returns true if anything changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.flash.is_some_and(|f| now >= f.expires_at) {
            self.flash = None;
            changed = true;
        }
        if self.order_filled_until.is_some_and(|until| now >= until) {
            self.order_filled_until = None;
            changed = true;
        }

        changed
    }

    pub fn clear(&mut self) {
        self.flash = None;
        self.order_filled_until = None;
    }

    pub fn current_flash(&self) -> Option<Flash> {
        self.flash
    }

    pub fn showing_order_filled(&self) -> bool {
        self.order_filled_until.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.flash.is_some() || self.order_filled_until.is_some()
    }
}
