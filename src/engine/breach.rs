//! Breach history and the enemy health watermark
//!
//! The only two values that persist across turns. Both are owned by the
//! engine instance and touched only from the single turn-processing path.

use crate::core::types::Coordinate;
use crate::protocol::ActionFrame;

/// Append-only record of coordinates where the opponent's mobile units
/// breached our edge. Never pruned; repeated coordinates are kept, each one
/// was a separate breach.
#[derive(Debug, Clone, Default)]
pub struct BreachLog {
    locations: Vec<Coordinate>,
}

impl BreachLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the opponent-owned breaches of an action frame, in event
    /// order. Safe to call once per frame however the host batches frames.
    pub fn record(&mut self, frame: &ActionFrame) {
        for breach in &frame.breaches {
            if breach.owner.is_opponent() {
                tracing::debug!(at = %breach.at, "scored on");
                self.locations.push(breach.at);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Lowest opponent health observed so far this match.
#[derive(Debug, Clone)]
pub struct HealthWatermark {
    lowest: f32,
}

impl HealthWatermark {
    pub fn new(start: f32) -> Self {
        Self { lowest: start }
    }

    /// Fold in this turn's observation. Returns true exactly when health
    /// dropped below the previous low, which arms the finishing burst.
    pub fn observe(&mut self, health: f32) -> bool {
        if health < self.lowest {
            self.lowest = health;
            true
        } else {
            false
        }
    }

    pub fn lowest(&self) -> f32 {
        self.lowest
    }
}
