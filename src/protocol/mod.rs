//! Frame protocol decoding
//!
//! Two frame shapes arrive from the host process:
//!
//! - Action frames carry an `events` object whose `breach` list uses a
//!   fixed positional layout per entry:
//!   `[[x, y], damage, unit type, unit id, owner]`, where owner 1 is the
//!   local player and 2 and up the opponent. That layout is part of the
//!   external protocol and is preserved as-is here.
//! - Turn frames carry the decoded board snapshot the harness feeds to
//!   [`crate::board::MemoryBoard`].
//!
//! A frame missing the `events`/`breach` keys where they are expected is a
//! protocol mismatch and fails the frame rather than being skipped.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{EngineError, Result};
use crate::core::types::{Coordinate, DeploymentIntent, Turn, UnitKind};

/// Owner flag as carried by raw action frames: 1 is the local player,
/// 2 and up the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOwner(pub u64);

impl FrameOwner {
    pub fn is_opponent(self) -> bool {
        self.0 != 1
    }
}

/// A single breach event: a mobile unit reached the defending edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreachEvent {
    pub at: Coordinate,
    pub owner: FrameOwner,
}

/// Decoded end-of-turn action frame, reduced to the events the engine
/// consumes.
#[derive(Debug, Clone, Default)]
pub struct ActionFrame {
    pub breaches: Vec<BreachEvent>,
}

impl ActionFrame {
    pub fn parse(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let events = value
            .get("events")
            .ok_or_else(|| EngineError::Protocol("action frame missing 'events'".to_string()))?;
        let breaches = events
            .get("breach")
            .and_then(Value::as_array)
            .ok_or_else(|| EngineError::Protocol("action frame missing 'breach'".to_string()))?;

        let breaches = breaches
            .iter()
            .map(parse_breach_entry)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { breaches })
    }
}

/// Positional layout: `[[x, y], damage, unit type, unit id, owner]`.
fn parse_breach_entry(entry: &Value) -> Result<BreachEvent> {
    let fields = entry
        .as_array()
        .ok_or_else(|| EngineError::Protocol("breach entry is not a list".to_string()))?;

    let location = fields
        .first()
        .and_then(Value::as_array)
        .ok_or_else(|| EngineError::Protocol("breach entry missing location".to_string()))?;
    let x = location.first().and_then(Value::as_i64);
    let y = location.get(1).and_then(Value::as_i64);
    let (x, y) = match (x, y) {
        (Some(x), Some(y)) => (x as i32, y as i32),
        _ => {
            return Err(EngineError::Protocol(
                "breach location is not an [x, y] pair".to_string(),
            ))
        }
    };

    let owner = fields
        .get(4)
        .and_then(Value::as_u64)
        .ok_or_else(|| EngineError::Protocol("breach entry missing owner flag".to_string()))?;

    Ok(BreachEvent {
        at: Coordinate::new(x, y),
        owner: FrameOwner(owner),
    })
}

/// One unit row of a turn frame snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitRecord {
    pub kind: UnitKind,
    pub owner: u8,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub health: f32,
    #[serde(default)]
    pub upgraded: bool,
}

/// Board snapshot delivered at a turn boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnFrame {
    pub turn: Turn,
    pub enemy_health: f32,
    pub structure_points: f32,
    pub mobility_points: f32,
    #[serde(default)]
    pub units: Vec<UnitRecord>,
}

impl TurnFrame {
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Which kind of frame a raw line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Action,
    Turn,
}

/// Classify a raw frame without fully decoding it.
pub fn classify(value: &Value) -> Result<FrameKind> {
    if value.get("events").is_some() {
        Ok(FrameKind::Action)
    } else if value.get("turn").is_some() {
        Ok(FrameKind::Turn)
    } else {
        Err(EngineError::Protocol(
            "frame is neither an action frame nor a turn frame".to_string(),
        ))
    }
}

/// Serialize an intent batch for submission.
pub fn encode_batch(batch: &[DeploymentIntent]) -> Result<String> {
    Ok(serde_json::to_string(batch)?)
}
