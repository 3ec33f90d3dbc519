//! Core type definitions used throughout the engine

use std::fmt;

use serde::{Deserialize, Serialize};

/// Game turn counter. The engine is invoked once per turn boundary.
pub type Turn = u32;

/// Grid coordinate (x, y). Identity is value equality; coordinates have no
/// lifecycle of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell directly above (y + 1). Reactive turrets go here so the breach
    /// cell itself stays free for our own edge spawns.
    pub const fn above(self) -> Self {
        Self {
            x: self.x,
            y: self.y + 1,
        }
    }
}

impl From<[i32; 2]> for Coordinate {
    fn from(p: [i32; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Owner of a unit on the board. Snapshots index the local player as 0 and
/// the opponent as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Own,
    Enemy,
}

impl Player {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Player::Own),
            1 => Some(Player::Enemy),
            _ => None,
        }
    }
}

/// Unit archetypes. Stationary kinds occupy a cell until destroyed or
/// removed; mobile kinds traverse a path and are consumed on impact or on
/// reaching the edge.
///
/// Serialized as the wire shorthand codes the game protocol assigns to each
/// kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    #[serde(rename = "FF")]
    Wall,
    #[serde(rename = "EF")]
    Support,
    #[serde(rename = "DF")]
    Turret,
    #[serde(rename = "PI")]
    Scout,
    #[serde(rename = "EI")]
    Demolisher,
    #[serde(rename = "SI")]
    Interceptor,
}

impl UnitKind {
    pub const fn is_stationary(self) -> bool {
        matches!(self, UnitKind::Wall | UnitKind::Support | UnitKind::Turret)
    }

    pub const fn is_mobile(self) -> bool {
        !self.is_stationary()
    }

    /// Wire shorthand code for this kind.
    pub const fn shorthand(self) -> &'static str {
        match self {
            UnitKind::Wall => "FF",
            UnitKind::Support => "EF",
            UnitKind::Turret => "DF",
            UnitKind::Scout => "PI",
            UnitKind::Demolisher => "EI",
            UnitKind::Interceptor => "SI",
        }
    }

    pub const ALL: [UnitKind; 6] = [
        UnitKind::Wall,
        UnitKind::Support,
        UnitKind::Turret,
        UnitKind::Scout,
        UnitKind::Demolisher,
        UnitKind::Interceptor,
    ];
}

/// A queued build/upgrade/remove command, not yet confirmed by the board
/// facade. Intents are issued in a fixed deterministic order per turn and
/// submitted as one batch; the facade silently drops intents it cannot
/// honor (occupied cell, exhausted resources).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DeploymentIntent {
    Spawn {
        kind: UnitKind,
        at: Coordinate,
        count: u32,
    },
    Upgrade {
        at: Coordinate,
    },
    Remove {
        at: Coordinate,
    },
}

impl DeploymentIntent {
    pub fn spawn(kind: UnitKind, at: Coordinate, count: u32) -> Self {
        DeploymentIntent::Spawn { kind, at, count }
    }

    pub fn upgrade(at: Coordinate) -> Self {
        DeploymentIntent::Upgrade { at }
    }
}
