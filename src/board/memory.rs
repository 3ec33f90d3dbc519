//! In-memory board facade
//!
//! Reference implementation of [`BoardView`] used by the stdio harness and
//! the test suite. It stands in for the external simulator: occupancy and
//! resources come from the decoded turn frame, `path_to_edge` advances
//! straight across the arena, and `attackers_of` does a range scan over
//! opponent turrets. The engine itself only ever sees the trait.

use ahash::AHashMap;

use crate::board::{BoardView, UnitSnapshot};
use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::{Coordinate, Player, Turn, UnitKind};
use crate::protocol::TurnFrame;

#[derive(Debug, Clone)]
pub struct MemoryBoard {
    config: EngineConfig,
    units: AHashMap<Coordinate, Vec<UnitSnapshot>>,
    turn: Turn,
    enemy_health: f32,
    structure_points: f32,
    mobility_points: f32,
}

impl MemoryBoard {
    pub fn new(config: EngineConfig) -> Self {
        let enemy_health = config.start_enemy_health;
        Self {
            config,
            units: AHashMap::new(),
            turn: 1,
            enemy_health,
            structure_points: 0.0,
            mobility_points: 0.0,
        }
    }

    /// Build a board from a decoded turn frame.
    pub fn from_frame(config: EngineConfig, frame: &TurnFrame) -> Result<Self> {
        let mut board = Self::new(config);
        board.turn = frame.turn;
        board.enemy_health = frame.enemy_health;
        board.structure_points = frame.structure_points;
        board.mobility_points = frame.mobility_points;

        for record in &frame.units {
            let owner = Player::from_index(record.owner).ok_or_else(|| {
                EngineError::Protocol(format!("unknown unit owner index {}", record.owner))
            })?;
            board.place_full(
                record.kind,
                owner,
                Coordinate::new(record.x, record.y),
                record.health,
                record.upgraded,
            );
        }
        Ok(board)
    }

    pub fn set_turn(&mut self, turn: Turn) {
        self.turn = turn;
    }

    pub fn set_enemy_health(&mut self, health: f32) {
        self.enemy_health = health;
    }

    pub fn set_resources(&mut self, structure: f32, mobility: f32) {
        self.structure_points = structure;
        self.mobility_points = mobility;
    }

    /// Place a unit at full health.
    pub fn place(&mut self, kind: UnitKind, owner: Player, at: Coordinate) {
        let health = EngineConfig::stats(kind).start_health;
        self.place_full(kind, owner, at, health, false);
    }

    pub fn place_full(
        &mut self,
        kind: UnitKind,
        owner: Player,
        at: Coordinate,
        health: f32,
        upgraded: bool,
    ) {
        self.units.entry(at).or_default().push(UnitSnapshot {
            kind,
            owner,
            at,
            health,
            upgraded,
        });
    }
}

impl BoardView for MemoryBoard {
    fn turn_number(&self) -> Turn {
        self.turn
    }

    fn enemy_health(&self) -> f32 {
        self.enemy_health
    }

    fn affordable_count(&self, kind: UnitKind) -> u32 {
        let stats = EngineConfig::stats(kind);
        if stats.cost <= 0.0 {
            return 0;
        }
        let pool = if kind.is_stationary() {
            self.structure_points
        } else {
            self.mobility_points
        };
        (pool / stats.cost).floor() as u32
    }

    fn occupied(&self) -> Vec<Coordinate> {
        self.units
            .iter()
            .filter(|(_, units)| !units.is_empty())
            .map(|(&at, _)| at)
            .collect()
    }

    fn stationary_units_at(&self, at: Coordinate) -> Vec<UnitSnapshot> {
        self.units
            .get(&at)
            .map(|units| {
                units
                    .iter()
                    .filter(|u| u.kind.is_stationary())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn path_to_edge(&self, from: Coordinate) -> Vec<Coordinate> {
        // Straight advance toward the opponent's edge. The production
        // simulator routes around structures; this stand-in keeps the risk
        // scoring exercisable without it.
        let top = self.config.board_size - 1;
        (from.y..=top).map(|y| Coordinate::new(from.x, y)).collect()
    }

    fn attackers_of(&self, at: Coordinate) -> Vec<UnitSnapshot> {
        self.units
            .values()
            .flatten()
            .filter(|u| u.owner == Player::Enemy && u.kind == UnitKind::Turret)
            .filter(|u| {
                let range = EngineConfig::stats(u.kind).range;
                let dx = (u.at.x - at.x) as f32;
                let dy = (u.at.y - at.y) as f32;
                dx * dx + dy * dy <= range * range
            })
            .cloned()
            .collect()
    }
}
