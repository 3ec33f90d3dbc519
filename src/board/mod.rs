//! Board Query Facade seam
//!
//! The map representation, pathfinding, combat simulation, and resource
//! accounting are external collaborators. The engine reads them through
//! [`BoardView`], a read-only per-turn snapshot, and never mutates board
//! state directly; it only returns intent batches.

pub mod memory;

pub use memory::MemoryBoard;

use crate::core::types::{Coordinate, Player, Turn, UnitKind};

/// A unit as reported by the current board snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSnapshot {
    pub kind: UnitKind,
    pub owner: Player,
    pub at: Coordinate,
    pub health: f32,
    pub upgraded: bool,
}

/// Read-only view of the board for the current turn.
///
/// All queries are synchronous in-memory reads; implementations must answer
/// consistently for the duration of the turn.
pub trait BoardView {
    /// Current turn number (1 is the first turn).
    fn turn_number(&self) -> Turn;

    /// Opponent's current health.
    fn enemy_health(&self) -> f32;

    /// How many units of `kind` the remaining resource pool affords.
    fn affordable_count(&self, kind: UnitKind) -> u32;

    /// Every coordinate holding at least one unit.
    fn occupied(&self) -> Vec<Coordinate>;

    /// Stationary units at a coordinate.
    fn stationary_units_at(&self, at: Coordinate) -> Vec<UnitSnapshot>;

    fn contains_stationary_unit(&self, at: Coordinate) -> bool {
        !self.stationary_units_at(at).is_empty()
    }

    /// Path a mobile unit spawned at `from` will traverse to the opposite
    /// edge under the engine's deterministic movement rule.
    fn path_to_edge(&self, from: Coordinate) -> Vec<Coordinate>;

    /// Opponent stationary units currently able to attack `at`.
    fn attackers_of(&self, at: Coordinate) -> Vec<UnitSnapshot>;
}
