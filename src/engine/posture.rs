//! Enemy posture classification
//!
//! One parameterized scan over the snapshot backs every derived predicate.
//! Posture is recomputed fresh each turn; it carries no memory of previous
//! turns.

use crate::board::BoardView;
use crate::core::config::EngineConfig;
use crate::core::types::{Player, UnitKind};

/// Filter for counting opponent stationary units. An absent field matches
/// everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitFilter<'a> {
    pub kind: Option<UnitKind>,
    pub xs: Option<&'a [i32]>,
    pub ys: Option<&'a [i32]>,
}

impl<'a> UnitFilter<'a> {
    pub fn kind(kind: UnitKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn region(xs: &'a [i32], ys: &'a [i32]) -> Self {
        Self {
            kind: None,
            xs: Some(xs),
            ys: Some(ys),
        }
    }
}

/// Count opponent stationary units matching all supplied filters.
pub fn count_enemy_units(board: &dyn BoardView, filter: &UnitFilter<'_>) -> u32 {
    let mut total = 0;
    for at in board.occupied() {
        for unit in board.stationary_units_at(at) {
            if unit.owner != Player::Enemy {
                continue;
            }
            if filter.kind.is_some_and(|kind| unit.kind != kind) {
                continue;
            }
            if filter.xs.is_some_and(|xs| !xs.contains(&at.x)) {
                continue;
            }
            if filter.ys.is_some_and(|ys| !ys.contains(&at.y)) {
                continue;
            }
            total += 1;
        }
    }
    total
}

/// This turn's classification of the opponent's build pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posture {
    pub support_count: u32,
    pub turret_count: u32,
    pub left_count: u32,
    pub right_count: u32,
    /// Left-quadrant unit count strictly exceeds the right quadrant.
    pub left_heavy: bool,
    /// Support count above the rush threshold: the opponent is turtling.
    pub building_supports: bool,
    /// Turret count above the heavy threshold: scouts will not get through.
    pub many_turrets: bool,
}

impl Posture {
    pub fn assess(board: &dyn BoardView, config: &EngineConfig) -> Self {
        let support_count = count_enemy_units(board, &UnitFilter::kind(UnitKind::Support));
        let turret_count = count_enemy_units(board, &UnitFilter::kind(UnitKind::Turret));
        let left_count = count_enemy_units(
            board,
            &UnitFilter::region(&config.quadrants.left_xs, &config.quadrants.ys),
        );
        let right_count = count_enemy_units(
            board,
            &UnitFilter::region(&config.quadrants.right_xs, &config.quadrants.ys),
        );

        Self {
            support_count,
            turret_count,
            left_count,
            right_count,
            left_heavy: left_count > right_count,
            building_supports: support_count > config.thresholds.support_rush,
            many_turrets: turret_count > config.thresholds.turret_heavy,
        }
    }
}
