//! Phased defense construction
//!
//! A state machine keyed on the turn number. Each phase issues a fixed,
//! ordered list of intents against layout constants; there is no search.
//! Re-running a phase is safe: the facade treats a spawn on an occupied
//! cell as a no-op, so the same lists are re-issued each turn and only the
//! gaps get filled.

use crate::board::BoardView;
use crate::core::config::EngineConfig;
use crate::core::types::{Coordinate, DeploymentIntent, UnitKind};
use crate::engine::breach::BreachLog;

/// Issues construction intents for the current turn's phase.
pub struct DefenseBuilder<'a> {
    config: &'a EngineConfig,
}

impl<'a> DefenseBuilder<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Queue this turn's construction intents onto the batch.
    pub fn plan(&self, board: &dyn BoardView, history: &BreachLog, batch: &mut Vec<DeploymentIntent>) {
        let turn = board.turn_number();
        let phases = &self.config.phases;

        if turn <= phases.bootstrap_final_turn {
            tracing::debug!(turn, phase = "bootstrap", "defense phase");
            self.bootstrap(batch);
        } else if turn <= phases.ramp_final_turn {
            tracing::debug!(turn, phase = "ramp", "defense phase");
            self.ramp(turn, batch);
        } else {
            tracing::debug!(turn, phase = "mature", "defense phase");
            self.mature(batch);
        }

        if self.config.reactive_defense {
            self.reactive(history, batch);
        }
    }

    /// Turn 1: place the support core and upgrade it. Nothing else.
    fn bootstrap(&self, batch: &mut Vec<DeploymentIntent>) {
        spawn_each(batch, UnitKind::Support, &self.config.layout.support_core);
        upgrade_each(batch, &self.config.layout.support_core);
    }

    /// Turns 2..=ramp_final_turn: anchor and line turrets, walls, then the
    /// second support tier. The support core is re-issued on refresh turns
    /// to replace losses.
    fn ramp(&self, turn: u32, batch: &mut Vec<DeploymentIntent>) {
        let layout = &self.config.layout;

        spawn_each(batch, UnitKind::Turret, &layout.anchor_turrets);
        spawn_each(batch, UnitKind::Turret, &layout.turret_line);
        upgrade_each(batch, &layout.support_core);
        spawn_each(batch, UnitKind::Wall, &layout.wall_line);
        if turn % self.config.phases.support_refresh_interval == 0 {
            spawn_each(batch, UnitKind::Support, &layout.support_core);
        }
        upgrade_each(batch, &layout.second_supports);
        spawn_each(batch, UnitKind::Support, &layout.second_supports);
    }

    /// Turns past the ramp: prioritize upgrades and fill the diagonal tier.
    fn mature(&self, batch: &mut Vec<DeploymentIntent>) {
        let layout = &self.config.layout;

        upgrade_each(batch, &layout.turret_line);
        upgrade_each(batch, &layout.wall_line);
        upgrade_each(batch, &layout.second_supports);
        spawn_each(batch, UnitKind::Support, &layout.diagonal_supports);
        upgrade_each(batch, &layout.diagonal_supports);
    }

    /// Reactive variant: a turret one cell above every historical breach,
    /// keeping the breached spawn cell itself free.
    fn reactive(&self, history: &BreachLog, batch: &mut Vec<DeploymentIntent>) {
        for &scored_at in history.iter() {
            batch.push(DeploymentIntent::spawn(UnitKind::Turret, scored_at.above(), 1));
        }
    }
}

fn spawn_each(batch: &mut Vec<DeploymentIntent>, kind: UnitKind, coords: &[Coordinate]) {
    for &at in coords {
        batch.push(DeploymentIntent::spawn(kind, at, 1));
    }
}

fn upgrade_each(batch: &mut Vec<DeploymentIntent>, coords: &[Coordinate]) {
    for &at in coords {
        batch.push(DeploymentIntent::upgrade(at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MemoryBoard;
    use crate::protocol::{ActionFrame, BreachEvent, FrameOwner};

    fn batch_for_turn(config: &EngineConfig, turn: u32) -> Vec<DeploymentIntent> {
        let mut board = MemoryBoard::new(config.clone());
        board.set_turn(turn);
        let mut batch = Vec::new();
        DefenseBuilder::new(config).plan(&board, &BreachLog::new(), &mut batch);
        batch
    }

    #[test]
    fn test_bootstrap_is_support_core_and_upgrades_only() {
        let config = EngineConfig::default();
        let batch = batch_for_turn(&config, 1);

        let expected: Vec<DeploymentIntent> = config
            .layout
            .support_core
            .iter()
            .map(|&at| DeploymentIntent::spawn(UnitKind::Support, at, 1))
            .chain(
                config
                    .layout
                    .support_core
                    .iter()
                    .map(|&at| DeploymentIntent::upgrade(at)),
            )
            .collect();
        assert_eq!(batch, expected);
    }

    #[test]
    fn test_ramp_orders_turrets_before_walls() {
        let config = EngineConfig::default();
        let batch = batch_for_turn(&config, 5);

        let first_turret = batch
            .iter()
            .position(|i| matches!(i, DeploymentIntent::Spawn { kind: UnitKind::Turret, .. }))
            .unwrap();
        let first_wall = batch
            .iter()
            .position(|i| matches!(i, DeploymentIntent::Spawn { kind: UnitKind::Wall, .. }))
            .unwrap();
        assert!(first_turret < first_wall);
    }

    #[test]
    fn test_ramp_refreshes_support_core_periodically() {
        let config = EngineConfig::default();
        let core_spawn =
            DeploymentIntent::spawn(UnitKind::Support, config.layout.support_core[0], 1);

        // Interval is 4: turn 8 refreshes, turn 9 does not
        assert!(batch_for_turn(&config, 8).contains(&core_spawn));
        assert!(!batch_for_turn(&config, 9).contains(&core_spawn));
    }

    #[test]
    fn test_mature_spawns_diagonal_tier() {
        let config = EngineConfig::default();
        let batch = batch_for_turn(&config, config.phases.ramp_final_turn + 1);

        assert!(batch.contains(&DeploymentIntent::spawn(
            UnitKind::Support,
            Coordinate::new(13, 2),
            1
        )));
        // No fresh turret line in the mature phase, only upgrades
        assert!(!batch
            .iter()
            .any(|i| matches!(i, DeploymentIntent::Spawn { kind: UnitKind::Turret, .. })));
    }

    #[test]
    fn test_reactive_builds_above_each_breach() {
        let mut config = EngineConfig::default();
        config.reactive_defense = true;

        let mut history = BreachLog::new();
        history.record(&ActionFrame {
            breaches: vec![
                BreachEvent {
                    at: Coordinate::new(12, 0),
                    owner: FrameOwner(2),
                },
                BreachEvent {
                    at: Coordinate::new(20, 6),
                    owner: FrameOwner(2),
                },
            ],
        });

        let mut board = MemoryBoard::new(config.clone());
        board.set_turn(5);
        let mut batch = Vec::new();
        DefenseBuilder::new(&config).plan(&board, &history, &mut batch);

        assert!(batch.contains(&DeploymentIntent::spawn(
            UnitKind::Turret,
            Coordinate::new(12, 1),
            1
        )));
        assert!(batch.contains(&DeploymentIntent::spawn(
            UnitKind::Turret,
            Coordinate::new(20, 7),
            1
        )));
    }

    #[test]
    fn test_reactive_disabled_by_default() {
        let config = EngineConfig::default();
        let mut history = BreachLog::new();
        history.record(&ActionFrame {
            breaches: vec![BreachEvent {
                at: Coordinate::new(12, 0),
                owner: FrameOwner(2),
            }],
        });

        let mut board = MemoryBoard::new(config.clone());
        board.set_turn(5);
        let mut batch = Vec::new();
        DefenseBuilder::new(&config).plan(&board, &history, &mut batch);

        assert!(!batch.contains(&DeploymentIntent::spawn(
            UnitKind::Turret,
            Coordinate::new(12, 1),
            1
        )));
    }
}
