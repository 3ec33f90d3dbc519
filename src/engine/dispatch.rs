//! Mobile unit dispatch policy
//!
//! A fixed-precedence decision table evaluated once per turn:
//! finishing burst, anti-turtle assault, then the default wave cadence.
//! Every path checks affordability against the facade first; an
//! unaffordable dispatch is skipped, not retried.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::board::BoardView;
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::types::{DeploymentIntent, UnitKind};
use crate::engine::posture::Posture;
use crate::engine::threat;

/// Spawn count for burst and wave intents; the facade truncates it to the
/// affordable number.
const FLOOD_COUNT: u32 = 1000;

pub struct MobileDispatch {
    rng: ChaCha8Rng,
}

impl MobileDispatch {
    /// The RNG stream drives only the wave archetype choice; the seed is
    /// supplied by the caller so runs are reproducible.
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }

    /// Queue this turn's mobile intents onto the batch.
    pub fn plan(
        &mut self,
        board: &dyn BoardView,
        config: &EngineConfig,
        posture: &Posture,
        health_dropped: bool,
        batch: &mut Vec<DeploymentIntent>,
    ) -> Result<()> {
        // 1. Opportunistic finish: their health just hit a new low and we
        // can field a real burst.
        if health_dropped
            && board.affordable_count(UnitKind::Scout) > config.thresholds.scout_burst
        {
            tracing::debug!("dispatch: scout burst on health drop");
            batch.push(DeploymentIntent::spawn(
                UnitKind::Scout,
                config.lanes.finishing,
                FLOOD_COUNT,
            ));
            return Ok(());
        }

        // 2. Anti-turtle assault.
        if posture.building_supports {
            let lane = if posture.left_heavy {
                config.lanes.assault_right
            } else {
                config.lanes.assault_left
            };
            let kind = if posture.many_turrets {
                UnitKind::Demolisher
            } else {
                UnitKind::Scout
            };
            if board.affordable_count(kind) > 0 {
                tracing::debug!(kind = kind.shorthand(), lane = %lane, "dispatch: anti-turtle");
                batch.push(DeploymentIntent::spawn(kind, lane, FLOOD_COUNT));
            } else {
                tracing::warn!(kind = kind.shorthand(), "dispatch: anti-turtle unaffordable, skipped");
            }
            return Ok(());
        }

        // 3. Default cadence wave.
        if board.turn_number() % config.dispatch.wave_period == config.dispatch.wave_phase {
            let kind = if self.rng.gen::<f32>() < config.dispatch.demolisher_wave_weight {
                UnitKind::Demolisher
            } else {
                UnitKind::Scout
            };
            if board.affordable_count(kind) > 0 {
                let lane = threat::least_damage_spawn(board, &config.lanes.wave)?;
                tracing::debug!(kind = kind.shorthand(), lane = %lane, "dispatch: cadence wave");
                batch.push(DeploymentIntent::spawn(kind, lane, FLOOD_COUNT));
            } else {
                tracing::debug!(kind = kind.shorthand(), "dispatch: wave unaffordable, skipped");
            }
        }

        Ok(())
    }
}
