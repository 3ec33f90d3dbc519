//! Turn orchestration
//!
//! [`TurnEngine`] owns the two values that persist across turns (the breach
//! log and the enemy health watermark) and sequences the per-turn pipeline:
//! watermark update, posture assessment, defense construction, mobile
//! dispatch. Each call returns the accumulated intent batch for submission;
//! turns are otherwise independent.

pub mod breach;
pub mod defense;
pub mod dispatch;
pub mod posture;
pub mod threat;

pub use breach::{BreachLog, HealthWatermark};
pub use dispatch::MobileDispatch;
pub use posture::{count_enemy_units, Posture, UnitFilter};
pub use threat::least_damage_spawn;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::BoardView;
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::types::DeploymentIntent;
use crate::engine::defense::DefenseBuilder;

pub struct TurnEngine {
    config: EngineConfig,
    dispatch: MobileDispatch,
    breach_log: BreachLog,
    watermark: HealthWatermark,
}

impl TurnEngine {
    /// Create an engine for one match. The seed feeds the archetype stream
    /// and should be logged by the caller for reproducibility.
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        let watermark = HealthWatermark::new(config.start_enemy_health);
        Self {
            config,
            dispatch: MobileDispatch::new(ChaCha8Rng::seed_from_u64(seed)),
            breach_log: BreachLog::new(),
            watermark,
        }
    }

    /// Plan one turn and return the intent batch, in submission order.
    pub fn plan_turn(&mut self, board: &dyn BoardView) -> Result<Vec<DeploymentIntent>> {
        let turn = board.turn_number();
        let health_dropped = self.watermark.observe(board.enemy_health());
        let posture = Posture::assess(board, &self.config);
        tracing::debug!(
            turn,
            health_dropped,
            supports = posture.support_count,
            turrets = posture.turret_count,
            "assessed opponent"
        );

        let mut batch = Vec::new();
        DefenseBuilder::new(&self.config).plan(board, &self.breach_log, &mut batch);
        self.dispatch
            .plan(board, &self.config, &posture, health_dropped, &mut batch)?;

        tracing::debug!(turn, intents = batch.len(), "turn planned");
        Ok(batch)
    }

    /// Feed an intra-turn action frame; records opponent breaches.
    pub fn on_action_frame(&mut self, raw: &str) -> Result<()> {
        let frame = crate::protocol::ActionFrame::parse(raw)?;
        self.breach_log.record(&frame);
        Ok(())
    }

    pub fn breach_log(&self) -> &BreachLog {
        &self.breach_log
    }

    pub fn watermark(&self) -> &HealthWatermark {
        &self.watermark
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
