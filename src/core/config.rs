//! Engine configuration with documented policy constants
//!
//! Every tuning value the decision logic consults lives here: unit stats,
//! posture thresholds, phase boundaries, layout coordinate sets, and spawn
//! lanes. The config is built once at match start and passed by reference
//! to all components; nothing here mutates mid-match.
//!
//! Threshold and weight overrides can be loaded from a TOML strategy
//! profile in `data/profiles/`.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::core::types::{Coordinate, Turn, UnitKind};

/// Engine-defined attributes of a unit kind.
///
/// `cost` is charged against the structure resource for stationary kinds
/// and the mobility resource for mobile kinds. `damage` is per shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitStats {
    pub cost: f32,
    pub start_health: f32,
    pub damage: f32,
    pub range: f32,
}

/// Posture classification thresholds.
///
/// These are policy tuning values carried over from the original ruleset;
/// they have no derived rationale and are kept as named constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Opponent support count above which the opponent is "turtling".
    pub support_rush: u32,
    /// Opponent turret count above which demolishers beat scouts.
    pub turret_heavy: u32,
    /// Affordable scout count required for the finishing burst.
    pub scout_burst: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            support_rush: 5,
            turret_heavy: 30,
            scout_burst: 5,
        }
    }
}

/// Turn-number boundaries of the defense construction phases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseSchedule {
    /// Last turn of the bootstrap phase (support core + upgrade only).
    pub bootstrap_final_turn: Turn,
    /// Last turn of the ramp phase; later turns run the mature phase.
    pub ramp_final_turn: Turn,
    /// The support core is re-issued every this many turns during ramp.
    pub support_refresh_interval: Turn,
}

impl Default for PhaseSchedule {
    fn default() -> Self {
        Self {
            bootstrap_final_turn: 1,
            ramp_final_turn: 100,
            support_refresh_interval: 4,
        }
    }
}

/// Mobile-wave cadence and archetype odds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchTuning {
    /// A wave fires on turns where `turn % wave_period == wave_phase`.
    pub wave_period: Turn,
    pub wave_phase: Turn,
    /// Probability of the wave archetype being a demolisher; otherwise a
    /// scout. Drawn from the seeded stream.
    pub demolisher_wave_weight: f32,
}

impl Default for DispatchTuning {
    fn default() -> Self {
        Self {
            wave_period: 3,
            wave_phase: 2,
            demolisher_wave_weight: 0.7,
        }
    }
}

/// Strategy profile loaded from TOML
///
/// Overrides the tunable subset of [`EngineConfig`]. Layouts and lanes are
/// code constants and not profile-addressable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategyProfile {
    /// Name of this profile (set from filename).
    #[serde(default)]
    pub name: String,
    /// Enable turret placement above historical breach coordinates.
    #[serde(default)]
    pub reactive_defense: bool,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub phases: PhaseSchedule,
    #[serde(default)]
    pub dispatch: DispatchTuning,
}

/// Load a strategy profile from `data/profiles/{name}.toml`.
pub fn load_profile(name: &str) -> Result<StrategyProfile> {
    let path = profile_path(name);

    let contents = fs::read_to_string(&path)
        .map_err(|e| EngineError::Config(format!("failed to read profile {:?}: {}", path, e)))?;

    let mut profile: StrategyProfile = toml::from_str(&contents)
        .map_err(|e| EngineError::Config(format!("failed to parse profile TOML: {}", e)))?;

    profile.name = name.to_string();
    Ok(profile)
}

fn profile_path(name: &str) -> PathBuf {
    PathBuf::from("data/profiles").join(format!("{}.toml", name))
}

/// Fixed coordinate sets the Defense Builder places on.
///
/// These are pre-computed layout constants, not search results. The names
/// follow the order they are issued in.
#[derive(Debug, Clone)]
pub struct DefenseLayout {
    /// Four-cell support core placed and upgraded during bootstrap.
    pub support_core: Vec<Coordinate>,
    /// Flank turrets anchoring the front line.
    pub anchor_turrets: Vec<Coordinate>,
    /// Main turret line across rows 10-13.
    pub turret_line: Vec<Coordinate>,
    /// Wall line shielding the turret row.
    pub wall_line: Vec<Coordinate>,
    /// Second support tier behind the core.
    pub second_supports: Vec<Coordinate>,
    /// Diagonal support tier filled during the mature phase.
    pub diagonal_supports: Vec<Coordinate>,
}

impl Default for DefenseLayout {
    fn default() -> Self {
        let mut diagonal_supports: Vec<Coordinate> =
            (0..4).map(|i| Coordinate::new(13 + i, 2 + i)).collect();
        diagonal_supports.extend((0..10).map(|i| Coordinate::new(13 + i, 1 + i)));

        Self {
            support_core: coords(&[[13, 3], [14, 3], [13, 2], [14, 2]]),
            anchor_turrets: coords(&[[3, 12], [24, 12]]),
            turret_line: coords(&[
                [0, 13], [1, 13], [2, 13], [25, 13], [26, 13], [27, 13], [1, 12], [2, 12],
                [3, 12], [4, 12], [25, 12], [26, 12], [2, 11], [3, 11], [4, 11], [5, 11],
                [6, 11], [7, 11], [8, 11], [9, 11], [10, 11], [11, 11], [12, 11], [13, 11],
                [14, 11], [15, 11], [16, 11], [17, 11], [18, 11], [19, 11], [20, 11], [21, 11],
                [22, 11], [24, 11], [25, 11], [24, 10], [23, 9],
            ]),
            wall_line: coords(&[
                [5, 12], [8, 12], [11, 12], [14, 12], [17, 12], [20, 12], [22, 12],
            ]),
            second_supports: coords(&[
                [15, 4], [14, 4], [13, 4], [12, 4], [15, 5], [14, 5], [13, 5], [12, 5],
                [14, 6], [13, 6], [14, 7], [13, 7],
            ]),
            diagonal_supports,
        }
    }
}

/// Fixed spawn lanes for mobile dispatch.
#[derive(Debug, Clone)]
pub struct SpawnLanes {
    /// Lane for the opportunistic scout burst on a health drop.
    pub finishing: Coordinate,
    /// Assault lanes used against a turtling opponent; the right lane is
    /// chosen when the opponent is left-heavy.
    pub assault_left: Coordinate,
    pub assault_right: Coordinate,
    /// Candidate lanes for the cadence wave, ranked by the threat assessor.
    pub wave: Vec<Coordinate>,
}

impl Default for SpawnLanes {
    fn default() -> Self {
        Self {
            finishing: Coordinate::new(12, 1),
            assault_left: Coordinate::new(13, 0),
            assault_right: Coordinate::new(14, 0),
            wave: coords(&[[13, 0], [14, 0]]),
        }
    }
}

/// Region boundaries for the left/right posture comparison.
///
/// Policy constants, not derived from the board dimensions.
#[derive(Debug, Clone)]
pub struct QuadrantBounds {
    pub left_xs: Vec<i32>,
    pub right_xs: Vec<i32>,
    pub ys: Vec<i32>,
}

impl Default for QuadrantBounds {
    fn default() -> Self {
        Self {
            left_xs: (0..=7).collect(),
            right_xs: (20..=27).collect(),
            ys: (14..=17).collect(),
        }
    }
}

/// Complete engine configuration, immutable after match start.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub thresholds: Thresholds,
    pub phases: PhaseSchedule,
    pub dispatch: DispatchTuning,
    pub reactive_defense: bool,
    pub layout: DefenseLayout,
    pub lanes: SpawnLanes,
    pub quadrants: QuadrantBounds,
    /// Arena side length in cells.
    pub board_size: i32,
    /// Opponent health at match start; seeds the watermark.
    pub start_enemy_health: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            phases: PhaseSchedule::default(),
            dispatch: DispatchTuning::default(),
            reactive_defense: false,
            layout: DefenseLayout::default(),
            lanes: SpawnLanes::default(),
            quadrants: QuadrantBounds::default(),
            board_size: 28,
            start_enemy_health: 30.0,
        }
    }
}

impl EngineConfig {
    /// Build a config from a loaded strategy profile.
    pub fn from_profile(profile: &StrategyProfile) -> Self {
        Self {
            thresholds: profile.thresholds.clone(),
            phases: profile.phases.clone(),
            dispatch: profile.dispatch.clone(),
            reactive_defense: profile.reactive_defense,
            ..Self::default()
        }
    }

    /// Engine-defined stats for a unit kind.
    pub const fn stats(kind: UnitKind) -> UnitStats {
        match kind {
            UnitKind::Wall => UnitStats {
                cost: 1.0,
                start_health: 60.0,
                damage: 0.0,
                range: 0.0,
            },
            UnitKind::Support => UnitStats {
                cost: 4.0,
                start_health: 30.0,
                damage: 0.0,
                range: 3.5,
            },
            UnitKind::Turret => UnitStats {
                cost: 2.0,
                start_health: 75.0,
                damage: 5.0,
                range: 2.5,
            },
            UnitKind::Scout => UnitStats {
                cost: 1.0,
                start_health: 15.0,
                damage: 2.0,
                range: 3.5,
            },
            UnitKind::Demolisher => UnitStats {
                cost: 3.0,
                start_health: 5.0,
                damage: 8.0,
                range: 4.5,
            },
            UnitKind::Interceptor => UnitStats {
                cost: 1.0,
                start_health: 40.0,
                damage: 20.0,
                range: 4.5,
            },
        }
    }
}

fn coords(raw: &[[i32; 2]]) -> Vec<Coordinate> {
    raw.iter().map(|&p| Coordinate::from(p)).collect()
}
