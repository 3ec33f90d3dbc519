//! Full-turn engine scenarios against the in-memory board facade

use rampart::board::{BoardView, MemoryBoard};
use rampart::core::config::EngineConfig;
use rampart::core::types::{Coordinate, DeploymentIntent, Player, UnitKind};
use rampart::engine::TurnEngine;

fn board_at_turn(config: &EngineConfig, turn: u32) -> MemoryBoard {
    let mut board = MemoryBoard::new(config.clone());
    board.set_turn(turn);
    board
}

#[test]
fn test_match_opening_sequence() {
    let config = EngineConfig::default();
    let mut engine = TurnEngine::new(config.clone(), 42);

    // Turn 1: bootstrap only
    let mut board = board_at_turn(&config, 1);
    board.set_resources(40.0, 5.0);
    let batch = engine.plan_turn(&board).unwrap();
    assert_eq!(batch.len(), config.layout.support_core.len() * 2);

    // Turn 2: ramp construction plus the first cadence wave
    let mut board = board_at_turn(&config, 2);
    board.set_resources(30.0, 9.0);
    let batch = engine.plan_turn(&board).unwrap();
    assert!(batch.len() > config.layout.support_core.len() * 2);
    let wave: Vec<_> = batch
        .iter()
        .filter(|intent| {
            matches!(
                intent,
                DeploymentIntent::Spawn { kind, .. } if kind.is_mobile()
            )
        })
        .collect();
    assert_eq!(wave.len(), 1, "exactly one mobile wave on a cadence turn");

    // Mobile intents come after every construction intent
    let last_structure = batch
        .iter()
        .rposition(|intent| {
            matches!(
                intent,
                DeploymentIntent::Spawn { kind, .. } if kind.is_stationary()
            )
        })
        .unwrap();
    let first_mobile = batch
        .iter()
        .position(|intent| {
            matches!(
                intent,
                DeploymentIntent::Spawn { kind, .. } if kind.is_mobile()
            )
        })
        .unwrap();
    assert!(last_structure < first_mobile);
}

#[test]
fn test_watermark_survives_across_turns_and_never_rises() {
    let config = EngineConfig::default();
    let mut engine = TurnEngine::new(config.clone(), 42);

    let healths = [30.0, 28.5, 28.5, 29.0, 21.0, 21.0];
    let mut previous = f32::MAX;
    for (i, &health) in healths.iter().enumerate() {
        let mut board = board_at_turn(&config, i as u32 + 1);
        board.set_enemy_health(health);
        engine.plan_turn(&board).unwrap();

        let low = engine.watermark().lowest();
        assert!(low <= previous);
        previous = low;
    }
    assert_eq!(engine.watermark().lowest(), 21.0);
}

#[test]
fn test_breach_history_feeds_reactive_defense() {
    let mut config = EngineConfig::default();
    config.reactive_defense = true;
    let mut engine = TurnEngine::new(config.clone(), 42);

    // Two opponent breaches at the same cell across separate frames, one
    // breach of ours in between.
    engine
        .on_action_frame(r#"{"events": {"breach": [[[12, 0], 5.0, 3, "9", 2]]}}"#)
        .unwrap();
    engine
        .on_action_frame(r#"{"events": {"breach": [[[5, 14], 5.0, 3, "2", 1]]}}"#)
        .unwrap();
    engine
        .on_action_frame(r#"{"events": {"breach": [[[12, 0], 5.0, 3, "17", 2]]}}"#)
        .unwrap();
    assert_eq!(engine.breach_log().len(), 2);

    let board = board_at_turn(&config, 6);
    let batch = engine.plan_turn(&board).unwrap();
    let patches = batch
        .iter()
        .filter(|&intent| {
            *intent == DeploymentIntent::spawn(UnitKind::Turret, Coordinate::new(12, 1), 1)
        })
        .count();
    // One patch intent per historical breach, repeats included
    assert_eq!(patches, 2);
}

#[test]
fn test_turtling_with_turret_wall_sends_demolishers() {
    let config = EngineConfig::default();
    let mut engine = TurnEngine::new(config.clone(), 42);

    let mut board = board_at_turn(&config, 4);
    board.set_resources(0.0, 9.0);
    for x in 8..14 {
        board.place(UnitKind::Support, Player::Enemy, Coordinate::new(x, 15));
    }
    for i in 0..31 {
        board.place(
            UnitKind::Turret,
            Player::Enemy,
            Coordinate::new(i % 28, 16 + i / 28),
        );
    }

    let batch = engine.plan_turn(&board).unwrap();
    assert!(batch.contains(&DeploymentIntent::spawn(
        UnitKind::Demolisher,
        config.lanes.assault_left,
        1000
    )));
}

#[test]
fn test_identical_seeds_produce_identical_matches() {
    let config = EngineConfig::default();

    let run = |seed: u64| -> Vec<Vec<DeploymentIntent>> {
        let mut engine = TurnEngine::new(config.clone(), seed);
        (1..=12)
            .map(|turn| {
                let mut board = board_at_turn(&config, turn);
                board.set_resources(20.0, 15.0);
                engine.plan_turn(&board).unwrap()
            })
            .collect()
    };

    assert_eq!(run(7), run(7));
}

#[test]
fn test_board_snapshot_is_never_mutated() {
    let config = EngineConfig::default();
    let mut engine = TurnEngine::new(config.clone(), 42);

    let mut board = board_at_turn(&config, 5);
    board.set_resources(12.0, 12.0);
    board.place(UnitKind::Turret, Player::Enemy, Coordinate::new(13, 20));

    let before = board.occupied().len();
    engine.plan_turn(&board).unwrap();
    engine.plan_turn(&board).unwrap();
    assert_eq!(board.occupied().len(), before);
}
