//! Least-risk spawn assessment
//!
//! Scores candidate spawn points by the damage a mobile unit would absorb
//! along its path to the edge. Pure computation over the snapshot; safe to
//! call any number of times per turn.

use crate::board::BoardView;
use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::types::{Coordinate, UnitKind};

/// Pick the candidate whose path absorbs the least turret damage.
///
/// Risk of a candidate is the sum over its path cells of
/// `attackers × turret per-shot damage`. Ties resolve to the earliest
/// candidate in input order. An empty candidate set is an input error,
/// never an arbitrary coordinate.
pub fn least_damage_spawn(
    board: &dyn BoardView,
    candidates: &[Coordinate],
) -> Result<Coordinate> {
    let first = *candidates.first().ok_or_else(|| {
        EngineError::InvalidInput("no spawn candidates to assess".to_string())
    })?;

    let per_shot = EngineConfig::stats(UnitKind::Turret).damage;

    let mut best = first;
    let mut best_risk = f32::MAX;
    for &candidate in candidates {
        let risk: f32 = board
            .path_to_edge(candidate)
            .into_iter()
            .map(|cell| board.attackers_of(cell).len() as f32 * per_shot)
            .sum();
        if risk < best_risk {
            best_risk = risk;
            best = candidate;
        }
    }

    tracing::trace!(spawn = %best, risk = best_risk, "least-damage spawn");
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MemoryBoard;
    use crate::core::types::Player;

    #[test]
    fn test_empty_candidates_is_invalid_input() {
        let board = MemoryBoard::new(EngineConfig::default());
        let err = least_damage_spawn(&board, &[]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_returns_member_of_input() {
        let mut board = MemoryBoard::new(EngineConfig::default());
        board.place(UnitKind::Turret, Player::Enemy, Coordinate::new(13, 20));

        let candidates = [
            Coordinate::new(11, 2),
            Coordinate::new(13, 2),
            Coordinate::new(16, 2),
        ];
        let chosen = least_damage_spawn(&board, &candidates).unwrap();
        assert!(candidates.contains(&chosen));
    }

    #[test]
    fn test_no_attackers_ties_to_first_candidate() {
        let board = MemoryBoard::new(EngineConfig::default());
        let candidates = [Coordinate::new(14, 0), Coordinate::new(13, 0)];
        assert_eq!(
            least_damage_spawn(&board, &candidates).unwrap(),
            Coordinate::new(14, 0)
        );
    }

    #[test]
    fn test_avoids_covered_lane() {
        let mut board = MemoryBoard::new(EngineConfig::default());
        // Turret covering the x=11 lane, far from x=16
        board.place(UnitKind::Turret, Player::Enemy, Coordinate::new(11, 20));

        let candidates = [Coordinate::new(11, 2), Coordinate::new(16, 2)];
        assert_eq!(
            least_damage_spawn(&board, &candidates).unwrap(),
            Coordinate::new(16, 2)
        );
    }

    #[test]
    fn test_strictly_smaller_risk_wins_over_order() {
        let mut board = MemoryBoard::new(EngineConfig::default());
        board.place(UnitKind::Turret, Player::Enemy, Coordinate::new(13, 20));

        // First candidate runs straight through the covered column
        let candidates = [Coordinate::new(13, 2), Coordinate::new(2, 2)];
        assert_eq!(
            least_damage_spawn(&board, &candidates).unwrap(),
            Coordinate::new(2, 2)
        );
    }
}
