//! Rampart - per-turn decision engine for grid tower-defense combat
//!
//! The engine decides, once per turn, what to build and where: a phased
//! defense-construction policy, an enemy-posture classifier, and a
//! least-risk spawn evaluator for mobile units. The combat simulator, map
//! pathfinding, and resource accounting live on the other side of the
//! [`board::BoardView`] seam.

pub mod board;
pub mod core;
pub mod engine;
pub mod harness;
pub mod protocol;
