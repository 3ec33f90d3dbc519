//! Stdio frame loop
//!
//! Thin adapter between the host process and the engine: one JSON frame per
//! line in, one intent batch per turn frame out. Turn frames are decoded
//! into a [`MemoryBoard`] snapshot; action frames go straight to the breach
//! tracker. A malformed frame aborts the loop, since it indicates a
//! protocol mismatch rather than a transient condition.

use std::io::{BufRead, Write};

use serde_json::Value;

use crate::board::MemoryBoard;
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::engine::TurnEngine;
use crate::protocol::{self, FrameKind, TurnFrame};

pub fn run<R: BufRead, W: Write>(
    engine: &mut TurnEngine,
    config: &EngineConfig,
    input: R,
    mut output: W,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(line)?;
        match protocol::classify(&value)? {
            FrameKind::Action => {
                engine.on_action_frame(line)?;
            }
            FrameKind::Turn => {
                let frame = TurnFrame::parse(line)?;
                let board = MemoryBoard::from_frame(config.clone(), &frame)?;
                let batch = engine.plan_turn(&board)?;
                writeln!(output, "{}", protocol::encode_batch(&batch)?)?;
                output.flush()?;
            }
        }
    }
    tracing::info!("input closed, match over");
    Ok(())
}
