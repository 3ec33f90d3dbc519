pub mod config;
pub mod error;
pub mod types;

pub use config::{EngineConfig, StrategyProfile};
pub use error::{EngineError, Result};
