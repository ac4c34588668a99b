//! Configuration, constants and the scene state machine.

pub mod config;
pub mod constants;
pub mod scene;

pub use config::{ConfigError, Difficulty, GameConfig};
pub use constants::*;
pub use scene::{Scene, SceneInput, SceneMachine};
