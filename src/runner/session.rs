//! Score and speed for one run.

use crate::core::config::GameConfig;

/// Progression state of a single run. Built fresh on every Game-scene entry.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    /// Accumulated score (fractional; shown floored).
    pub score: f64,
    /// Current fall speed handed to new obstacles.
    pub speed: f64,
    /// Seconds survived.
    pub elapsed: f64,

    score_rate: f64,
    accel_rate: f64,
    speed_max: f64,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0.0,
            speed: config.speed_start.min(config.speed_max),
            elapsed: 0.0,
            score_rate: config.score_rate,
            accel_rate: config.accel_rate,
            speed_max: config.speed_max,
        }
    }

    /// Accrue score and speed for one frame. Negative deltas count as zero.
    pub fn advance(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        self.elapsed += dt;
        self.score += dt * self.score_rate;
        self.speed = (self.speed + dt * self.accel_rate).min(self.speed_max);
    }

    /// Score as shown to the player.
    pub fn display_score(&self) -> u64 {
        self.score.floor() as u64
    }

    pub fn speed_max(&self) -> f64 {
        self.speed_max
    }
}
