//! Camera shake magnitude with exponential decay.

use rand::Rng;

const DECAY_CUTOFF: f64 = 0.01;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraShake {
    pub magnitude: f64,
    decay_rate: f64,
}

impl CameraShake {
    pub fn new(decay_rate: f64) -> Self {
        Self {
            magnitude: 0.0,
            decay_rate,
        }
    }

    /// Kick the camera. Shakes stack.
    pub fn add(&mut self, amount: f64) {
        self.magnitude += amount.max(0.0);
    }

    pub fn update(&mut self, dt: f64) {
        let t = (dt.max(0.0) * self.decay_rate).clamp(0.0, 1.0);
        self.magnitude -= self.magnitude * t;
        if self.magnitude < DECAY_CUTOFF {
            self.magnitude = 0.0;
        }
    }

    pub fn is_active(&self) -> bool {
        self.magnitude > 0.0
    }

    /// Random displacement within the current magnitude on each axis.
    pub fn offset<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        if !self.is_active() {
            return (0.0, 0.0);
        }
        let m = self.magnitude;
        (rng.gen_range(-m..=m), rng.gen_range(-m..=m))
    }
}
