//! Player controller: lane tracking, the two-phase jump and lane smoothing.

use super::lane::lane_to_x;
use crate::core::config::GameConfig;

/// Where the jump animation is. `elapsed` is seconds into the current phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpPhase {
    Idle,
    /// Scaling up from base to peak (ease-out).
    Rising { elapsed: f64 },
    /// Scaling back down from peak to base (ease-in).
    Falling { elapsed: f64 },
}

/// Scale and timing of a jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpProfile {
    pub base_scale: f64,
    pub peak_scale: f64,
    pub rise_secs: f64,
    pub fall_secs: f64,
}

impl JumpProfile {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            base_scale: config.jump_base_scale,
            peak_scale: config.jump_peak_scale,
            rise_secs: config.jump_rise_secs,
            fall_secs: config.jump_fall_secs,
        }
    }

    /// Total airtime of one jump.
    pub fn duration(&self) -> f64 {
        self.rise_secs + self.fall_secs
    }
}

pub fn ease_out_quad(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Lane the player is heading to (always in range).
    pub lane: u32,
    /// Current rendered X. Trails `target_x()` while changing lanes.
    pub x: f64,
    /// Visual scale, animated by the jump.
    pub scale: f64,
    pub jump: JumpPhase,

    lane_count: u32,
    lane_width: f64,
    lane_smoothing: f64,
    profile: JumpProfile,
}

impl Player {
    /// A grounded player standing in the configured start lane.
    pub fn new(config: &GameConfig) -> Self {
        let lane = config.start_lane.min(config.lane_count.saturating_sub(1));
        let lane_width = config.lane_width();
        let profile = JumpProfile::from_config(config);
        Self {
            lane,
            x: lane_to_x(lane as i64, config.lane_count, lane_width),
            scale: profile.base_scale,
            jump: JumpPhase::Idle,
            lane_count: config.lane_count,
            lane_width,
            lane_smoothing: config.lane_smoothing,
            profile,
        }
    }

    pub fn is_jumping(&self) -> bool {
        !matches!(self.jump, JumpPhase::Idle)
    }

    pub fn profile(&self) -> &JumpProfile {
        &self.profile
    }

    /// Centre X of the lane the player is moving to.
    pub fn target_x(&self) -> f64 {
        lane_to_x(self.lane as i64, self.lane_count, self.lane_width)
    }

    /// Step one lane left. No wraparound.
    pub fn move_left(&mut self) {
        if self.lane > 0 {
            self.lane -= 1;
        }
    }

    /// Step one lane right. No wraparound.
    pub fn move_right(&mut self) {
        if self.lane + 1 < self.lane_count {
            self.lane += 1;
        }
    }

    /// Start a jump. Returns false (and changes nothing) if one is in flight.
    pub fn jump(&mut self) -> bool {
        if self.is_jumping() {
            return false;
        }
        self.jump = JumpPhase::Rising { elapsed: 0.0 };
        self.scale = self.profile.base_scale;
        true
    }

    /// Advance the jump animation and slide toward the target lane.
    pub fn update(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        self.advance_jump(dt);

        let t = (dt * self.lane_smoothing).clamp(0.0, 1.0);
        self.x = lerp(self.x, self.target_x(), t);
    }

    fn advance_jump(&mut self, dt: f64) {
        let JumpProfile {
            base_scale,
            peak_scale,
            rise_secs,
            fall_secs,
        } = self.profile;
        let mut remaining = dt;

        loop {
            match self.jump {
                JumpPhase::Idle => {
                    self.scale = base_scale;
                    return;
                }
                JumpPhase::Rising { elapsed } => {
                    let elapsed = elapsed + remaining;
                    if elapsed >= rise_secs {
                        // Leftover time spills into the falling phase
                        remaining = elapsed - rise_secs;
                        self.jump = JumpPhase::Falling { elapsed: 0.0 };
                        self.scale = peak_scale;
                        continue;
                    }
                    self.jump = JumpPhase::Rising { elapsed };
                    self.scale = lerp(base_scale, peak_scale, ease_out_quad(elapsed / rise_secs));
                    return;
                }
                JumpPhase::Falling { elapsed } => {
                    let elapsed = elapsed + remaining;
                    if elapsed >= fall_secs {
                        self.jump = JumpPhase::Idle;
                        self.scale = base_scale;
                        return;
                    }
                    self.jump = JumpPhase::Falling { elapsed };
                    self.scale = lerp(peak_scale, base_scale, ease_in_quad(elapsed / fall_secs));
                    return;
                }
            }
        }
    }
}
