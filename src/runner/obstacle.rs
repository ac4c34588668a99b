//! Obstacles and the interval spawner.

use super::lane::lane_to_x;
use crate::core::config::GameConfig;
use rand::Rng;

/// What the player has to do to survive an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Low barrier: jump over it.
    Barricade,
    /// Full block: only changing lane avoids it.
    Block,
}

impl ObstacleKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Barricade => "barricade",
            Self::Block => "block",
        }
    }
}

/// A single obstacle falling down one lane.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Unique within a run; used to track ongoing contacts.
    pub id: u64,
    pub lane: u32,
    pub kind: ObstacleKind,
    /// Vertical centre in field units (grows as the obstacle falls).
    pub y: f64,
    /// Fall speed, fixed at spawn time.
    pub speed: f64,
}

impl Obstacle {
    pub fn advance(&mut self, dt: f64) {
        self.y += self.speed * dt.max(0.0);
    }

    /// Centre X of the obstacle's lane.
    pub fn x(&self, config: &GameConfig) -> f64 {
        lane_to_x(self.lane as i64, config.lane_count, config.lane_width())
    }

    /// True once the top edge has left the field through the bottom.
    pub fn is_below_field(&self, config: &GameConfig) -> bool {
        self.y - config.obstacle_height / 2.0 > config.field_height
    }
}

/// Fires once every `interval` seconds of accumulated time.
///
/// The first firing happens one full interval after creation. A delta
/// longer than the interval fires more than once.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: f64,
    accumulated: f64,
}

impl IntervalTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    /// Add `dt` and return how many times the timer fired.
    pub fn tick(&mut self, dt: f64) -> u32 {
        if self.interval.is_nan() || self.interval <= 0.0 {
            return 0;
        }
        self.accumulated += dt.max(0.0);
        let mut fired = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            fired += 1;
        }
        fired
    }

    /// Seconds until the next firing.
    pub fn remaining(&self) -> f64 {
        (self.interval - self.accumulated).max(0.0)
    }
}

/// Creates obstacles on a fixed cadence with a random lane and kind.
#[derive(Debug, Clone)]
pub struct Spawner {
    timer: IntervalTimer,
    barricade_chance: f64,
    lane_count: u32,
    spawn_y: f64,
    next_id: u64,
}

impl Spawner {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            timer: IntervalTimer::new(config.spawn_interval),
            barricade_chance: config.barricade_chance,
            lane_count: config.lane_count,
            spawn_y: config.obstacle_spawn_y,
            next_id: 0,
        }
    }

    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    /// Advance the timer and return whatever obstacles are due.
    pub fn tick<R: Rng>(&mut self, dt: f64, speed: f64, rng: &mut R) -> Vec<Obstacle> {
        let due = self.timer.tick(dt);
        (0..due).map(|_| self.spawn(speed, rng)).collect()
    }

    /// Create one obstacle immediately, above the visible field.
    pub fn spawn<R: Rng>(&mut self, speed: f64, rng: &mut R) -> Obstacle {
        let lane = rng.gen_range(0..self.lane_count.max(1));
        let kind = if rng.gen::<f64>() < self.barricade_chance {
            ObstacleKind::Barricade
        } else {
            ObstacleKind::Block
        };
        self.place(lane, kind, speed)
    }

    /// Create a specific obstacle above the visible field.
    pub fn place(&mut self, lane: u32, kind: ObstacleKind, speed: f64) -> Obstacle {
        let id = self.next_id;
        self.next_id += 1;
        Obstacle {
            id,
            lane: lane.min(self.lane_count.saturating_sub(1)),
            kind,
            y: self.spawn_y,
            speed,
        }
    }
}
