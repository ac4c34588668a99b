//! A single run: owns the player, the obstacles and the progression, and
//! steps them together one frame at a time.

use super::collision::{resolve_collision, CollisionOutcome, ContactTracker};
use super::obstacle::{Obstacle, ObstacleKind, Spawner};
use super::player::Player;
use super::session::GameSession;
use super::shake::CameraShake;
use crate::core::config::GameConfig;
use crate::core::constants::SHAKE_DECAY_RATE;
use rand::Rng;
use tracing::{debug, info};

/// Player actions during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    Left,
    Right,
    Jump,
}

/// Notable things that happened during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
    Spawned {
        id: u64,
        lane: u32,
        kind: ObstacleKind,
    },
    /// Jumped over a barricade. It stays on the field.
    BarricadeCleared { id: u64 },
    /// The run is over.
    Crashed {
        id: u64,
        kind: ObstacleKind,
        final_score: u64,
    },
}

#[derive(Debug, Clone)]
pub struct RunnerGame {
    pub config: GameConfig,
    pub session: GameSession,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub contacts: ContactTracker,
    pub shake: CameraShake,
    /// Final floored score once the run has crashed.
    pub final_score: Option<u64>,
    pub barricades_cleared: u32,
    pub frame_count: u64,
}

impl RunnerGame {
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: GameSession::new(&config),
            player: Player::new(&config),
            obstacles: Vec::new(),
            spawner: Spawner::new(&config),
            contacts: ContactTracker::new(),
            shake: CameraShake::new(SHAKE_DECAY_RATE),
            final_score: None,
            barricades_cleared: 0,
            frame_count: 0,
            config,
        }
    }

    pub fn is_over(&self) -> bool {
        self.final_score.is_some()
    }

    pub fn process_input(&mut self, input: RunnerInput) {
        if self.is_over() {
            return;
        }
        match input {
            RunnerInput::Left => self.player.move_left(),
            RunnerInput::Right => self.player.move_right(),
            RunnerInput::Jump => {
                self.player.jump();
            }
        }
    }

    /// Put a specific obstacle at the spawn row, moving at the current speed.
    pub fn place_obstacle(&mut self, lane: u32, kind: ObstacleKind) -> u64 {
        let obstacle = self.spawner.place(lane, kind, self.session.speed);
        let id = obstacle.id;
        self.obstacles.push(obstacle);
        id
    }

    /// Advance the run by one frame of `dt` seconds.
    pub fn tick<R: Rng>(&mut self, dt: f64, rng: &mut R) -> Vec<RunEvent> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }
        let dt = dt.max(0.0);
        self.frame_count += 1;

        self.player.update(dt);
        self.session.advance(dt);
        self.shake.update(dt);

        for obstacle in &mut self.obstacles {
            obstacle.advance(dt);
        }
        let config = &self.config;
        self.obstacles.retain(|o| !o.is_below_field(config));

        for obstacle in self.spawner.tick(dt, self.session.speed, rng) {
            debug!(
                id = obstacle.id,
                lane = obstacle.lane,
                kind = obstacle.kind.name(),
                speed = obstacle.speed,
                "obstacle spawned"
            );
            events.push(RunEvent::Spawned {
                id: obstacle.id,
                lane: obstacle.lane,
                kind: obstacle.kind,
            });
            self.obstacles.push(obstacle);
        }

        let started: Vec<(u64, ObstacleKind)> = self
            .contacts
            .begin_contacts(&self.player, &self.obstacles, &self.config)
            .into_iter()
            .map(|o| (o.id, o.kind))
            .collect();

        let jumping = self.player.is_jumping();
        for (id, kind) in started {
            match resolve_collision(kind, jumping) {
                CollisionOutcome::Survive => {
                    self.shake.add(self.config.shake_survive);
                    self.barricades_cleared += 1;
                    debug!(id, "barricade cleared");
                    events.push(RunEvent::BarricadeCleared { id });
                }
                CollisionOutcome::Crash => {
                    self.shake.add(self.config.shake_crash);
                    let final_score = self.session.display_score();
                    self.final_score = Some(final_score);
                    info!(
                        id,
                        kind = kind.name(),
                        final_score,
                        elapsed = self.session.elapsed,
                        "run crashed"
                    );
                    events.push(RunEvent::Crashed {
                        id,
                        kind,
                        final_score,
                    });
                    break;
                }
            }
        }

        events
    }
}
