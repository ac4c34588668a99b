//! Scene state machine: Start -> Game -> GameOver -> Game ...
//!
//! Every transition builds the next scene from scratch. Leaving the Game
//! scene drops the whole run, so nothing leaks into the next one.

use super::config::GameConfig;
use crate::core::constants::SHAKE_DECAY_RATE;
use crate::runner::{CameraShake, RunEvent, RunnerGame, RunnerInput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Scene-level input, independent of the terminal key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneInput {
    Left,
    Right,
    /// Jump during a run; begin or restart elsewhere.
    Confirm,
}

#[derive(Debug, Clone)]
pub enum Scene {
    Start,
    Game(Box<RunnerGame>),
    GameOver {
        score: u64,
        /// Crash shake carried over from the run so the impact stays visible.
        shake: CameraShake,
    },
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Start => "start",
            Scene::Game(_) => "game",
            Scene::GameOver { .. } => "game_over",
        }
    }
}

pub struct SceneMachine<R: Rng = StdRng> {
    pub scene: Scene,
    config: GameConfig,
    rng: R,
    runs_started: u32,
}

impl SceneMachine<StdRng> {
    /// Machine seeded from the OS, or from `seed` for reproducible runs.
    pub fn from_seed(config: GameConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> SceneMachine<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            scene: Scene::Start,
            config,
            rng,
            runs_started: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn runs_started(&self) -> u32 {
        self.runs_started
    }

    /// The active run, if the Game scene is showing.
    pub fn game(&self) -> Option<&RunnerGame> {
        match &self.scene {
            Scene::Game(game) => Some(&**game),
            _ => None,
        }
    }

    pub fn game_mut(&mut self) -> Option<&mut RunnerGame> {
        match &mut self.scene {
            Scene::Game(game) => Some(&mut **game),
            _ => None,
        }
    }

    pub fn handle_input(&mut self, input: SceneInput) {
        if let Scene::Game(game) = &mut self.scene {
            let input = match input {
                SceneInput::Left => RunnerInput::Left,
                SceneInput::Right => RunnerInput::Right,
                SceneInput::Confirm => RunnerInput::Jump,
            };
            game.process_input(input);
            return;
        }

        // Start and GameOver only listen for the confirm key
        if input == SceneInput::Confirm {
            self.start_run();
        }
    }

    /// Advance the active scene by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> Vec<RunEvent> {
        let events = match &mut self.scene {
            Scene::Start => Vec::new(),
            Scene::GameOver { shake, .. } => {
                shake.update(dt);
                Vec::new()
            }
            Scene::Game(game) => game.tick(dt, &mut self.rng),
        };

        let crash = events.iter().find_map(|e| match e {
            RunEvent::Crashed { final_score, .. } => Some(*final_score),
            _ => None,
        });
        if let Some(score) = crash {
            self.end_run(score);
        }

        events
    }

    fn start_run(&mut self) {
        self.runs_started += 1;
        info!(
            from = self.scene.name(),
            run = self.runs_started,
            "starting run"
        );
        self.scene = Scene::Game(Box::new(RunnerGame::new(self.config)));
    }

    fn end_run(&mut self, score: u64) {
        let shake = match &self.scene {
            Scene::Game(game) => game.shake.clone(),
            _ => CameraShake::new(SHAKE_DECAY_RATE),
        };
        info!(score, run = self.runs_started, "game over");
        self.scene = Scene::GameOver { score, shake };
    }
}
