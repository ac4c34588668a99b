//! Terminal rendering for each scene.

pub mod game_common;
pub mod game_over_scene;
pub mod runner_scene;
pub mod start_scene;

use crate::core::scene::{Scene, SceneMachine};
use rand::Rng;
use ratatui::Frame;

/// Draw whichever scene is active.
pub fn draw<R: Rng>(frame: &mut Frame, machine: &SceneMachine<R>, difficulty: &str) {
    let area = frame.size();
    match &machine.scene {
        Scene::Start => start_scene::render_start_scene(frame, area, machine.config(), difficulty),
        Scene::Game(game) => runner_scene::render_runner_scene(frame, area, game, difficulty),
        Scene::GameOver { score, shake } => {
            game_over_scene::render_game_over_scene(frame, area, *score, shake)
        }
    }
}
