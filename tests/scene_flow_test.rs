//! Integration test: scene flow
//!
//! Start -> Game -> GameOver -> Game through `SceneMachine`, driven the way
//! the binary drives it: keys through `input::handle_key`, frames through
//! `tick`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lane_runner::core::{Difficulty, GameConfig, Scene, SceneInput, SceneMachine};
use lane_runner::input::{handle_key, InputResult};
use lane_runner::runner::{ObstacleKind, RunEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FRAME: f64 = 1.0 / 60.0;

fn machine(config: GameConfig) -> SceneMachine<ChaCha8Rng> {
    SceneMachine::new(config, ChaCha8Rng::seed_from_u64(2024))
}

fn press(machine: &mut SceneMachine<ChaCha8Rng>, code: KeyCode) -> InputResult {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), machine)
}

/// Tick until the scene leaves Game, returning the frames it took.
fn run_until_game_over(machine: &mut SceneMachine<ChaCha8Rng>, max_frames: u32) -> Option<u32> {
    for frame in 1..=max_frames {
        machine.tick(FRAME);
        if !matches!(machine.scene, Scene::Game(_)) {
            return Some(frame);
        }
    }
    None
}

#[test]
fn test_space_starts_then_block_ends_run() {
    let mut m = machine(GameConfig::default());
    assert!(matches!(m.scene, Scene::Start));

    assert_eq!(press(&mut m, KeyCode::Char(' ')), InputResult::Continue);
    let game = m.game_mut().expect("space starts a run");
    game.place_obstacle(2, ObstacleKind::Block);

    let frames = run_until_game_over(&mut m, 200).expect("block must end the run");
    assert_eq!(frames, 76);
    match &m.scene {
        Scene::GameOver { score, .. } => assert_eq!(*score, 12),
        other => panic!("expected game over, got {}", other.name()),
    }
}

#[test]
fn test_jumped_barricade_keeps_game_scene() {
    let mut m = machine(GameConfig::default());
    m.handle_input(SceneInput::Confirm);
    m.game_mut().unwrap().place_obstacle(2, ObstacleKind::Barricade);

    let mut cleared = false;
    for frame in 1..=110 {
        if frame == 72 {
            press(&mut m, KeyCode::Up);
        }
        let events = m.tick(FRAME);
        cleared |= events
            .iter()
            .any(|e| matches!(e, RunEvent::BarricadeCleared { .. }));
    }

    assert!(cleared);
    let game = m.game().expect("still running");
    assert_eq!(game.session.display_score(), 18);
}

#[test]
fn test_dodging_a_block_keeps_game_scene() {
    let mut m = machine(GameConfig::default());
    m.handle_input(SceneInput::Confirm);
    m.game_mut().unwrap().place_obstacle(2, ObstacleKind::Block);

    for frame in 1..=110 {
        if frame == 40 {
            press(&mut m, KeyCode::Char('d'));
        }
        m.tick(FRAME);
    }
    let game = m.game().expect("dodged");
    assert_eq!(game.player.lane, 3);
}

#[test]
fn test_restart_is_a_fresh_run() {
    let mut m = machine(Difficulty::Rush.config());
    m.handle_input(SceneInput::Confirm);
    m.handle_input(SceneInput::Left);
    m.game_mut().unwrap().place_obstacle(1, ObstacleKind::Block);
    run_until_game_over(&mut m, 300).expect("crash");

    // movement is ignored on the game over screen
    press(&mut m, KeyCode::Left);
    assert!(matches!(m.scene, Scene::GameOver { .. }));

    press(&mut m, KeyCode::Enter);
    let game = m.game().expect("enter restarts");
    assert_eq!(game.player.lane, 2);
    assert_eq!(game.session.speed, 400.0);
    assert_eq!(game.session.display_score(), 0);
    assert!(game.obstacles.is_empty());
    assert!(!game.shake.is_active());
    assert_eq!(m.runs_started(), 2);
}

#[test]
fn test_quit_from_every_scene() {
    let mut m = machine(GameConfig::default());
    assert_eq!(press(&mut m, KeyCode::Esc), InputResult::Quit);

    m.handle_input(SceneInput::Confirm);
    assert_eq!(press(&mut m, KeyCode::Char('q')), InputResult::Quit);

    m.game_mut().unwrap().place_obstacle(2, ObstacleKind::Block);
    run_until_game_over(&mut m, 200).expect("crash");
    assert_eq!(
        handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut m
        ),
        InputResult::Quit
    );
}
