//! Key handling: maps terminal key events onto scene input.

use crate::core::scene::{SceneInput, SceneMachine};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

/// Result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running the loop.
    Continue,
    /// Leave the game.
    Quit,
}

/// What a key means, before it reaches the scene machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Scene(SceneInput),
    Quit,
    Ignore,
}

/// Arrow keys or A/D steer, Space/Up/W/Enter confirm, Esc/Q/Ctrl-C quit.
pub fn map_key(key: KeyEvent) -> KeyAction {
    // Windows terminals also report releases
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
            _ => KeyAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            KeyAction::Scene(SceneInput::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            KeyAction::Scene(SceneInput::Right)
        }
        KeyCode::Up
        | KeyCode::Enter
        | KeyCode::Char(' ')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => KeyAction::Scene(SceneInput::Confirm),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

/// Dispatch a key press to the scene machine.
pub fn handle_key<R: Rng>(key: KeyEvent, machine: &mut SceneMachine<R>) -> InputResult {
    match map_key(key) {
        KeyAction::Scene(input) => {
            machine.handle_input(input);
            InputResult::Continue
        }
        KeyAction::Quit => InputResult::Quit,
        KeyAction::Ignore => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::scene::Scene;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_and_letter_keys() {
        assert_eq!(map_key(press(KeyCode::Left)), KeyAction::Scene(SceneInput::Left));
        assert_eq!(map_key(press(KeyCode::Char('a'))), KeyAction::Scene(SceneInput::Left));
        assert_eq!(map_key(press(KeyCode::Right)), KeyAction::Scene(SceneInput::Right));
        assert_eq!(map_key(press(KeyCode::Char('D'))), KeyAction::Scene(SceneInput::Right));
        assert_eq!(map_key(press(KeyCode::Char(' '))), KeyAction::Scene(SceneInput::Confirm));
        assert_eq!(map_key(press(KeyCode::Up)), KeyAction::Scene(SceneInput::Confirm));
        assert_eq!(map_key(press(KeyCode::Enter)), KeyAction::Scene(SceneInput::Confirm));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_unmapped_and_release_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), KeyAction::Ignore);
        assert_eq!(map_key(press(KeyCode::Tab)), KeyAction::Ignore);

        let mut release = press(KeyCode::Left);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), KeyAction::Ignore);
    }

    #[test]
    fn test_handle_key_drives_scene() {
        let mut machine = SceneMachine::new(GameConfig::default(), ChaCha8Rng::seed_from_u64(1));

        assert_eq!(handle_key(press(KeyCode::Char(' ')), &mut machine), InputResult::Continue);
        assert!(matches!(machine.scene, Scene::Game(_)));

        handle_key(press(KeyCode::Left), &mut machine);
        assert_eq!(machine.game().unwrap().player.lane, 1);

        assert_eq!(handle_key(press(KeyCode::Esc), &mut machine), InputResult::Quit);
    }
}
