//! Hitboxes, contact tracking and the survive-or-crash rule.

use super::obstacle::{Obstacle, ObstacleKind};
use super::player::Player;
use crate::core::config::GameConfig;
use std::collections::HashSet;

/// Result of the player touching an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Cleared a barricade mid-jump. The run continues.
    Survive,
    /// The run is over.
    Crash,
}

/// Only a jumping player survives, and only against a barricade.
pub fn resolve_collision(kind: ObstacleKind, jumping: bool) -> CollisionOutcome {
    match (kind, jumping) {
        (ObstacleKind::Barricade, true) => CollisionOutcome::Survive,
        (ObstacleKind::Barricade, false) => CollisionOutcome::Crash,
        (ObstacleKind::Block, _) => CollisionOutcome::Crash,
    }
}

/// Axis-aligned box described by its centre and full size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
}

impl Hitbox {
    pub fn new(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            cx,
            cy,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.cx - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.cx + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.cy - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.cy + self.height / 2.0
    }

    /// Strict overlap: boxes that only share an edge do not touch.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// The player's box grows with the jump scale.
pub fn player_hitbox(player: &Player, config: &GameConfig) -> Hitbox {
    let size = config.player_size * player.scale;
    Hitbox::new(player.x, config.player_y(), size, size)
}

pub fn obstacle_hitbox(obstacle: &Obstacle, config: &GameConfig) -> Hitbox {
    Hitbox::new(
        obstacle.x(config),
        obstacle.y,
        config.obstacle_width(),
        config.obstacle_height,
    )
}

/// Remembers which obstacles touched the player last frame so each contact
/// is reported once, when it begins.
#[derive(Debug, Clone, Default)]
pub struct ContactTracker {
    touching: HashSet<u64>,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the obstacles whose overlap with the player started this frame.
    /// Obstacles that separated are forgotten, so touching again counts anew.
    pub fn begin_contacts<'a>(
        &mut self,
        player: &Player,
        obstacles: &'a [Obstacle],
        config: &GameConfig,
    ) -> Vec<&'a Obstacle> {
        let player_box = player_hitbox(player, config);
        let mut now_touching = HashSet::new();
        let mut started = Vec::new();

        for obstacle in obstacles {
            if player_box.overlaps(&obstacle_hitbox(obstacle, config)) {
                now_touching.insert(obstacle.id);
                if !self.touching.contains(&obstacle.id) {
                    started.push(obstacle);
                }
            }
        }

        self.touching = now_touching;
        started
    }

    pub fn is_touching(&self, id: u64) -> bool {
        self.touching.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle_at(id: u64, lane: u32, kind: ObstacleKind, y: f64) -> Obstacle {
        Obstacle {
            id,
            lane,
            kind,
            y,
            speed: 400.0,
        }
    }

    #[test]
    fn test_decision_table_is_total() {
        assert_eq!(
            resolve_collision(ObstacleKind::Barricade, true),
            CollisionOutcome::Survive
        );
        assert_eq!(
            resolve_collision(ObstacleKind::Barricade, false),
            CollisionOutcome::Crash
        );
        assert_eq!(
            resolve_collision(ObstacleKind::Block, true),
            CollisionOutcome::Crash
        );
        assert_eq!(
            resolve_collision(ObstacleKind::Block, false),
            CollisionOutcome::Crash
        );
    }

    #[test]
    fn test_hitbox_edges() {
        let b = Hitbox::new(100.0, 50.0, 20.0, 10.0);
        assert!((b.left() - 90.0).abs() < f64::EPSILON);
        assert!((b.right() - 110.0).abs() < f64::EPSILON);
        assert!((b.top() - 45.0).abs() < f64::EPSILON);
        assert!((b.bottom() - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Hitbox::new(0.0, 0.0, 10.0, 10.0);
        let touching_edge = Hitbox::new(10.0, 0.0, 10.0, 10.0);
        let inside = Hitbox::new(9.0, 9.0, 10.0, 10.0);
        let far = Hitbox::new(100.0, 0.0, 10.0, 10.0);

        assert!(!a.overlaps(&touching_edge));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_jump_scale_grows_player_hitbox() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        let grounded = player_hitbox(&player, &config);
        player.scale = 1.5;
        let jumping = player_hitbox(&player, &config);
        assert!((jumping.width - grounded.width * 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_contact_reported_once() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        let obstacles = vec![obstacle_at(7, 2, ObstacleKind::Barricade, config.player_y())];
        let mut tracker = ContactTracker::new();

        let first = tracker.begin_contacts(&player, &obstacles, &config);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, 7);
        assert!(tracker.is_touching(7));

        let second = tracker.begin_contacts(&player, &obstacles, &config);
        assert!(second.is_empty(), "ongoing contact must not re-trigger");
    }

    #[test]
    fn test_contact_after_separation_triggers_again() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        let obstacles = vec![obstacle_at(1, 2, ObstacleKind::Barricade, config.player_y())];
        let mut tracker = ContactTracker::new();

        assert_eq!(tracker.begin_contacts(&player, &obstacles, &config).len(), 1);

        player.x = config.lane_width() * 3.5;
        assert!(tracker.begin_contacts(&player, &obstacles, &config).is_empty());
        assert!(!tracker.is_touching(1));

        player.x = config.lane_width() * 2.5;
        assert_eq!(tracker.begin_contacts(&player, &obstacles, &config).len(), 1);
    }

    #[test]
    fn test_other_lane_does_not_touch() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        let obstacles = vec![
            obstacle_at(1, 1, ObstacleKind::Block, config.player_y()),
            obstacle_at(2, 3, ObstacleKind::Block, config.player_y()),
        ];
        let mut tracker = ContactTracker::new();
        assert!(tracker.begin_contacts(&player, &obstacles, &config).is_empty());
    }

    #[test]
    fn test_obstacle_above_player_does_not_touch() {
        let config = GameConfig::default();
        let player = Player::new(&config);
        // player top edge is 474, obstacle bottom edge is 420
        let obstacles = vec![obstacle_at(1, 2, ObstacleKind::Block, 400.0)];
        let mut tracker = ContactTracker::new();
        assert!(tracker.begin_contacts(&player, &obstacles, &config).is_empty());
    }
}
