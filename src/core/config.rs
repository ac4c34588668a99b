//! Tuning values for a run, difficulty presets and JSON overrides.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Difficulty presets. Each one is a complete [`GameConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Relaxed,
    #[default]
    Classic,
    Rush,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Relaxed, Difficulty::Classic, Difficulty::Rush];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Relaxed => "Relaxed",
            Self::Classic => "Classic",
            Self::Rush => "Rush",
        }
    }

    /// Case-insensitive lookup used by the `--difficulty` flag.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    pub fn config(&self) -> GameConfig {
        let classic = GameConfig::default();
        match self {
            Self::Relaxed => GameConfig {
                spawn_interval: 1.2,
                ..classic
            },
            Self::Classic => classic,
            Self::Rush => GameConfig {
                accel_rate: 50.0,
                barricade_chance: 0.3,
                ..classic
            },
        }
    }
}

/// Every tunable of a run. Lengths are logical field units, times are seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub lane_count: u32,
    pub field_width: f64,
    pub field_height: f64,
    pub player_row_offset: f64,
    pub player_size: f64,
    pub start_lane: u32,

    pub obstacle_lane_padding: f64,
    pub obstacle_height: f64,
    pub obstacle_spawn_y: f64,
    pub spawn_interval: f64,
    pub barricade_chance: f64,

    pub speed_start: f64,
    pub speed_max: f64,
    pub accel_rate: f64,
    pub score_rate: f64,

    pub lane_smoothing: f64,
    pub jump_base_scale: f64,
    pub jump_peak_scale: f64,
    pub jump_rise_secs: f64,
    pub jump_fall_secs: f64,

    pub shake_survive: f64,
    pub shake_crash: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lane_count: LANE_COUNT,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            player_row_offset: PLAYER_ROW_OFFSET,
            player_size: PLAYER_SIZE,
            start_lane: START_LANE,

            obstacle_lane_padding: OBSTACLE_LANE_PADDING,
            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_spawn_y: OBSTACLE_SPAWN_Y,
            spawn_interval: SPAWN_INTERVAL_SECONDS,
            barricade_chance: BARRICADE_CHANCE,

            speed_start: SPEED_START,
            speed_max: SPEED_MAX,
            accel_rate: SPEED_ACCEL_PER_SECOND,
            score_rate: SCORE_PER_SECOND,

            lane_smoothing: LANE_SMOOTHING,
            jump_base_scale: JUMP_BASE_SCALE,
            jump_peak_scale: JUMP_PEAK_SCALE,
            jump_rise_secs: JUMP_RISE_SECONDS,
            jump_fall_secs: JUMP_FALL_SECONDS,

            shake_survive: SHAKE_ON_SURVIVE,
            shake_crash: SHAKE_ON_CRASH,
        }
    }
}

impl GameConfig {
    /// Width of one lane.
    pub fn lane_width(&self) -> f64 {
        self.field_width / self.lane_count as f64
    }

    /// Vertical centre of the player.
    pub fn player_y(&self) -> f64 {
        self.field_height - self.player_row_offset
    }

    pub fn obstacle_width(&self) -> f64 {
        (self.lane_width() - self.obstacle_lane_padding).max(1.0)
    }

    /// Apply a JSON object on top of `self`. Keys not present keep their
    /// current value, so overrides stack on a difficulty preset.
    pub fn with_overrides_json(&self, json: &str) -> Result<Self, ConfigError> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(overrides) = overrides else {
            return Err(ConfigError::Invalid(
                "top level must be a JSON object".to_string(),
            ));
        };

        let mut merged = serde_json::to_value(self)?;
        if let serde_json::Value::Object(fields) = &mut merged {
            for (key, value) in overrides {
                if !fields.contains_key(&key) {
                    return Err(ConfigError::Invalid(format!("unknown setting `{}`", key)));
                }
                fields.insert(key, value);
            }
        }

        let config: GameConfig = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from a JSON file.
    pub fn with_overrides_file(&self, path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        self.with_overrides_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.lane_count == 0 {
            return invalid("lane_count must be at least 1");
        }
        if self.start_lane >= self.lane_count {
            return invalid("start_lane must be below lane_count");
        }
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return invalid("field dimensions must be positive");
        }
        if !(self.player_size > 0.0 && self.obstacle_height > 0.0) {
            return invalid("player_size and obstacle_height must be positive");
        }
        if self.speed_start < 0.0 || self.speed_max < self.speed_start {
            return invalid("speed_max must be at least speed_start, and both non-negative");
        }
        if self.accel_rate < 0.0 || self.score_rate < 0.0 {
            return invalid("accel_rate and score_rate must not be negative");
        }
        if !(self.spawn_interval > 0.0) {
            return invalid("spawn_interval must be positive");
        }
        if !(0.0..=1.0).contains(&self.barricade_chance) {
            return invalid("barricade_chance must be between 0 and 1");
        }
        if self.jump_rise_secs <= 0.0 || self.jump_fall_secs <= 0.0 {
            return invalid("jump phase durations must be positive");
        }
        if self.lane_smoothing < 0.0 {
            return invalid("lane_smoothing must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic() {
        assert_eq!(Difficulty::Classic.config(), GameConfig::default());
        assert_eq!(Difficulty::default(), Difficulty::Classic);
    }

    #[test]
    fn test_default_values() {
        let config = GameConfig::default();
        assert_eq!(config.lane_count, 5);
        assert!((config.lane_width() - 160.0).abs() < f64::EPSILON);
        assert!((config.player_y() - 500.0).abs() < f64::EPSILON);
        assert!((config.obstacle_width() - 140.0).abs() < f64::EPSILON);
        assert!((config.speed_start - 400.0).abs() < f64::EPSILON);
        assert!((config.speed_max - 1000.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_differ_where_expected() {
        let relaxed = Difficulty::Relaxed.config();
        assert!((relaxed.spawn_interval - 1.2).abs() < f64::EPSILON);

        let rush = Difficulty::Rush.config();
        assert!((rush.accel_rate - 50.0).abs() < f64::EPSILON);
        assert!((rush.barricade_chance - 0.3).abs() < f64::EPSILON);

        for d in Difficulty::ALL {
            assert!(d.config().validate().is_ok(), "{} should validate", d.name());
        }
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Difficulty::from_name("rush"), Some(Difficulty::Rush));
        assert_eq!(Difficulty::from_name("RELAXED"), Some(Difficulty::Relaxed));
        assert_eq!(Difficulty::from_name("Classic"), Some(Difficulty::Classic));
        assert_eq!(Difficulty::from_name("nightmare"), None);
    }

    #[test]
    fn test_partial_override_keeps_preset_values() {
        let rush = Difficulty::Rush.config();
        let config = rush
            .with_overrides_json(r#"{ "lane_count": 3, "start_lane": 1 }"#)
            .unwrap();

        assert_eq!(config.lane_count, 3);
        assert_eq!(config.start_lane, 1);
        // untouched fields come from the preset, not the default
        assert!((config.accel_rate - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GameConfig::default()
            .with_overrides_json(r#"{ "lanes": 3 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = GameConfig::default()
            .with_overrides_json("[1, 2, 3]")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = GameConfig::default()
            .with_overrides_json("{ not json")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_failures() {
        let base = GameConfig::default();

        let cases = [
            GameConfig {
                lane_count: 0,
                ..base
            },
            GameConfig {
                start_lane: 5,
                ..base
            },
            GameConfig {
                speed_max: 100.0,
                ..base
            },
            GameConfig {
                barricade_chance: 1.5,
                ..base
            },
            GameConfig {
                spawn_interval: 0.0,
                ..base
            },
            GameConfig {
                jump_fall_secs: 0.0,
                ..base
            },
        ];

        for config in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "expected invalid: {:?}",
                config
            );
        }
    }

    #[test]
    fn test_override_that_breaks_validation() {
        let err = GameConfig::default()
            .with_overrides_json(r#"{ "barricade_chance": -0.5 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::default()
            .with_overrides_file(Path::new("/definitely/not/here/config.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
