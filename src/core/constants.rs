// Playfield (logical units, the terminal renderer scales these to cells)
pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;
pub const LANE_COUNT: u32 = 5;
pub const PLAYER_ROW_OFFSET: f64 = 100.0; // player sits this far above the bottom edge
pub const PLAYER_SIZE: f64 = 52.0;
pub const START_LANE: u32 = 2;

// Obstacles
pub const OBSTACLE_LANE_PADDING: f64 = 20.0; // obstacle width = lane width - padding
pub const OBSTACLE_HEIGHT: f64 = 40.0;
pub const OBSTACLE_SPAWN_Y: f64 = -50.0;
pub const SPAWN_INTERVAL_SECONDS: f64 = 1.0;
pub const BARRICADE_CHANCE: f64 = 0.2;

// Progression
pub const SPEED_START: f64 = 400.0;
pub const SPEED_MAX: f64 = 1000.0;
pub const SPEED_ACCEL_PER_SECOND: f64 = 5.0;
pub const SCORE_PER_SECOND: f64 = 10.0;

// Player motion
pub const LANE_SMOOTHING: f64 = 15.0;
pub const JUMP_BASE_SCALE: f64 = 1.0;
pub const JUMP_PEAK_SCALE: f64 = 1.5;
pub const JUMP_RISE_SECONDS: f64 = 0.2;
pub const JUMP_FALL_SECONDS: f64 = 0.2;

// Camera shake
pub const SHAKE_ON_SURVIVE: f64 = 2.0;
pub const SHAKE_ON_CRASH: f64 = 20.0;
pub const SHAKE_DECAY_RATE: f64 = 5.0;

// Frame timing
pub const FRAME_POLL_MS: u64 = 16;
pub const MAX_FRAME_DELTA_SECONDS: f64 = 0.1;
