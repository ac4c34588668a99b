//! Lane runner game core. Engine-free: everything is driven by explicit
//! frame deltas and a caller-supplied RNG.

pub mod collision;
pub mod game;
pub mod lane;
pub mod obstacle;
pub mod player;
pub mod session;
pub mod shake;

pub use collision::{resolve_collision, CollisionOutcome, ContactTracker, Hitbox};
pub use game::{RunEvent, RunnerGame, RunnerInput};
pub use lane::lane_to_x;
pub use obstacle::{IntervalTimer, Obstacle, ObstacleKind, Spawner};
pub use player::{JumpPhase, JumpProfile, Player};
pub use session::GameSession;
pub use shake::CameraShake;
