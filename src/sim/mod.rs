//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - No randomness (entity ids come from a monotonic counter)
//! - Stable iteration order
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod rope;
pub mod state;
pub mod step;

pub use clock::StepClock;
pub use collision::{Resolution, circle_rect_overlap, circles_overlap, resolve_player};
pub use rope::find_anchor;
pub use state::{
    Bounds, Coin, Enemy, EnemyKind, EventQueue, GameEvent, LevelError, LevelGeometry, Outcome,
    Phase, Platform, PlatformKind, Player, Projectile, Rope, SimState,
};
pub use step::{StepInput, step};
