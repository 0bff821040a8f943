//! Rope Runner - a grappling-rope action platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, rope solver, collisions,
//!   combat, entities, outcome evaluation)
//! - `levels`: Reference level geometry provider
//!
//! The crate performs no drawing, no audio and no UI layout. An embedder
//! feeds a [`sim::StepInput`] into [`sim::step`] once per fixed tick and
//! reads the post-step state, cue events and outcome.

pub mod levels;
pub mod sim;

pub use sim::{GameEvent, LevelGeometry, Outcome, SimState, StepClock, StepInput, step};

/// Simulation tuning constants
///
/// All forces and speeds are per fixed step (units/frame, units/frame²).
/// The coordinate system is screen-like: y grows downward, so gravity is
/// positive and jump impulses are negative.
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the reference tuning)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum catch-up steps per rendered frame to prevent spiral of death
    pub const MAX_STEPS_PER_FRAME: u32 = 4;
    /// Longest frame time the clock will absorb (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Downward acceleration per frame
    pub const GRAVITY: f32 = 0.12;
    /// Horizontal acceleration from held movement input
    pub const MOVE_ACCEL: f32 = 0.35;
    /// Vertical velocity set on a successful jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -9.2;
    /// Multiplicative horizontal drag while grounded
    pub const GROUND_FRICTION: f32 = 0.82;
    /// Multiplicative drag in the air (both axes)
    pub const AIR_FRICTION: f32 = 0.95;
    /// Total speed cap (uniform rescale above this)
    pub const MAX_SPEED: f32 = 10.0;
    /// Terminal fall speed
    pub const MAX_FALL_SPEED: f32 = 8.0;

    /// Grace window after leaving the ground during which a jump still lands
    pub const COYOTE_FRAMES: u32 = 10;
    /// Grace window after a jump press during which a landing still jumps
    pub const JUMP_BUFFER_FRAMES: u32 = 10;

    /// Spring stiffness of the rope while taut
    pub const ROPE_STIFFNESS: f32 = 0.05;
    /// Velocity damping applied while the rope pulls
    pub const ROPE_DAMPING: f32 = 0.99;
    /// Extra horizontal acceleration from movement input while swinging
    pub const SWING_ACCEL: f32 = 0.4;
    /// Cursor must be within this distance of a platform surface to snap
    pub const ROPE_SNAP_RADIUS: f32 = 60.0;
    /// Maximum player-to-anchor distance for an attach
    pub const ROPE_MAX_RANGE: f32 = 450.0;
    /// Rest length floor, also the clamp for reel-in
    pub const ROPE_MIN_LENGTH: f32 = 20.0;
    /// Rest length change per frame of reel input
    pub const ROPE_REEL_RATE: f32 = 3.0;

    /// Player collision radius
    pub const PLAYER_RADIUS: f32 = 10.0;
    /// Starting and maximum hit points
    pub const PLAYER_MAX_HP: u8 = 3;
    /// Frames of damage immunity after a hit
    pub const INVULN_FRAMES: u32 = 60;

    /// Frames between melee swings
    pub const ATTACK_COOLDOWN: u32 = 20;
    /// Length of the swing animation in frames
    pub const ATTACK_DURATION: u32 = 10;
    /// The hitbox is live for the first frames of the animation only
    pub const ATTACK_ACTIVE_FRAMES: u32 = 5;
    /// Base kill radius around the hitbox center
    pub const ATTACK_RANGE: f32 = 40.0;
    /// Hitbox center offset along the facing direction
    pub const ATTACK_OFFSET: f32 = 20.0;

    /// Horizontal knockback magnitude from enemy contact
    pub const CONTACT_KNOCKBACK_X: f32 = 5.0;
    /// Vertical knockback from enemy contact (up)
    pub const CONTACT_KNOCKBACK_Y: f32 = -5.0;
    /// Vertical knockback from hazard contact (up)
    pub const HAZARD_KNOCKBACK_Y: f32 = -10.0;

    /// Turret engagement range
    pub const TURRET_RANGE: f32 = 400.0;
    /// Frames between turret shots
    pub const TURRET_COOLDOWN: u32 = 180;
    /// Projectile speed per frame
    pub const PROJECTILE_SPEED: f32 = 2.5;
    /// Projectile collision radius
    pub const PROJECTILE_RADIUS: f32 = 5.0;

    /// Coin collision radius
    pub const COIN_RADIUS: f32 = 8.0;
    /// Enemy collision radius
    pub const ENEMY_RADIUS: f32 = 12.0;

    /// Player must be this close to the exit point to leave
    pub const EXIT_RADIUS: f32 = 30.0;
    /// Falling this far below the level bounds is death
    pub const KILL_PLANE_MARGIN: f32 = 100.0;

    /// Number of built-in reference levels
    pub const LEVEL_COUNT: u32 = 3;
}
