//! Game state and core simulation types
//!
//! The [`SimState`] owns every mutable entity; external layers only read
//! post-step snapshots and never write back.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Audio/presentation cue emitted during a step
///
/// At most one cue per cause per step; the embedder drains the queue after
/// each step. A consumer that ignores or drops cues cannot affect the sim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player left the ground (or the rope) with a jump impulse
    Jump,
    /// Rope anchored to a platform surface
    GrappleShoot,
    /// Melee swing started
    AttackSwung,
    /// Player lost a hit point
    HitTaken,
    /// A melee swing killed at least one enemy
    EnemyKilled,
    /// A turret launched a projectile
    EnemyFired,
    /// A coin was picked up
    CoinCollected,
    /// Run ended in death
    Died,
    /// Exit reached with all coins collected
    LevelWon,
}

/// Per-step cue buffer, deduplicated by cause
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    /// Record a cue unless the same cause already fired this step
    pub fn emit(&mut self, event: GameEvent) {
        if !self.events.contains(&event) {
            self.events.push(event);
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn as_slice(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn contains(&self, event: GameEvent) -> bool {
        self.events.contains(&event)
    }
}

/// Terminal state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Stepping normally
    Running,
    /// Level finished, stepper is done until rebuilt
    Complete,
    /// Player died, stepper is done until rebuilt
    GameOver,
}

/// Result of a single step
///
/// Terminal variants are produced exactly once, on the transition step;
/// afterwards the stepper is finished and further steps are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Nothing terminal happened
    Continue,
    /// Exit reached; `next_level` is `None` after the final level
    LevelComplete { score: u32, next_level: Option<u32> },
    /// Fell out of the world or ran out of hit points
    GameOver { score: u32 },
}

/// Platform classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Normal,
    /// Damages the player on contact
    Hazard,
    /// Authoring marker near the exit, no runtime behavior
    Exit,
}

/// Axis-aligned rectangle, immutable for the duration of a level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    #[serde(default)]
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h, kind: PlatformKind::Normal }
    }

    pub fn hazard(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h, kind: PlatformKind::Hazard }
    }

    /// Closest point on the rectangle to `p` (per-axis clamp)
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(self.x, self.x + self.w), p.y.clamp(self.y, self.y + self.h))
    }

    /// Strict interior test, used for projectile impacts
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }
}

/// A collectible coin; `collected` never reverts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub radius: f32,
    pub collected: bool,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, radius: COIN_RADIUS, collected: false }
    }
}

/// Enemy behavior archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Stationary, fires at the player in range
    Turret,
}

/// A stationary enemy; `dead` never reverts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: EnemyKind,
    /// Frames until the next shot is allowed
    pub cooldown: u32,
    pub dead: bool,
}

impl Enemy {
    pub fn turret(pos: Vec2, cooldown: u32) -> Self {
        Self { pos, radius: ENEMY_RADIUS, kind: EnemyKind::Turret, cooldown, dead: false }
    }
}

/// An in-flight enemy projectile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
}

/// The player character
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub grounded: bool,
    pub facing_right: bool,
    pub hp: u8,
    pub max_hp: u8,
    /// Frames of remaining damage immunity
    pub invuln_timer: u32,
    /// Frames until the next melee swing is allowed
    pub attack_cooldown: u32,
    /// Hitbox live flag; only true during the opening frames of a swing
    pub attack_active: bool,
    /// Remaining swing animation frames
    pub attack_timer: u32,
}

impl Player {
    pub fn spawn_at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            grounded: false,
            facing_right: true,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            invuln_timer: 0,
            attack_cooldown: 0,
            attack_active: false,
            attack_timer: 0,
        }
    }

    /// Center of the melee hitbox, offset along the facing direction
    pub fn attack_center(&self) -> Vec2 {
        let dir = if self.facing_right { 1.0 } else { -1.0 };
        self.pos + Vec2::new(dir * ATTACK_OFFSET, 0.0)
    }
}

/// The grapple rope; at most one attached at a time
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rope {
    pub active: bool,
    pub anchor: Vec2,
    /// Target distance; tension only engages beyond it. Never below
    /// [`ROPE_MIN_LENGTH`] while active.
    pub rest_length: f32,
}

impl Default for Rope {
    fn default() -> Self {
        Self { active: false, anchor: Vec2::ZERO, rest_length: ROPE_MIN_LENGTH }
    }
}

/// Level extents; the playfield is `[0, w] × [0, h]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub w: f32,
    pub h: f32,
}

/// Geometry validation failure, raised at load time before any step runs
#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("level has no platforms")]
    NoPlatforms,
    #[error("level bounds are degenerate: {w}x{h}")]
    DegenerateBounds { w: f32, h: f32 },
    #[error("spawn point ({x}, {y}) is outside the level bounds")]
    SpawnOutOfBounds { x: f32, y: f32 },
    #[error("exit point ({x}, {y}) is outside the level bounds")]
    ExitOutOfBounds { x: f32, y: f32 },
}

/// Immutable level description consumed by the stepper
///
/// Loaded once per level; starting a level copies the coin and enemy sets
/// into mutable state and leaves the geometry untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelGeometry {
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub spawn_point: Vec2,
    pub exit_point: Vec2,
    pub bounds: Bounds,
}

impl LevelGeometry {
    /// Fail-fast structural check, run before the first step
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.platforms.is_empty() {
            return Err(LevelError::NoPlatforms);
        }
        if self.bounds.w <= 0.0 || self.bounds.h <= 0.0 {
            return Err(LevelError::DegenerateBounds { w: self.bounds.w, h: self.bounds.h });
        }
        if !self.contains(self.spawn_point) {
            return Err(LevelError::SpawnOutOfBounds {
                x: self.spawn_point.x,
                y: self.spawn_point.y,
            });
        }
        if !self.contains(self.exit_point) {
            return Err(LevelError::ExitOutOfBounds { x: self.exit_point.x, y: self.exit_point.y });
        }
        Ok(())
    }

    fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.bounds.w && p.y >= 0.0 && p.y <= self.bounds.h
    }
}

/// Complete simulation state for one run of one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// 1-based index of the level being played
    pub level_index: u32,
    /// Immutable geometry the run was started from
    pub geometry: LevelGeometry,
    pub player: Player,
    pub rope: Rope,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    /// Coins collected so far; non-decreasing
    pub score: u32,
    /// Coins required to unlock the exit
    pub total_coins: u32,
    /// Step counter, strictly increasing
    pub frame: u64,
    /// Remaining frames in which a jump is accepted after leaving the ground
    pub coyote_frames: u32,
    /// Remaining frames in which a buffered jump press stays valid
    pub jump_buffer_frames: u32,
    pub phase: Phase,
    /// Cues produced by the most recent step
    pub events: EventQueue,
    /// Grapple input level from the previous step, for edge detection
    pub(crate) grapple_was_held: bool,
    next_id: u32,
}

impl SimState {
    /// Start a run of `geometry` as level `level_index`
    ///
    /// Validates the geometry and fails before any step can execute.
    pub fn new(level_index: u32, geometry: LevelGeometry) -> Result<Self, LevelError> {
        geometry.validate()?;
        log::info!(
            "level {} loaded: {} platforms, {} coins, {} enemies",
            level_index,
            geometry.platforms.len(),
            geometry.coins.len(),
            geometry.enemies.len()
        );
        Ok(Self {
            player: Player::spawn_at(geometry.spawn_point),
            rope: Rope::default(),
            coins: geometry.coins.clone(),
            enemies: geometry.enemies.clone(),
            projectiles: Vec::new(),
            score: 0,
            total_coins: geometry.coins.len() as u32,
            frame: 0,
            coyote_frames: 0,
            jump_buffer_frames: 0,
            phase: Phase::Running,
            events: EventQueue::default(),
            grapple_was_held: false,
            next_id: 1,
            level_index,
            geometry,
        })
    }

    /// Allocate a deterministic entity id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// True once a terminal outcome has been produced
    pub fn finished(&self) -> bool {
        self.phase != Phase::Running
    }
}
