//! HutJumper - a side-scrolling hut-hopping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input wiring, and asset loading belong to the host. This
//! crate is the physics and game-state core only.

pub mod sim;
pub mod tuning;

pub use sim::{
    ControlIntent, Entity, EntityId, EntityKind, GameState, Shape, SimError, Simulation, Vec2,
    World,
};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use crate::sim::Vec2;

    /// Fixed simulation timestep in milliseconds (100 Hz)
    pub const STEP_MS: f32 = 10.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_STEPS_PER_FRAME: u32 = 8;
    /// Longest frame delta the runner will honor; anything beyond this is
    /// treated as a stall and dropped
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// World dimensions (y grows downward, so `max_y` is the bottom)
    pub const WORLD_MAX_X: f32 = 20_000.0;
    pub const WORLD_MAX_Y: f32 = 2_000.0;
    /// Thickness of the walkable ground band at the bottom edge
    pub const GROUND_HEIGHT: f32 = 20.0;

    /// Hut layout: one hut every `HUT_SPACING` units along the ground
    pub const HUT_WIDTH: f32 = 130.0;
    pub const HUT_HEIGHT: f32 = 147.0;
    pub const HUT_SPACING: f32 = 200.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 18.0;
    pub const PLAYER_HEIGHT: f32 = 38.0;
    pub const PLAYER_SPAWN_X: f32 = 15.0;
    pub const PLAYER_SPAWN_Y: f32 = 15.0;

    /// Fireball defaults
    pub const PROJECTILE_RADIUS: f32 = 16.0;
    /// Fireballs appear this far above the player's center
    pub const PROJECTILE_SPAWN_RISE: f32 = 30.0;

    /// Balance defaults, overridable through `Tuning`
    pub const CONTROL_FORCE: f32 = 1.0;
    pub const FRICTION: f32 = 0.15;
    pub const RESTITUTION: f32 = 0.75;
    pub const GRAVITY: Vec2 = Vec2::new(0.0, 9.81);
    pub const PROJECTILE_SPEED: f32 = 20.0;
    pub const PROJECTILE_LIFT: f32 = 10.0;
    pub const PROJECTILE_LIFE_MS: f32 = 500.0;
}
