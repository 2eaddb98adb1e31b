//! Data-driven game balance
//!
//! Every constant a designer might want to nudge without recompiling:
//! control feel, friction, bounciness, gravity, fireball parameters.
//! Defaults reproduce the classic feel. Loads from JSON; missing fields
//! fall back to their defaults, so partial override files work.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Vec2;

/// Gameplay balance knobs, fed into every tick
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Force added per held axis per tick
    pub control_force: f32,
    /// Per-tick velocity damping factor (0 = ice, 1 = glue)
    pub friction: f32,
    /// Bounciness of impacts and world edges (0..1)
    pub restitution: f32,
    /// Gravity acceleration per tick (positive y is down)
    pub gravity: Vec2,
    /// Horizontal muzzle speed of a fireball
    pub projectile_speed: f32,
    /// Upward kick a fireball gets at spawn
    pub projectile_lift: f32,
    /// Fireball lifetime in milliseconds
    pub projectile_life_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            control_force: CONTROL_FORCE,
            friction: FRICTION,
            restitution: RESTITUTION,
            gravity: GRAVITY,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lift: PROJECTILE_LIFT,
            projectile_life_ms: PROJECTILE_LIFE_MS,
        }
    }
}

impl Tuning {
    /// Parse from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
