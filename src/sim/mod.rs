//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by entity ID)
//! - No wall-clock reads, no global state
//! - No rendering or platform dependencies

pub mod entity;
pub mod error;
pub mod runner;
pub mod shape;
pub mod state;
pub mod tick;
pub mod vec2;
pub mod world;

pub use entity::{Entity, EntityId, EntityKind};
pub use error::SimError;
pub use runner::Simulation;
pub use shape::Shape;
pub use state::GameState;
pub use tick::{ControlIntent, tick};
pub use vec2::Vec2;
pub use world::World;
