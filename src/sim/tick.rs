//! Fixed timestep simulation tick
//!
//! Advances the state by exactly one step: controls first, then the expiry
//! sweep, then per entity (in stable id order) position integration, bounds
//! response, velocity integration, and pairwise collision.

use crate::consts::*;
use crate::tuning::Tuning;

use super::entity::Entity;
use super::error::SimError;
use super::state::GameState;
use super::vec2::Vec2;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct ControlIntent {
    /// Horizontal run direction: -1, 0, or 1
    pub move_x: i8,
    /// Vertical drift direction: -1 (up), 0, or 1 (down)
    pub move_y: i8,
    /// Jump button currently held
    pub jump_held: bool,
    /// Launch a fireball (one-shot; the runner clears it after a tick
    /// consumes it)
    pub fire_requested: bool,
    /// Cycle the character skin (one-shot, runner-cleared)
    pub toggle_character_requested: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(
    state: &mut GameState,
    intent: &ControlIntent,
    tuning: &Tuning,
    dt_ms: f32,
) -> Result<(), SimError> {
    apply_controls(state, intent, tuning);
    state.prune_expired();

    // World is tiny and Copy; taking it by value keeps the entity borrows
    // below simple
    let world = *state.world();
    let count = state.entities().len();

    for i in 0..count {
        {
            let entity = &mut state.entities_mut()[i];
            entity.step_position(dt_ms);
            entity.collide_bounds(&world, tuning.restitution);
            entity.step_velocity(&world, tuning.friction);
        }

        for j in 0..count {
            if j == i {
                continue;
            }
            let entities = state.entities_mut();
            if entities[i].is_colliding(&entities[j]) {
                let (a, b) = pair_mut(entities, i, j);
                a.collide(b, tuning.restitution)?;
            }
        }
    }

    Ok(())
}

/// Sample the intent into the player: facing, jump edge logic, control
/// acceleration, fireball launch, character cycling.
fn apply_controls(state: &mut GameState, intent: &ControlIntent, tuning: &Tuning) {
    if intent.toggle_character_requested {
        state.cycle_character();
    }

    let world = *state.world();
    let on_ground = state.player().is_on_ground(&world);
    let control = Vec2::new(
        intent.move_x as f32 * tuning.control_force,
        intent.move_y as f32 * tuning.control_force,
    );

    let player = state.player_mut();
    if control.x < 0.0 {
        player.facing_left = true;
    } else if control.x > 0.0 {
        player.facing_left = false;
    }

    if intent.jump_held && on_ground && !player.is_jumping() {
        player.start_jump();
    } else if !intent.jump_held && player.is_jumping() {
        player.stop_jump();
    }

    // Gravity is applied exactly once, in step_velocity; acceleration
    // carries control force only
    player.acceleration = control;

    if intent.fire_requested {
        spawn_projectile(state, tuning);
    }
}

/// Fireball launch: just above the player's center, kicked horizontally
/// toward facing with a little lift, inheriting the player's velocity.
fn spawn_projectile(state: &mut GameState, tuning: &Tuning) {
    let (position, velocity, facing_left) = {
        let player = state.player();
        (player.position, player.velocity, player.facing_left)
    };
    let sign = if facing_left { -1.0 } else { 1.0 };
    let spawn = Vec2::new(position.x, position.y - PROJECTILE_SPAWN_RISE);
    let kick = Vec2::new(sign * tuning.projectile_speed, -tuning.projectile_lift);

    let source = state.player_id();
    let id = state.next_entity_id();
    state.add_entity(Entity::projectile(
        id,
        source,
        spawn,
        kick + velocity,
        tuning.projectile_life_ms,
        facing_left,
    ));
}

/// Simultaneous mutable access to two distinct entities by index
fn pair_mut(entities: &mut [Entity], i: usize, j: usize) -> (&mut Entity, &mut Entity) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = entities.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = entities.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
