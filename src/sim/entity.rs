//! Entities: the player, fireball projectiles, and hut obstacles
//!
//! One struct carries the shared kinematic state; the closed `EntityKind`
//! enum carries per-variant data and selects behavior inside the shared
//! methods. Position integration is fixed-quantum: one velocity step per
//! tick, with `dt` driving only the millisecond timers.

use std::fmt;

use crate::consts::*;

use super::error::SimError;
use super::shape::Shape;
use super::vec2::Vec2;
use super::world::World;

/// Opaque entity identifier; allocated monotonically, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of entity variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    /// The controllable character
    Player,
    /// A fireball in flight. `source` is attribution only (an id, never
    /// re-resolved); `life_ms` counts down to expiry.
    Projectile { source: EntityId, life_ms: f32 },
    /// A hut: immovable scenery with collision presence
    Obstacle,
}

/// A simulated body
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Control force for this tick; gravity is NOT folded in here
    pub acceleration: Vec2,
    /// Render-facing orientation; sprites face left at rest
    pub facing_left: bool,
    mass: f32,
    shape: Shape,
    expired: bool,
    jumping: bool,
    jump_time_ms: f32,
}

impl Entity {
    /// Upward thrust added each tick while the jump timer runs
    pub const JUMP_FORCE: f32 = 3.5;
    /// Duration the jump timer is wound to by `start_jump`
    pub const JUMP_DURATION_MS: f32 = 200.0;

    fn new(id: EntityId, kind: EntityKind, position: Vec2, shape: Shape, mass: f32) -> Self {
        Self {
            id,
            kind,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            facing_left: true,
            mass,
            shape,
            expired: false,
            jumping: false,
            jump_time_ms: 0.0,
        }
    }

    /// The player character: 18x38 rect, unit mass
    pub fn player(id: EntityId, position: Vec2) -> Self {
        Self::new(
            id,
            EntityKind::Player,
            position,
            Shape::Rect {
                width: PLAYER_WIDTH,
                height: PLAYER_HEIGHT,
            },
            1.0,
        )
    }

    /// A hut: 130x147 rect, infinite mass (immovable)
    pub fn obstacle(id: EntityId, position: Vec2) -> Self {
        Self::new(
            id,
            EntityKind::Obstacle,
            position,
            Shape::Rect {
                width: HUT_WIDTH,
                height: HUT_HEIGHT,
            },
            f32::INFINITY,
        )
    }

    /// A fireball: radius-16 circle, unit mass, pre-armed velocity
    pub fn projectile(
        id: EntityId,
        source: EntityId,
        position: Vec2,
        velocity: Vec2,
        life_ms: f32,
        facing_left: bool,
    ) -> Self {
        let mut entity = Self::new(
            id,
            EntityKind::Projectile { source, life_ms },
            position,
            Shape::Circle {
                radius: PROJECTILE_RADIUS,
            },
            1.0,
        );
        entity.velocity = velocity;
        entity.facing_left = facing_left;
        entity
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Stable render key: `"pc"`, `"fireball"`, or `"hut"`
    pub fn type_id(&self) -> &'static str {
        match self.kind {
            EntityKind::Player => "pc",
            EntityKind::Projectile { .. } => "fireball",
            EntityKind::Obstacle => "hut",
        }
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// `1 / mass`. Infinite mass yields exactly 0, so immovable bodies
    /// contribute nothing at impulse call sites with no special casing.
    #[inline]
    pub fn inv_mass(&self) -> f32 {
        1.0 / self.mass
    }

    /// Mark for removal by the next expiry sweep. Idempotent; the entity
    /// stays in the collection until the sweep runs.
    pub fn expire(&mut self) {
        self.expired = true;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Begin a jump: winds the thrust timer only if it has run out, so
    /// re-triggering mid-jump cannot extend it. Always raises the jumping
    /// flag.
    pub fn start_jump(&mut self) {
        if self.jump_time_ms <= 0.0 {
            self.jump_time_ms = Self::JUMP_DURATION_MS;
        }
        self.jumping = true;
    }

    /// Cut the jump short: zeroes the thrust timer and lowers the flag.
    /// This is the only way the jumping flag clears; the timer running out
    /// does not clear it.
    pub fn stop_jump(&mut self) {
        self.jump_time_ms = 0.0;
        self.jumping = false;
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    #[inline]
    pub fn jump_time_remaining_ms(&self) -> f32 {
        self.jump_time_ms
    }

    /// Standing on (or sunk into) the ground line, boundary inclusive
    pub fn is_on_ground(&self, world: &World) -> bool {
        self.position.y + self.shape.half_height() >= world.floor_y()
    }

    /// Shape intersection at the two entities' current positions
    pub fn is_colliding(&self, other: &Entity) -> bool {
        self.shape
            .intersects(self.position, &other.shape, other.position)
    }

    /// One tick of velocity integration:
    ///
    /// ```text
    /// v' = v + acceleration - v * friction + gravity  (+ jump thrust)
    /// ```
    ///
    /// The jump thrust `(0, -JUMP_FORCE)` applies every tick the jump timer
    /// is positive: continuous thrust, not a launch impulse. Obstacles are
    /// static and skip integration entirely.
    pub fn step_velocity(&mut self, world: &World, friction: f32) {
        if matches!(self.kind, EntityKind::Obstacle) {
            return;
        }
        let drag = self.velocity * friction;
        self.velocity = self.velocity + self.acceleration - drag + world.gravity();
        if self.jump_time_ms > 0.0 {
            self.velocity += Vec2::new(0.0, -Self::JUMP_FORCE);
        }
    }

    /// One tick of position integration. Position advances by exactly one
    /// velocity quantum per tick; speeds are tuned in units-per-tick, so
    /// `dt_ms` drives only the countdown timers. Projectiles expire the
    /// tick their lifetime reaches zero. Obstacles never move.
    pub fn step_position(&mut self, dt_ms: f32) {
        if matches!(self.kind, EntityKind::Obstacle) {
            return;
        }
        if self.velocity.length() != 0.0 {
            self.position += self.velocity;
        }
        if self.jump_time_ms > 0.0 {
            self.jump_time_ms -= dt_ms;
        }
        if let EntityKind::Projectile { life_ms, .. } = &mut self.kind {
            *life_ms -= dt_ms;
            if *life_ms <= 0.0 {
                self.expired = true;
            }
        }
    }

    /// Impulse collision response between two overlapping bodies.
    ///
    /// Separation and impulse are both split by inverse mass, so an
    /// infinite-mass obstacle soaks its whole share without moving. Pairs
    /// already separating get pushed apart but receive no impulse. Exactly
    /// coincident centers have no contact normal and fail fast.
    pub fn collide(&mut self, other: &mut Entity, restitution: f32) -> Result<(), SimError> {
        let im1 = self.inv_mass();
        let im2 = other.inv_mass();
        let im_sum = im1 + im2;
        // Two immovable bodies have nothing to exchange
        if im_sum == 0.0 {
            return Ok(());
        }

        let delta = self.position - other.position;
        let dir = delta.normalized()?;
        let overlap =
            self.shape.extent_along(dir) + other.shape.extent_along(dir) - delta.length();
        // Rect pairs can overlap in a corner region the center line never
        // crosses; there is no separation to do along it
        if overlap < 0.0 {
            return Ok(());
        }

        // Separate along the center line, split by inverse mass
        let mtd = dir * overlap;
        self.position += mtd * (im1 / im_sum);
        other.position -= mtd * (im2 / im_sum);

        // Impulse only while the pair is still closing
        let vn = (self.velocity - other.velocity).dot(dir);
        if vn <= 0.0 {
            let j = -(1.0 + restitution) * vn / im_sum;
            self.velocity += dir * (j * im1);
            other.velocity -= dir * (j * im2);
        }

        // Hut layering: downward motion never carries through a hut, and a
        // fireball bursts on one
        if matches!(self.kind, EntityKind::Obstacle) {
            if other.velocity.y > 0.0 {
                other.velocity.y = 0.0;
            }
            if matches!(other.kind, EntityKind::Projectile { .. }) {
                other.expire();
            }
        }
        if matches!(other.kind, EntityKind::Obstacle) {
            if self.velocity.y > 0.0 {
                self.velocity.y = 0.0;
            }
            if matches!(self.kind, EntityKind::Projectile { .. }) {
                self.expire();
            }
        }

        Ok(())
    }

    /// Reflect off the world edges. Each axis checks both penetration and
    /// outward velocity, then reflects with restitution and clamps the
    /// shape flush against the bound. The floor is the ground line, not
    /// `max_y`.
    pub fn collide_bounds(&mut self, world: &World, restitution: f32) {
        let hw = self.shape.half_width();
        let hh = self.shape.half_height();
        let mut collided = false;

        if self.position.x - hw <= world.min_x() && self.velocity.x < 0.0 {
            self.velocity.x = -self.velocity.x * restitution;
            self.position.x = world.min_x() + hw;
            collided = true;
        } else if self.position.x + hw >= world.max_x() && self.velocity.x > 0.0 {
            self.velocity.x = -self.velocity.x * restitution;
            self.position.x = world.max_x() - hw;
            collided = true;
        }

        if self.position.y - hh <= world.min_y() && self.velocity.y < 0.0 {
            self.velocity.y = -self.velocity.y * restitution;
            self.position.y = world.min_y() + hh;
            collided = true;
        } else if self.position.y + hh >= world.floor_y() && self.velocity.y > 0.0 {
            self.velocity.y = -self.velocity.y * restitution;
            self.position.y = world.floor_y() - hh;
            collided = true;
        }

        if collided {
            self.on_collide_bounds();
        }
    }

    /// Per-variant reaction to a world-edge impact. Fireballs burst;
    /// everything else shrugs it off.
    fn on_collide_bounds(&mut self) {
        if matches!(self.kind, EntityKind::Projectile { .. }) {
            self.expire();
        }
    }
}
