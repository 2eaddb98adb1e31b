//! Game state: exclusive owner of every entity
//!
//! All entities live in one `Vec` in id order (ids are allocated in
//! insertion order and removal preserves order), which gives the tick loop
//! a stable, deterministic iteration order. Nothing else in the crate holds
//! an entity; everyone else works through ids.

use crate::consts::*;

use super::entity::{Entity, EntityId};
use super::error::SimError;
use super::vec2::Vec2;
use super::world::World;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    world: World,
    /// Every live entity, in id order
    entities: Vec<Entity>,
    player_id: EntityId,
    /// Which character skin the player wears (render concern, sim-owned
    /// so it stays deterministic)
    selected_character: usize,
    /// Next entity id to allocate
    next_id: u32,
}

impl GameState {
    /// Number of character skins the player can cycle through
    pub const NUM_CHARACTERS: usize = 3;

    /// Build a fresh state: the player at the spawn point plus one hut per
    /// layout position. The player gets the lowest id.
    pub fn new(gravity: Vec2) -> Self {
        let mut state = Self {
            world: World::new(gravity),
            entities: Vec::new(),
            player_id: EntityId(0),
            selected_character: 0,
            next_id: 1,
        };

        let player_id = state.next_entity_id();
        state.player_id = player_id;
        state.add_entity(Entity::player(
            player_id,
            Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
        ));

        for pos in state.world.obstacle_positions() {
            let id = state.next_entity_id();
            state.add_entity(Entity::obstacle(id, pos));
        }

        state
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn player_id(&self) -> EntityId {
        self.player_id
    }

    /// The player entity. Seeded at construction, never expired by the
    /// sweep, so it is always present.
    pub fn player(&self) -> &Entity {
        self.entities
            .iter()
            .find(|e| e.id() == self.player_id)
            .expect("player entity is seeded at construction and never removed")
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        let player_id = self.player_id;
        self.entities
            .iter_mut()
            .find(|e| e.id() == player_id)
            .expect("player entity is seeded at construction and never removed")
    }

    /// All live entities in id order. Treat it as a snapshot: mutations
    /// made after taking the slice are not reflected into it.
    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub(crate) fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    /// Allocate a new entity id (monotonic, never reused)
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append an entity. Ids come from `next_entity_id`, so appending keeps
    /// the collection in id order.
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove by identity. An absent id is an error, not a silent no-op.
    pub fn remove_entity(&mut self, id: EntityId) -> Result<(), SimError> {
        match self.entities.iter().position(|e| e.id() == id) {
            Some(index) => {
                self.entities.remove(index);
                Ok(())
            }
            None => Err(SimError::EntityNotFound(id)),
        }
    }

    /// Sweep out everything marked expired. Returns how many were removed.
    /// This is the only place expired entities actually leave the
    /// collection. The player is exempt; `player()` relies on that.
    pub fn prune_expired(&mut self) -> usize {
        let before = self.entities.len();
        let player_id = self.player_id;
        self.entities
            .retain(|e| !e.is_expired() || e.id() == player_id);
        before - self.entities.len()
    }

    #[inline]
    pub fn selected_character(&self) -> usize {
        self.selected_character
    }

    /// Advance to the next character skin, wrapping around
    pub fn cycle_character(&mut self) {
        self.selected_character = (self.selected_character + 1) % Self::NUM_CHARACTERS;
    }
}
