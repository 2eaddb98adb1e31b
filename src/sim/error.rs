//! Simulation error taxonomy
//!
//! Every failure here indicates a logic bug or a corrupted state, not a
//! transient condition; callers should surface these, never retry them.

use thiserror::Error;

use super::entity::EntityId;

/// Errors surfaced by simulation operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// A zero-length vector was asked for its direction. Also raised by
    /// collision resolution when two centers coincide exactly (no contact
    /// normal is defined).
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    /// Removal was requested for an id not present in the entity collection.
    #[error("no entity with id {0}")]
    EntityNotFound(EntityId),
}
