//! Reconciliation Errors
//!
//! Failures raised while diffing orderings or replaying moves.

use thiserror::Error;

use crate::ordering::Move;

/// The two orderings are not permutations of the same id set.
///
/// Ids are rendered with `Debug` so the error does not carry the item type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InconsistentOrderingError {
    #[error("orderings differ in length: original has {original} items, new has {new}")]
    LengthMismatch { original: usize, new: usize },
    #[error("id {id} appears more than once")]
    DuplicateId { id: String },
    #[error("id {id} is not present in the original ordering")]
    UnknownId { id: String },
}

/// A move referenced a position outside the ordering it was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("move {mv} is out of bounds for an ordering of {len} items")]
pub struct MoveOutOfBounds {
    pub mv: Move,
    pub len: usize,
}

/// A move call failed while replaying a move list against the backend.
///
/// Moves before `index` were applied and stay applied.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("move #{index} ({mv}) failed: {source}")]
pub struct ApplyError<E>
where
    E: std::error::Error + 'static,
{
    /// Position of the failing move in the emitted move list
    pub index: usize,
    pub mv: Move,
    #[source]
    pub source: E,
}
