//! DSList Order Reconciliation
//!
//! Diffs a locally reordered game list against the backend's ordering and
//! replays the difference through `POST /lists/{id}/replacement`.
//!
//! - ordering: item identity, moves, and the backend simulator
//! - diff: move list computation
//! - apply: sequential replay against a [`MoveSink`]
//! - session: per-view state machine

mod apply;
mod diff;
mod error;
mod ordering;
mod session;

pub use apply::{apply_moves, ListId, MoveSink};
pub use diff::{compute_moves, compute_moves_with, MoveStrategy};
pub use error::{ApplyError, InconsistentOrderingError, MoveOutOfBounds};
pub use ordering::{apply_move, position_of, replay, slot_to_destination, Keyed, Move};
pub use session::{ReconcileState, ReorderSession, SessionError};
