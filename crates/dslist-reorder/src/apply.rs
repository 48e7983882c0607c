//! Move Replay
//!
//! Sends a move list to the backend one call at a time.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::ApplyError;
use crate::ordering::Move;

/// Backend list id
pub type ListId = u64;

/// Destination for move calls (the list-ordering endpoint).
///
/// Implementations apply a single move against the list's current
/// server-side order. Not `Send`: the browser fetch futures are not.
#[async_trait(?Send)]
pub trait MoveSink {
    type Error: std::error::Error + 'static;

    async fn move_item(&self, list_id: ListId, mv: Move) -> Result<(), Self::Error>;
}

/// Apply `moves` to `list_id` strictly in order.
///
/// Each call completes before the next is issued. The first failure stops
/// the replay; moves already applied are left in place. Dropping the
/// returned future abandons the remaining moves the same way.
pub async fn apply_moves<S>(sink: &S, list_id: ListId, moves: &[Move]) -> Result<(), ApplyError<S::Error>>
where
    S: MoveSink + ?Sized,
{
    debug!(list_id, total = moves.len(), "applying moves");

    for (index, mv) in moves.iter().copied().enumerate() {
        if let Err(source) = sink.move_item(list_id, mv).await {
            warn!(list_id, index, source = mv.source_index, destination = mv.destination_index, error = %source, "move failed, stopping");
            return Err(ApplyError { index, mv, source });
        }
        debug!(list_id, index, source = mv.source_index, destination = mv.destination_index, "move applied");
    }

    info!(list_id, applied = moves.len(), "all moves applied");
    Ok(())
}
