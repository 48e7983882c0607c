//! Ordering Diff
//!
//! Turns a user-produced ordering into the move calls that bring the
//! backend's ordering in line with it.

use std::collections::HashMap;

use tracing::debug;

use crate::error::InconsistentOrderingError;
use crate::ordering::{Keyed, Move};

/// How the move list is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveStrategy {
    /// Walk the new ordering front to back and emit a move for every item
    /// that is not yet at its new index, tracking the list as each move is
    /// applied. Moving one item back costs a single call; moving it forward
    /// across k positions costs k calls, one per item that shifts back.
    #[default]
    Sequential,
    /// Emit `(original index, new index)` for every displaced item, looked
    /// up against the untouched original. This is the literal diff of the
    /// two orderings; it does NOT replay to the new ordering against a
    /// remove-then-insert backend once two items are displaced.
    Snapshot,
    /// Move only the items outside the longest common subsequence of the
    /// two orderings. Fewer calls, different call order: a behavioral
    /// change for anything watching the backend's replacement stream.
    Minimal,
}

/// Compute the moves turning `original` into `new` with the default strategy.
pub fn compute_moves<T: Keyed>(original: &[T], new: &[T]) -> Result<Vec<Move>, InconsistentOrderingError> {
    compute_moves_with(MoveStrategy::default(), original, new)
}

/// Compute the moves turning `original` into `new`.
///
/// Fails without emitting anything if the two orderings are not permutations
/// of the same id set.
pub fn compute_moves_with<T: Keyed>(
    strategy: MoveStrategy,
    original: &[T],
    new: &[T],
) -> Result<Vec<Move>, InconsistentOrderingError> {
    let original_index = index_permutation(original, new)?;
    let original_ids: Vec<T::Id> = original.iter().map(Keyed::key).collect();
    let new_ids: Vec<T::Id> = new.iter().map(Keyed::key).collect();

    let moves = match strategy {
        MoveStrategy::Sequential => sequential_moves(original_ids, &new_ids),
        MoveStrategy::Snapshot => snapshot_moves(&original_index, &new_ids),
        MoveStrategy::Minimal => minimal_moves(original_ids, &new_ids, &original_index),
    };

    debug!(?strategy, items = new.len(), moves = moves.len(), "computed reorder moves");
    Ok(moves)
}

/// Map every id of `original` to its index, checking that `new` holds
/// exactly the same ids.
fn index_permutation<T: Keyed>(
    original: &[T],
    new: &[T],
) -> Result<HashMap<T::Id, usize>, InconsistentOrderingError> {
    if original.len() != new.len() {
        return Err(InconsistentOrderingError::LengthMismatch {
            original: original.len(),
            new: new.len(),
        });
    }

    let mut index = HashMap::with_capacity(original.len());
    for (i, item) in original.iter().enumerate() {
        if index.insert(item.key(), i).is_some() {
            return Err(InconsistentOrderingError::DuplicateId { id: format!("{:?}", item.key()) });
        }
    }

    // Same length, no duplicates on either side, every new id known:
    // the sets are equal.
    let mut seen = HashMap::with_capacity(new.len());
    for item in new {
        let id = item.key();
        if !index.contains_key(&id) {
            return Err(InconsistentOrderingError::UnknownId { id: format!("{:?}", id) });
        }
        if seen.insert(id, ()).is_some() {
            return Err(InconsistentOrderingError::DuplicateId { id: format!("{:?}", id) });
        }
    }

    Ok(index)
}

fn sequential_moves<Id: Copy + Eq>(mut working: Vec<Id>, new_ids: &[Id]) -> Vec<Move> {
    let mut moves = Vec::new();
    for (new_index, id) in new_ids.iter().enumerate() {
        // working[..new_index] already matches, so the item sits at or after new_index
        let Some(current) = working.iter().position(|w| w == id) else { continue };
        if current != new_index {
            let moved = working.remove(current);
            working.insert(new_index, moved);
            moves.push(Move::new(current, new_index));
        }
    }
    moves
}

fn snapshot_moves<Id: Copy + Eq + std::hash::Hash>(original_index: &HashMap<Id, usize>, new_ids: &[Id]) -> Vec<Move> {
    new_ids
        .iter()
        .enumerate()
        .filter_map(|(new_index, id)| {
            let original = *original_index.get(id)?;
            (original != new_index).then(|| Move::new(original, new_index))
        })
        .collect()
}

fn minimal_moves<Id: Copy + Eq + std::hash::Hash>(
    mut working: Vec<Id>,
    new_ids: &[Id],
    original_index: &HashMap<Id, usize>,
) -> Vec<Move> {
    let sequence: Vec<usize> = new_ids.iter().filter_map(|id| original_index.get(id).copied()).collect();
    let stable = longest_increasing(&sequence);

    let mut moves = Vec::new();
    for (k, id) in new_ids.iter().enumerate() {
        if stable[k] {
            continue;
        }
        let Some(source) = working.iter().position(|w| w == id) else { continue };
        let moved = working.remove(source);
        // Place right after the item that precedes it in the new ordering.
        // That item is either stable or was already placed.
        let destination = match k.checked_sub(1) {
            None => 0,
            Some(prev) => working
                .iter()
                .position(|w| *w == new_ids[prev])
                .map_or(0, |p| p + 1),
        };
        working.insert(destination, moved);
        if source != destination {
            moves.push(Move::new(source, destination));
        }
    }
    moves
}

/// Flags the members of one longest strictly increasing subsequence.
fn longest_increasing(sequence: &[usize]) -> Vec<bool> {
    let mut tails: Vec<usize> = Vec::new();
    let mut prev: Vec<Option<usize>> = vec![None; sequence.len()];

    for (k, value) in sequence.iter().enumerate() {
        let pos = tails.partition_point(|&t| sequence[t] < *value);
        prev[k] = pos.checked_sub(1).map(|p| tails[p]);
        if pos == tails.len() {
            tails.push(k);
        } else {
            tails[pos] = k;
        }
    }

    let mut stable = vec![false; sequence.len()];
    let mut cursor = tails.last().copied();
    while let Some(k) = cursor {
        stable[k] = true;
        cursor = prev[k];
    }
    stable
}
