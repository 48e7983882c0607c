//! Orderings and Moves
//!
//! Item identity, the move instruction understood by the backend, and a
//! reference simulator of the backend's remove-then-insert behavior.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::MoveOutOfBounds;

/// An item that can be placed in an ordering.
///
/// Identity is by key: no two items of one ordering may share a key.
pub trait Keyed {
    type Id: Copy + Eq + Hash + fmt::Debug;

    fn key(&self) -> Self::Id;
}

impl Keyed for char {
    type Id = char;

    fn key(&self) -> char {
        *self
    }
}

impl Keyed for u64 {
    type Id = u64;

    fn key(&self) -> u64 {
        *self
    }
}

/// Relocate the item at `source_index` to `destination_index`.
///
/// Both indices are zero-based. The destination is a position in the list
/// after the item has been removed, matching `POST /lists/{id}/replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub source_index: usize,
    pub destination_index: usize,
}

impl Move {
    pub fn new(source_index: usize, destination_index: usize) -> Self {
        Self { source_index, destination_index }
    }

    /// A move that leaves every item where it is
    pub fn is_noop(&self) -> bool {
        self.source_index == self.destination_index
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source_index, self.destination_index)
    }
}

/// Apply one move to `items` exactly as the backend does.
pub fn apply_move<T>(items: &mut Vec<T>, mv: Move) -> Result<(), MoveOutOfBounds> {
    let len = items.len();
    if mv.source_index >= len || mv.destination_index >= len {
        return Err(MoveOutOfBounds { mv, len });
    }
    let item = items.remove(mv.source_index);
    items.insert(mv.destination_index, item);
    Ok(())
}

/// Replay `moves` in order against a copy of `original`.
pub fn replay<T: Clone>(original: &[T], moves: &[Move]) -> Result<Vec<T>, MoveOutOfBounds> {
    let mut items = original.to_vec();
    for mv in moves {
        apply_move(&mut items, *mv)?;
    }
    Ok(items)
}

/// Convert a drop slot into the destination of a move.
///
/// Slots count the gaps of the list before the dragged item is lifted out:
/// slot 0 is above the first item, slot `len` is below the last one.
pub fn slot_to_destination(from: usize, slot: usize) -> usize {
    if slot > from {
        slot - 1
    } else {
        slot
    }
}

/// Index of the item with `id`, if present.
pub fn position_of<T: Keyed>(items: &[T], id: T::Id) -> Option<usize> {
    items.iter().position(|item| item.key() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_apply_move_forward_and_back() {
        let mut items = chars("ABCD");
        apply_move(&mut items, Move::new(0, 2)).unwrap();
        assert_eq!(items, chars("BCAD"));

        apply_move(&mut items, Move::new(3, 0)).unwrap();
        assert_eq!(items, chars("DBCA"));
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let mut items = chars("ABC");
        let err = apply_move(&mut items, Move::new(1, 3)).unwrap_err();
        assert_eq!(err.len, 3);
        assert_eq!(err.mv, Move::new(1, 3));
        // Nothing was touched
        assert_eq!(items, chars("ABC"));
    }

    #[test]
    fn test_replay_stops_at_invalid_move() {
        let result = replay(&chars("AB"), &[Move::new(0, 1), Move::new(5, 0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_slot_to_destination() {
        // Dragging the item at index 1 within [A, B, C, D]
        assert_eq!(slot_to_destination(1, 0), 0);
        assert_eq!(slot_to_destination(1, 1), 1);
        assert_eq!(slot_to_destination(1, 2), 1);
        assert_eq!(slot_to_destination(1, 4), 3);

        let mut items = chars("ABCD");
        apply_move(&mut items, Move::new(1, slot_to_destination(1, 4))).unwrap();
        assert_eq!(items, chars("ACDB"));
    }

    #[test]
    fn test_move_wire_format() {
        let json = serde_json::to_string(&Move::new(2, 0)).unwrap();
        assert_eq!(json, r#"{"sourceIndex":2,"destinationIndex":0}"#);
    }
}
