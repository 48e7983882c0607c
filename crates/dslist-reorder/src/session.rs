//! Reorder Session
//!
//! Owned state of one list view: the baseline last fetched from the
//! backend, the user's working order, and where the current save attempt is.

use tracing::{debug, warn};

use crate::diff::{compute_moves_with, MoveStrategy};
use crate::error::{ApplyError, InconsistentOrderingError, MoveOutOfBounds};
use crate::ordering::{apply_move, position_of, Keyed, Move};

/// Progress of a reconciliation attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReconcileState {
    /// Working order matches the baseline
    #[default]
    Idle,
    /// The user reordered items; waiting for an explicit save
    Computing,
    /// Moves are being sent to the backend
    Applying,
    /// Every move was applied; the caller should rebaseline
    Succeeded,
    /// The attempt stopped. `failed_index` is the failing move, or `None`
    /// when the orderings could not be reconciled at all.
    Failed {
        failed_index: Option<usize>,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("a save is already in progress")]
    SaveInProgress,
    #[error(transparent)]
    Inconsistent(#[from] InconsistentOrderingError),
}

#[derive(Debug, Clone)]
pub struct ReorderSession<T> {
    baseline: Vec<T>,
    working: Vec<T>,
    state: ReconcileState,
    strategy: MoveStrategy,
    /// Set once a save fails: the backend may no longer match `baseline`
    baseline_stale: bool,
}

impl<T: Keyed + Clone> ReorderSession<T> {
    pub fn new(baseline: Vec<T>) -> Self {
        Self {
            working: baseline.clone(),
            baseline,
            state: ReconcileState::Idle,
            strategy: MoveStrategy::default(),
            baseline_stale: false,
        }
    }

    pub fn with_strategy(mut self, strategy: MoveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Last ordering known to match the backend
    pub fn baseline(&self) -> &[T] {
        &self.baseline
    }

    /// Ordering currently shown to the user
    pub fn working(&self) -> &[T] {
        &self.working
    }

    pub fn state(&self) -> &ReconcileState {
        &self.state
    }

    pub fn is_applying(&self) -> bool {
        self.state == ReconcileState::Applying
    }

    /// Whether the displayed order has not been persisted
    pub fn is_dirty(&self) -> bool {
        self.baseline_stale
            || matches!(self.state, ReconcileState::Failed { .. })
            || !same_order(&self.baseline, &self.working)
    }

    /// Whether only a fresh fetch can tell what the backend holds.
    ///
    /// True after any failed save, until [`rebaseline`](Self::rebaseline)
    /// or a save that completes.
    pub fn needs_reload(&self) -> bool {
        self.baseline_stale
    }

    /// Apply a local drag to the working order.
    ///
    /// Returns whether the order changed. Ignored while a save is running.
    pub fn reorder(&mut self, mv: Move) -> Result<bool, MoveOutOfBounds> {
        if self.is_applying() {
            warn!(%mv, "reorder ignored while saving");
            return Ok(false);
        }
        if mv.is_noop() {
            return Ok(false);
        }
        apply_move(&mut self.working, mv)?;
        self.state = if !self.baseline_stale && same_order(&self.baseline, &self.working) {
            ReconcileState::Idle
        } else {
            ReconcileState::Computing
        };
        debug!(%mv, state = ?self.state, "working order changed");
        Ok(true)
    }

    /// Move the item with `id` to `destination` in the working order.
    pub fn move_item(&mut self, id: T::Id, destination: usize) -> Result<bool, MoveOutOfBounds> {
        match position_of(&self.working, id) {
            Some(source) => self.reorder(Move::new(source, destination)),
            None => Ok(false),
        }
    }

    /// Start a save against `fresh_baseline`, the ordering just re-fetched
    /// from the backend. Returns the moves to apply.
    ///
    /// The baseline itself is only replaced by [`rebaseline`](Self::rebaseline).
    pub fn prepare_save(&mut self, fresh_baseline: &[T]) -> Result<Vec<Move>, SessionError> {
        if self.is_applying() {
            return Err(SessionError::SaveInProgress);
        }
        match compute_moves_with(self.strategy, fresh_baseline, &self.working) {
            Ok(moves) => {
                self.state = ReconcileState::Applying;
                Ok(moves)
            }
            Err(err) => {
                warn!(error = %err, "cannot reconcile working order with backend");
                self.baseline_stale = true;
                self.state = ReconcileState::Failed {
                    failed_index: None,
                    message: err.to_string(),
                };
                Err(err.into())
            }
        }
    }

    /// Record the outcome of applying the moves from [`prepare_save`](Self::prepare_save).
    ///
    /// Ignored unless a save is in progress.
    pub fn complete_save<E>(&mut self, result: &Result<(), ApplyError<E>>)
    where
        E: std::error::Error + 'static,
    {
        if !self.is_applying() {
            warn!(state = ?self.state, "save result ignored, no save in progress");
            return;
        }
        self.state = match result {
            Ok(()) => {
                self.baseline_stale = false;
                ReconcileState::Succeeded
            }
            Err(err) => {
                self.baseline_stale = true;
                ReconcileState::Failed {
                    failed_index: Some(err.index),
                    message: err.to_string(),
                }
            }
        };
    }

    /// Replace baseline and working order with a fresh fetch and return to idle.
    pub fn rebaseline(&mut self, fresh: Vec<T>) {
        self.working = fresh.clone();
        self.baseline = fresh;
        self.baseline_stale = false;
        self.state = ReconcileState::Idle;
    }

    /// Drop local changes, showing the baseline again.
    ///
    /// A stale baseline stays dirty; callers should reload instead.
    pub fn revert(&mut self) {
        if self.is_applying() {
            return;
        }
        self.working = self.baseline.clone();
        self.state = if self.baseline_stale {
            ReconcileState::Computing
        } else {
            ReconcileState::Idle
        };
    }
}

fn same_order<T: Keyed>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.key() == y.key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::{apply_moves, ListId, MoveSink};
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq, thiserror::Error)]
    #[error("HTTP 500")]
    struct ServerError;

    /// Backend list that can be told to fail the n-th call it receives
    struct FakeBackend {
        items: RefCell<Vec<char>>,
        calls: Cell<usize>,
        fail_on_call: Cell<Option<usize>>,
    }

    impl FakeBackend {
        fn new(items: &str) -> Self {
            Self {
                items: RefCell::new(items.chars().collect()),
                calls: Cell::new(0),
                fail_on_call: Cell::new(None),
            }
        }

        fn fetch(&self) -> Vec<char> {
            self.items.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl MoveSink for FakeBackend {
        type Error = ServerError;

        async fn move_item(&self, _list_id: ListId, mv: Move) -> Result<(), ServerError> {
            let call = self.calls.get();
            self.calls.set(call + 1);
            if self.fail_on_call.get() == Some(call) {
                return Err(ServerError);
            }
            apply_move(&mut *self.items.borrow_mut(), mv).map_err(|_| ServerError)
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_reorder_marks_dirty() {
        let mut session = ReorderSession::new(chars("ABCD"));
        assert_eq!(session.state(), &ReconcileState::Idle);
        assert!(!session.is_dirty());

        assert!(session.reorder(Move::new(0, 2)).unwrap());
        assert_eq!(session.working(), chars("BCAD").as_slice());
        assert_eq!(session.state(), &ReconcileState::Computing);
        assert!(session.is_dirty());
        // Baseline untouched by local drags
        assert_eq!(session.baseline(), chars("ABCD").as_slice());
    }

    #[test]
    fn test_reorder_back_to_baseline_is_idle() {
        let mut session = ReorderSession::new(chars("ABCD"));
        session.reorder(Move::new(0, 2)).unwrap();
        session.reorder(Move::new(2, 0)).unwrap();
        assert_eq!(session.state(), &ReconcileState::Idle);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_noop_and_unknown_moves() {
        let mut session = ReorderSession::new(chars("ABC"));
        assert!(!session.reorder(Move::new(1, 1)).unwrap());
        assert!(!session.move_item('Z', 0).unwrap());
        assert!(session.reorder(Move::new(0, 3)).is_err());
        assert_eq!(session.state(), &ReconcileState::Idle);
    }

    #[test]
    fn test_move_item_by_id() {
        let mut session = ReorderSession::new(chars("ABCDE"));
        assert!(session.move_item('E', 0).unwrap());
        assert_eq!(session.working(), chars("EABCD").as_slice());
    }

    #[test]
    fn test_revert_restores_baseline() {
        let mut session = ReorderSession::new(chars("ABC"));
        session.reorder(Move::new(2, 0)).unwrap();
        session.revert();
        assert_eq!(session.working(), chars("ABC").as_slice());
        assert_eq!(session.state(), &ReconcileState::Idle);
    }

    #[test]
    fn test_second_save_is_rejected_while_applying() {
        let mut session = ReorderSession::new(chars("ABC"));
        session.reorder(Move::new(2, 0)).unwrap();
        session.prepare_save(&chars("ABC")).unwrap();
        assert!(session.is_applying());

        assert_eq!(session.prepare_save(&chars("ABC")), Err(SessionError::SaveInProgress));
        // Drags are ignored too
        assert!(!session.reorder(Move::new(0, 1)).unwrap());
        session.revert();
        assert!(session.is_applying());
    }

    #[test]
    fn test_inconsistent_backend_fails_attempt() {
        let mut session = ReorderSession::new(chars("ABC"));
        session.reorder(Move::new(2, 0)).unwrap();

        // Someone added D to the list on the server
        let err = session.prepare_save(&chars("ABCD")).unwrap_err();
        assert!(matches!(err, SessionError::Inconsistent(InconsistentOrderingError::LengthMismatch { .. })));
        assert!(matches!(session.state(), ReconcileState::Failed { failed_index: None, .. }));
        assert!(session.is_dirty());
        assert_eq!(session.baseline(), chars("ABC").as_slice());
    }

    #[tokio::test]
    async fn test_save_then_rebaseline() {
        let backend = FakeBackend::new("ABCDE");
        let mut session = ReorderSession::new(backend.fetch());
        session.move_item('E', 0).unwrap();

        let moves = session.prepare_save(&backend.fetch()).unwrap();
        let result = apply_moves(&backend, 1, &moves).await;
        session.complete_save(&result);
        assert_eq!(session.state(), &ReconcileState::Succeeded);

        session.rebaseline(backend.fetch());
        assert_eq!(session.state(), &ReconcileState::Idle);
        assert_eq!(session.baseline(), chars("EABCD").as_slice());
        assert!(!session.is_dirty());
    }

    #[tokio::test]
    async fn test_failed_save_then_retry_converges() {
        let backend = FakeBackend::new("ABCDEF");
        let mut session = ReorderSession::new(backend.fetch());
        // A to the end flags five shifted items
        session.move_item('A', 5).unwrap();

        backend.fail_on_call.set(Some(2));
        let moves = session.prepare_save(&backend.fetch()).unwrap();
        assert_eq!(moves.len(), 5);
        let result = apply_moves(&backend, 1, &moves).await;
        session.complete_save(&result);

        match session.state() {
            ReconcileState::Failed { failed_index, .. } => assert_eq!(*failed_index, Some(2)),
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(backend.calls.get(), 3);
        assert!(session.is_dirty());
        assert_eq!(session.working(), chars("BCDEFA").as_slice());

        // Retry against the partially updated backend
        backend.fail_on_call.set(None);
        let moves = session.prepare_save(&backend.fetch()).unwrap();
        let result = apply_moves(&backend, 1, &moves).await;
        session.complete_save(&result);
        assert_eq!(session.state(), &ReconcileState::Succeeded);

        session.rebaseline(backend.fetch());
        assert_eq!(session.baseline(), chars("BCDEFA").as_slice());
    }

    #[tokio::test]
    async fn test_dragging_back_after_partial_failure_stays_dirty() {
        let backend = FakeBackend::new("ABCDEF");
        let mut session = ReorderSession::new(backend.fetch());
        session.move_item('A', 5).unwrap();

        backend.fail_on_call.set(Some(2));
        let moves = session.prepare_save(&backend.fetch()).unwrap();
        let result = apply_moves(&backend, 1, &moves).await;
        session.complete_save(&result);
        assert_eq!(backend.fetch(), chars("BCADEF"));

        // Back to the order first loaded, which the backend no longer has
        assert!(session.move_item('A', 0).unwrap());
        assert_eq!(session.working(), chars("ABCDEF").as_slice());
        assert_ne!(session.working(), backend.fetch().as_slice());
        assert_eq!(session.state(), &ReconcileState::Computing);
        assert!(session.is_dirty());
        assert!(session.needs_reload());

        // Local revert cannot restore the truth either
        session.revert();
        assert!(session.is_dirty());
        assert_ne!(session.state(), &ReconcileState::Idle);

        // Saving from here converges on the displayed order
        let moves = session.prepare_save(&backend.fetch()).unwrap();
        let result = apply_moves(&backend, 1, &moves).await;
        session.complete_save(&result);
        assert_eq!(session.state(), &ReconcileState::Succeeded);
        assert!(!session.needs_reload());
        assert_eq!(backend.fetch(), chars("ABCDEF"));

        session.rebaseline(backend.fetch());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_drag_after_inconsistent_backend_then_reload() {
        let mut session = ReorderSession::new(chars("ABC"));
        session.reorder(Move::new(2, 0)).unwrap();
        session.prepare_save(&chars("ABCD")).unwrap_err();

        // Dragging back to the stale baseline does not clear the failure
        session.reorder(Move::new(0, 2)).unwrap();
        assert_eq!(session.working(), chars("ABC").as_slice());
        assert_eq!(session.state(), &ReconcileState::Computing);
        assert!(session.is_dirty());
        assert!(session.needs_reload());

        // Discard goes through a fresh fetch
        session.rebaseline(chars("ABCD"));
        assert_eq!(session.state(), &ReconcileState::Idle);
        assert!(!session.is_dirty());
        assert!(!session.needs_reload());
    }

    #[tokio::test]
    async fn test_late_save_result_is_ignored() {
        let backend = FakeBackend::new("ABC");
        let mut session = ReorderSession::new(backend.fetch());
        session.move_item('C', 0).unwrap();
        let moves = session.prepare_save(&backend.fetch()).unwrap();
        let result = apply_moves(&backend, 1, &moves).await;

        // The page reloaded before the result came back
        session.rebaseline(chars("ABC"));
        session.complete_save(&result);
        assert_eq!(session.state(), &ReconcileState::Idle);

        let failed: Result<(), ApplyError<ServerError>> = Err(ApplyError {
            index: 0,
            mv: Move::new(2, 0),
            source: ServerError,
        });
        session.complete_save(&failed);
        assert_eq!(session.state(), &ReconcileState::Idle);
        assert!(!session.is_dirty());
    }

    #[tokio::test]
    async fn test_minimal_strategy_session() {
        let backend = FakeBackend::new("ABCDEF");
        let mut session = ReorderSession::new(backend.fetch()).with_strategy(MoveStrategy::Minimal);
        session.move_item('A', 5).unwrap();

        let moves = session.prepare_save(&backend.fetch()).unwrap();
        assert_eq!(moves, vec![Move::new(0, 5)]);
        let result = apply_moves(&backend, 1, &moves).await;
        session.complete_save(&result);
        assert_eq!(backend.fetch(), chars("BCDEFA"));
    }
}
