//! Sequential edit-save-navigate flow over a queue of visit records.
//!
//! An agent edits properties one after another. Moving to the previous or
//! next record first persists the open record's edits (when it has any and
//! they are valid), and only moves once that save succeeds.
//!
//! The navigator is a single-session object driven from one control flow.
//! It takes `&self` so that a second `advance` issued while the first is
//! still awaiting its save can be observed and rejected; it is not `Sync`
//! and must not be shared between sessions.

use std::cell::{Cell, RefCell};
use std::error::Error;
use std::future::Future;

use tracing::{debug, warn};

use crate::traits::{Id, VisitRecord};

/// Error type returned by caller-supplied save operations.
pub type SaveError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorPhase {
    /// No record open.
    Idle,
    /// A record is open for editing.
    Editing,
    /// The open record's edits are being persisted.
    Saving,
}

/// Navigation failures, carrying the ids involved.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError<I: Id> {
    #[error("no record is open")]
    NotEditing,
    #[error("record {given:?} is not the open record {open:?}")]
    RecordMismatch { open: I, given: I },
    #[error("record {0:?} is not in the queue")]
    RecordNotInQueue(I),
    #[error("queue has {0} record(s), nothing to advance to")]
    QueueTooShort(usize),
    #[error("a save is already in progress for record {0:?}")]
    SaveInProgress(I),
    #[error("saving record {id:?} failed")]
    SaveFailed {
        id: I,
        #[source]
        source: SaveError,
    },
    #[error("record {0:?} was saved but the session changed before navigation completed")]
    Superseded(I),
}

/// Snapshot of the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitQueueState<I> {
    /// Record order after the caller's current filter and sort.
    pub ordered_ids: Vec<I>,
    pub current_id: Option<I>,
    pub pending_save: Option<I>,
}

impl<I> Default for VisitQueueState<I> {
    fn default() -> Self {
        Self {
            ordered_ids: Vec::new(),
            current_id: None,
            pending_save: None,
        }
    }
}

#[derive(Debug)]
pub struct VisitQueueNavigator<I: Id> {
    state: RefCell<VisitQueueState<I>>,
    /// Bumped by `open` and `close`; a save that finishes under a different
    /// session does not move the cursor.
    session: Cell<u64>,
    /// Bumped per save and by `close`; only the matching save clears
    /// `pending_save`.
    save_ticket: Cell<u64>,
}

impl<I: Id> VisitQueueNavigator<I> {
    pub fn new(ordered_ids: Vec<I>) -> Self {
        Self {
            state: RefCell::new(VisitQueueState {
                ordered_ids,
                ..VisitQueueState::default()
            }),
            session: Cell::new(0),
            save_ticket: Cell::new(0),
        }
    }

    /// Replaces the queue order, e.g. after the caller changes filters.
    ///
    /// The open record stays open even if the new order no longer contains
    /// it; the next `advance` then reports `RecordNotInQueue`.
    pub fn set_order(&self, ordered_ids: Vec<I>) {
        self.state.borrow_mut().ordered_ids = ordered_ids;
    }

    /// Opens a record for editing from any phase.
    ///
    /// Unsaved edits on a previously open record are not persisted here.
    pub fn open(&self, id: I) {
        debug!(record = ?id, "opening visit record");
        self.session.set(self.session.get() + 1);
        self.state.borrow_mut().current_id = Some(id);
    }

    /// Ends the editing session. Pending edits are not persisted.
    pub fn close(&self) {
        self.session.set(self.session.get() + 1);
        self.save_ticket.set(self.save_ticket.get() + 1);
        let mut state = self.state.borrow_mut();
        debug!(record = ?state.current_id, "closing visit record");
        state.current_id = None;
        state.pending_save = None;
    }

    pub fn current(&self) -> Option<I> {
        self.state.borrow().current_id.clone()
    }

    pub fn phase(&self) -> NavigatorPhase {
        let state = self.state.borrow();
        if state.pending_save.is_some() {
            NavigatorPhase::Saving
        } else if state.current_id.is_some() {
            NavigatorPhase::Editing
        } else {
            NavigatorPhase::Idle
        }
    }

    pub fn state(&self) -> VisitQueueState<I> {
        self.state.borrow().clone()
    }

    /// The record `advance` would move to, without moving.
    pub fn peek(&self, direction: Direction) -> Result<I, NavigationError<I>> {
        let state = self.state.borrow();
        let current = state.current_id.as_ref().ok_or(NavigationError::NotEditing)?;
        step(&state.ordered_ids, current, direction)
    }

    /// Moves to the neighbouring record, saving the open one first if needed.
    ///
    /// `record` is the live edit state of the open record. When it is dirty
    /// and valid, `save` is awaited with its id and the cursor only moves if
    /// the save succeeds. The target is recomputed against the queue order
    /// at that point, so a `set_order` issued during the save is honoured.
    /// Returns the id of the newly open record.
    pub async fn advance<R, F, Fut, E>(
        &self,
        direction: Direction,
        record: &R,
        save: F,
    ) -> Result<I, NavigationError<I>>
    where
        R: VisitRecord<Id = I>,
        F: FnOnce(I) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Into<SaveError>,
    {
        let (current, ticket) = {
            let mut state = self.state.borrow_mut();
            if let Some(pending) = &state.pending_save {
                return Err(NavigationError::SaveInProgress(pending.clone()));
            }
            let current = state.current_id.clone().ok_or(NavigationError::NotEditing)?;
            if record.id() != &current {
                return Err(NavigationError::RecordMismatch {
                    open: current,
                    given: record.id().clone(),
                });
            }
            let target = step(&state.ordered_ids, &current, direction)?;

            if !(record.is_dirty() && record.is_valid()) {
                debug!(from = ?current, to = ?target, ?direction, "advancing without save");
                state.current_id = Some(target.clone());
                return Ok(target);
            }

            let ticket = self.save_ticket.get() + 1;
            self.save_ticket.set(ticket);
            state.pending_save = Some(current.clone());
            (current, ticket)
        };

        let session = self.session.get();
        let guard = SaveGuard {
            navigator: self,
            ticket,
        };
        debug!(record = ?current, "saving before advance");
        let outcome = save(current.clone()).await;
        drop(guard);

        if let Err(err) = outcome {
            let source: SaveError = err.into();
            warn!(record = ?current, error = %source, "save failed, staying on record");
            return Err(NavigationError::SaveFailed {
                id: current,
                source,
            });
        }

        if self.session.get() != session {
            warn!(record = ?current, "session changed during save, not advancing");
            return Err(NavigationError::Superseded(current));
        }

        let mut state = self.state.borrow_mut();
        let target = step(&state.ordered_ids, &current, direction).inspect_err(|err| {
            warn!(record = ?current, error = %err, "queue changed during save, not advancing");
        })?;
        debug!(from = ?current, to = ?target, ?direction, "advanced after save");
        state.current_id = Some(target.clone());
        Ok(target)
    }
}

/// Clears the Saving marker when the save settles or the advance future is
/// dropped mid-save.
struct SaveGuard<'a, I: Id> {
    navigator: &'a VisitQueueNavigator<I>,
    ticket: u64,
}

impl<I: Id> Drop for SaveGuard<'_, I> {
    fn drop(&mut self) {
        if self.navigator.save_ticket.get() == self.ticket {
            self.navigator.state.borrow_mut().pending_save = None;
        }
    }
}

/// Neighbour of `current` in `ordered`, wrapping at both ends.
fn step<I: Id>(ordered: &[I], current: &I, direction: Direction) -> Result<I, NavigationError<I>> {
    let len = ordered.len();
    if len <= 1 {
        return Err(NavigationError::QueueTooShort(len));
    }
    let position = ordered
        .iter()
        .position(|id| id == current)
        .ok_or_else(|| NavigationError::RecordNotInQueue(current.clone()))?;

    let target = match direction {
        Direction::Next => (position + 1) % len,
        Direction::Previous => (position + len - 1) % len,
    };
    Ok(ordered[target].clone())
}
