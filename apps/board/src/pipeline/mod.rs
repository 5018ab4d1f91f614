//! Candidate pipeline workflow core.
//!
//! Two cooperating pieces: the board controller (`board`) owns the
//! in-session candidate list and turns drag gestures into transition
//! intents; the transition coordinator (`coordinator`) applies optimistic
//! stage changes and reconciles them against the service response. The
//! rendering layer only ever observes the stage-partitioned columns and
//! the notice stream (`notify`).

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::candidate::Candidate;

pub mod board;
pub mod coordinator;
pub mod notify;

pub use board::{style_for, BoardConfig, ColumnStyle, DragOutcome, PipelineBoard, StageColumn};
pub use coordinator::TransitionCoordinator;
pub use notify::{notice_channel, Notice, NoticeLevel, NoticeReceiver, NoticeSender};

/// Session-local board state, shared between controller and coordinator.
/// Locked only for synchronous sections; never held across an await.
pub(crate) struct BoardState {
    pub(crate) candidates: Vec<Candidate>,
    /// Candidate ids with an unsettled transition. At most one per
    /// candidate; distinct candidates may be in flight concurrently.
    pub(crate) in_flight: HashSet<String>,
    /// Bumped on every wholesale reload. A transition settle whose
    /// captured epoch no longer matches is dropped without touching state.
    pub(crate) epoch: u64,
}

impl BoardState {
    pub(crate) fn new() -> Self {
        BoardState {
            candidates: Vec::new(),
            in_flight: HashSet::new(),
            epoch: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_candidates(candidates: Vec<Candidate>) -> Self {
        BoardState {
            candidates,
            ..BoardState::new()
        }
    }
}

/// Poisoning cannot leave the state half-written (mutations are single
/// assignments), so recover the guard instead of panicking.
pub(crate) fn lock(state: &Mutex<BoardState>) -> MutexGuard<'_, BoardState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
