//! Stage Transition Coordinator.
//!
//! Runs the three-phase optimistic protocol for one transition:
//! 1. capture the previous stage and apply the target stage locally, both
//!    under one lock (synchronous — the change is visible immediately);
//! 2. await the service's `update_stage` (the only suspension point);
//! 3. reconcile: confirm with the server record, or revert to the captured
//!    stage and emit an error notice.
//!
//! At most one transition per candidate may be unsettled at a time; the
//! guard is checked and set under the same lock as the optimistic apply.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use crate::errors::BoardError;
use crate::models::candidate::{Candidate, Stage};
use crate::pipeline::notify::{Notice, NoticeSender};
use crate::pipeline::{lock, BoardState};
use crate::service::{CandidateService, ServiceError};

#[derive(Clone)]
pub struct TransitionCoordinator {
    state: Arc<Mutex<BoardState>>,
    service: Arc<dyn CandidateService>,
    notices: NoticeSender,
}

impl TransitionCoordinator {
    pub(crate) fn new(
        state: Arc<Mutex<BoardState>>,
        service: Arc<dyn CandidateService>,
        notices: NoticeSender,
    ) -> Self {
        TransitionCoordinator {
            state,
            service,
            notices,
        }
    }

    /// Moves one candidate to `target`. Edge legality is deliberately not
    /// checked here: any stage-to-stage request is attempted and the
    /// service remains the sole enforcer of legal transitions.
    pub async fn transition(
        &self,
        candidate_id: &str,
        target: Stage,
    ) -> Result<Candidate, BoardError> {
        let (previous, epoch, display_name) = {
            let mut state = lock(&self.state);
            if state.in_flight.contains(candidate_id) {
                debug!(candidate_id, "transition already in flight; rejecting");
                return Err(BoardError::TransitionInFlight(candidate_id.to_string()));
            }
            let Some(candidate) = state
                .candidates
                .iter_mut()
                .find(|c| c.id == candidate_id)
            else {
                return Err(BoardError::UnknownCandidate(candidate_id.to_string()));
            };
            let previous = candidate.stage;
            candidate.stage = target; // optimistic apply
            let display_name = candidate.full_name();
            state.in_flight.insert(candidate_id.to_string());
            (previous, state.epoch, display_name)
        };
        debug!(candidate_id, from = %previous, to = %target, "stage transition issued");

        let result = self.service.update_stage(candidate_id, target).await;

        let mut state = lock(&self.state);
        if state.epoch != epoch {
            // The board was reloaded wholesale while the request was in
            // flight; this settle applies to a list that no longer exists.
            debug!(candidate_id, "board reloaded during transition; dropping settle");
            return match result {
                Ok(confirmed) => Ok(confirmed),
                Err(source) => Err(BoardError::TransitionFailed {
                    candidate_id: candidate_id.to_string(),
                    source,
                }),
            };
        }
        state.in_flight.remove(candidate_id);

        match result {
            Ok(confirmed) => {
                // State already shows the target; adopt the server record
                // in case it stamped other fields.
                if let Some(candidate) = state
                    .candidates
                    .iter_mut()
                    .find(|c| c.id == candidate_id)
                {
                    *candidate = confirmed.clone();
                }
                drop(state);
                info!(candidate_id, stage = %target, "transition confirmed");
                let _ = self.notices.send(Notice::success(format!(
                    "{display_name} moved to {}",
                    target.label()
                )));
                Ok(confirmed)
            }
            Err(source) => {
                if let Some(candidate) = state
                    .candidates
                    .iter_mut()
                    .find(|c| c.id == candidate_id)
                {
                    candidate.stage = previous;
                }
                drop(state);
                warn!(candidate_id, error = %source, "transition failed; reverted");
                let message = match &source {
                    // Domain rejections surface the service message verbatim.
                    ServiceError::Rejected { message } => message.clone(),
                    ServiceError::Transport(_) => {
                        format!("Could not move {display_name}. Please try again.")
                    }
                };
                let _ = self.notices.send(Notice::error(message));
                Err(BoardError::TransitionFailed {
                    candidate_id: candidate_id.to_string(),
                    source,
                })
            }
        }
    }
}
