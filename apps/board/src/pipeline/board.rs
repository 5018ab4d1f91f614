//! Pipeline Board Controller.
//!
//! One parametrized board serves every dashboard variant: the admin,
//! manager, recruiter and client pages differ only in the `BoardConfig`
//! they pass (data scope and column accent), never in behavior.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::BoardError;
use crate::models::candidate::{Candidate, Stage};
use crate::models::session::Role;
use crate::pipeline::coordinator::TransitionCoordinator;
use crate::pipeline::notify::{Notice, NoticeSender};
use crate::pipeline::{lock, BoardState};
use crate::service::{CandidateService, Scope};

/// Per-role column accent consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnStyle {
    pub accent: &'static str,
}

pub fn style_for(role: Role) -> ColumnStyle {
    let accent = match role {
        Role::Admin => "#6366f1",
        Role::Manager => "#0ea5e9",
        Role::Recruiter => "#10b981",
        Role::Client => "#f59e0b",
    };
    ColumnStyle { accent }
}

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub scope: Scope,
    pub role: Role,
}

/// One visible column: a stage and the candidates currently in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageColumn {
    pub stage: Stage,
    pub candidates: Vec<Candidate>,
}

/// How a drag gesture was handled. Failed transitions are reported through
/// `BoardError`; these are the non-error endings.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// The service confirmed the move.
    Moved(Candidate),
    /// Drop resolved to the candidate's current stage; no request issued.
    SameStage,
    /// Unknown card or drop target; the gesture is silently dropped.
    Ignored,
}

#[derive(Clone)]
pub struct PipelineBoard {
    config: BoardConfig,
    state: Arc<Mutex<BoardState>>,
    service: Arc<dyn CandidateService>,
    coordinator: TransitionCoordinator,
    notices: NoticeSender,
}

impl PipelineBoard {
    pub fn new(
        config: BoardConfig,
        service: Arc<dyn CandidateService>,
        notices: NoticeSender,
    ) -> Self {
        let state = Arc::new(Mutex::new(BoardState::new()));
        let coordinator =
            TransitionCoordinator::new(state.clone(), service.clone(), notices.clone());
        PipelineBoard {
            config,
            state,
            service,
            coordinator,
            notices,
        }
    }

    /// Replaces local state wholesale from the service. On failure the
    /// board is left empty (no partial state), an error notice is emitted
    /// and the caller may retry.
    pub async fn load(&self) -> Result<usize, BoardError> {
        info!(scope = ?self.config.scope, "loading board");
        match self.service.list_candidates(&self.config.scope).await {
            Ok(candidates) => {
                let count = candidates.len();
                let mut state = lock(&self.state);
                state.candidates = candidates;
                state.in_flight.clear();
                state.epoch += 1;
                drop(state);
                info!(count, "board loaded");
                Ok(count)
            }
            Err(err) => {
                let mut state = lock(&self.state);
                state.candidates.clear();
                state.in_flight.clear();
                state.epoch += 1;
                drop(state);
                warn!(error = %err, "board load failed");
                let _ = self
                    .notices
                    .send(Notice::error("Could not load the board. Please retry."));
                Err(BoardError::Load(err))
            }
        }
    }

    /// Stage-partitioned read-only view: one column per visible stage in
    /// fixed funnel order. Rejected candidates are held but not shown.
    pub fn columns(&self) -> Vec<StageColumn> {
        let state = lock(&self.state);
        Stage::BOARD_COLUMNS
            .iter()
            .map(|&stage| StageColumn {
                stage,
                candidates: state
                    .candidates
                    .iter()
                    .filter(|c| c.stage == stage)
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    /// Rejected candidates, hidden from the main board but never deleted.
    pub fn rejected(&self) -> Vec<Candidate> {
        lock(&self.state)
            .candidates
            .iter()
            .filter(|c| c.stage == Stage::Rejected)
            .cloned()
            .collect()
    }

    pub fn candidate(&self, id: &str) -> Option<Candidate> {
        lock(&self.state)
            .candidates
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Entry point for drag-and-drop gestures. The drop target is either a
    /// column (its stage slug) or another card (that candidate's current
    /// stage — drop-into-list semantics). Unresolvable targets and
    /// same-stage drops issue no service call.
    pub async fn on_drag_end(
        &self,
        candidate_id: &str,
        drop_target_id: &str,
    ) -> Result<DragOutcome, BoardError> {
        let (current, target) = {
            let state = lock(&self.state);
            let Some(target) = resolve_drop_target(&state, drop_target_id) else {
                debug!(drop_target_id, "drop target did not resolve; ignoring gesture");
                return Ok(DragOutcome::Ignored);
            };
            let Some(current) = state
                .candidates
                .iter()
                .find(|c| c.id == candidate_id)
                .map(|c| c.stage)
            else {
                debug!(candidate_id, "dragged card is not on the board; ignoring gesture");
                return Ok(DragOutcome::Ignored);
            };
            (current, target)
        };

        if current == target {
            return Ok(DragOutcome::SameStage);
        }

        let confirmed = self.coordinator.transition(candidate_id, target).await?;
        Ok(DragOutcome::Moved(confirmed))
    }
}

fn resolve_drop_target(state: &BoardState, drop_target_id: &str) -> Option<Stage> {
    if let Some(stage) = Stage::from_slug(drop_target_id) {
        return Some(stage);
    }
    state
        .candidates
        .iter()
        .find(|c| c.id == drop_target_id)
        .map(|c| c.stage)
}
