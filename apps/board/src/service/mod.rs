//! Candidate/Application Service boundary.
//!
//! The external service is the sole source of truth for candidate records
//! and the sole enforcer of stage-transition legality. The board consumes
//! exactly two operations from it, behind an object-safe trait so the
//! pipeline core can be exercised against stubs.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::candidate::{Candidate, Stage};

pub mod http;

/// Which candidates a board shows: everything, or one job's applicants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    All,
    Job(String),
}

/// Failure taxonomy at the service boundary. Both kinds cause the same
/// revert on the board, but domain rejections carry a message that must be
/// surfaced verbatim while transport failures get a generic retry prompt.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(String),

    /// The service understood the request and refused it, e.g. required
    /// interview feedback has not been recorded yet.
    #[error("{message}")]
    Rejected { message: String },
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Transport(err.to_string())
    }
}

/// The two operations the pipeline core consumes. Held in the board as
/// `Arc<dyn CandidateService>` so backends can be swapped without touching
/// the controller or coordinator.
#[async_trait]
pub trait CandidateService: Send + Sync {
    /// Returns the full current candidate set for the scope, each record
    /// carrying its server-confirmed stage.
    async fn list_candidates(&self, scope: &Scope) -> Result<Vec<Candidate>, ServiceError>;

    /// Attempts the transition server-side and returns the confirmed
    /// record, or a structured failure.
    async fn update_stage(
        &self,
        candidate_id: &str,
        target: Stage,
    ) -> Result<Candidate, ServiceError>;
}

#[cfg(test)]
pub(crate) mod stub {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use tokio::sync::Notify;

    use super::*;

    /// Programmable in-memory service for pipeline tests. Responses are
    /// queues popped per call; `hold_updates` parks every `update_stage`
    /// call until notified, so tests can observe mid-flight state.
    #[derive(Default)]
    pub(crate) struct StubService {
        pub list_responses: Mutex<VecDeque<Result<Vec<Candidate>, ServiceError>>>,
        pub update_responses: Mutex<VecDeque<Result<Candidate, ServiceError>>>,
        pub update_calls: Mutex<Vec<(String, Stage)>>,
        pub hold_updates: Option<Arc<Notify>>,
    }

    impl StubService {
        pub fn with_list(candidates: Vec<Candidate>) -> Self {
            let stub = StubService::default();
            stub.push_list(Ok(candidates));
            stub
        }

        pub fn push_list(&self, response: Result<Vec<Candidate>, ServiceError>) {
            self.list_responses.lock().unwrap().push_back(response);
        }

        pub fn push_update(&self, response: Result<Candidate, ServiceError>) {
            self.update_responses.lock().unwrap().push_back(response);
        }

        pub fn update_call_count(&self) -> usize {
            self.update_calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CandidateService for StubService {
        async fn list_candidates(
            &self,
            _scope: &Scope,
        ) -> Result<Vec<Candidate>, ServiceError> {
            self.list_responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn update_stage(
            &self,
            candidate_id: &str,
            target: Stage,
        ) -> Result<Candidate, ServiceError> {
            self.update_calls
                .lock()
                .unwrap()
                .push((candidate_id.to_string(), target));
            if let Some(hold) = &self.hold_updates {
                hold.notified().await;
            }
            self.update_responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| {
                    Err(ServiceError::Transport(
                        "no stubbed update response".to_string(),
                    ))
                })
        }
    }
}
