use thiserror::Error;

use crate::service::ServiceError;

/// Application-level error type for the pipeline board. Every failure is
/// absorbed at the coordinator or controller boundary and reported as a
/// value; nothing in this crate panics on a service failure.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Fetching the candidate list failed. The board rendered empty and
    /// the caller may retry.
    #[error("failed to load board: {0}")]
    Load(#[source] ServiceError),

    /// The service failed or refused the transition; the optimistic change
    /// was reverted.
    #[error("stage update failed for candidate {candidate_id}: {source}")]
    TransitionFailed {
        candidate_id: String,
        #[source]
        source: ServiceError,
    },

    /// No record with this id on the board.
    #[error("unknown candidate: {0}")]
    UnknownCandidate(String),

    /// A previous transition for this candidate has not settled yet;
    /// re-dragging before it resolves is not supported.
    #[error("transition already in flight for candidate {0}")]
    TransitionInFlight(String),
}
