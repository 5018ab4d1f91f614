//! HTTP implementation of `CandidateService` against the REST backend.
//!
//! No retry logic lives here: a failed transition is reverted by the
//! coordinator and the user re-initiates the drag.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::models::candidate::{Candidate, Stage};
use crate::models::session::SessionContext;
use crate::service::{CandidateService, Scope, ServiceError};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Error envelope the backend returns on 4xx responses.
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Bearer-authenticated reqwest client for the Candidate/Application API.
#[derive(Clone)]
pub struct HttpCandidateService {
    client: Client,
    base_url: String,
    session: SessionContext,
}

impl HttpCandidateService {
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl CandidateService for HttpCandidateService {
    async fn list_candidates(&self, scope: &Scope) -> Result<Vec<Candidate>, ServiceError> {
        let mut request = self
            .client
            .get(self.url("/api/v1/candidates"))
            .bearer_auth(&self.session.token);
        if let Scope::Job(job_id) = scope {
            request = request.query(&[("job_id", job_id)]);
        }
        let response = request.send().await?;
        debug!(status = %response.status(), "listed candidates");
        read_json(response).await
    }

    async fn update_stage(
        &self,
        candidate_id: &str,
        target: Stage,
    ) -> Result<Candidate, ServiceError> {
        let response = self
            .client
            .patch(self.url(&format!("/api/v1/candidates/{candidate_id}/stage")))
            .bearer_auth(&self.session.token)
            .json(&json!({ "stage": target }))
            .send()
            .await?;
        debug!(status = %response.status(), candidate_id, "stage update issued");
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| ServiceError::Transport(format!("invalid response body: {e}")));
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify_failure(status.as_u16(), &body))
}

/// Maps a non-success response to the service error taxonomy. The backend
/// reports domain rejections (illegal transition, missing required
/// feedback) as 409/422 with an `{"error":{"code","message"}}` envelope;
/// everything else is a transport failure.
fn classify_failure(status: u16, body: &str) -> ServiceError {
    if matches!(status, 409 | 422) {
        if let Ok(parsed) = serde_json::from_str::<ApiError>(body) {
            return ServiceError::Rejected {
                message: parsed.error.message,
            };
        }
    }
    ServiceError::Transport(format!("service returned status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_422_with_envelope_is_domain_rejection() {
        let body = r#"{"error":{"code":"FEEDBACK_REQUIRED","message":"Feedback manquant"}}"#;
        match classify_failure(422, body) {
            ServiceError::Rejected { message } => assert_eq!(message, "Feedback manquant"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_409_with_envelope_is_domain_rejection() {
        let body = r#"{"error":{"code":"ILLEGAL_TRANSITION","message":"Transition refusée"}}"#;
        assert!(matches!(
            classify_failure(409, body),
            ServiceError::Rejected { .. }
        ));
    }

    #[test]
    fn test_422_without_envelope_falls_back_to_transport() {
        assert!(matches!(
            classify_failure(422, "<html>oops</html>"),
            ServiceError::Transport(_)
        ));
    }

    #[test]
    fn test_5xx_is_transport_even_with_envelope() {
        let body = r#"{"error":{"code":"BOOM","message":"db down"}}"#;
        assert!(matches!(
            classify_failure(500, body),
            ServiceError::Transport(_)
        ));
    }

    #[test]
    fn test_url_joining_tolerates_trailing_slash() {
        let session = SessionContext {
            user_id: "u1".to_string(),
            role: crate::models::session::Role::Recruiter,
            token: "t".to_string(),
        };
        let service = HttpCandidateService::new("https://api.example.com/", session).unwrap();
        assert_eq!(
            service.url("/api/v1/candidates"),
            "https://api.example.com/api/v1/candidates"
        );
    }
}
