use async_trait::async_trait;

use crate::{ActivityCatalog, ErrorResponse, LoginRequest, LoginResponse, MessageResponse, Teacher};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("transport_failure: {0}")]
    Transport(String),
    #[error("request_rejected, status={status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("unexpected_response_body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds a rejection from a non-2xx status and its raw body. A body
    /// that is not JSON, or has no string `detail`, yields no detail.
    pub fn rejected(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|response| response.detail_text().map(str::to_owned));
        Self::Rejected { status, detail }
    }

    /// Server-provided detail, only present for rejected requests.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// The REST surface of the activities service.
#[async_trait(?Send)]
pub trait ActivitiesApi {
    /// `GET /auth/check`, succeeds only for a token the server still honours.
    async fn check_session(&self, token: &str) -> Result<Teacher, ApiError>;

    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/logout`, response body is ignored.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;

    /// `GET /activities`.
    async fn list_activities(&self) -> Result<ActivityCatalog, ApiError>;

    /// `POST /activities/{activity}/signup`.
    async fn signup(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError>;

    /// `DELETE /activities/{activity}/unregister?email=...`.
    async fn unregister(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError>;
}
