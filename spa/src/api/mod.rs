use async_trait::async_trait;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use shared::api::{ActivitiesApi, ApiError};
use shared::endpoints::Endpoints;
use shared::{ActivityCatalog, LoginRequest, LoginResponse, MessageResponse, Teacher};

pub mod activities_api;
pub mod auth_api;

/// [`ActivitiesApi`] over the browser's fetch, via `gloo-net`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    endpoints: Endpoints,
}

impl HttpApi {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

#[async_trait(?Send)]
impl ActivitiesApi for HttpApi {
    async fn check_session(&self, token: &str) -> Result<Teacher, ApiError> {
        auth_api::check(&self.endpoints, token).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        auth_api::login(&self.endpoints, request).await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        auth_api::logout(&self.endpoints, token).await
    }

    async fn list_activities(&self) -> Result<ActivityCatalog, ApiError> {
        activities_api::list(&self.endpoints).await
    }

    async fn signup(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        activities_api::signup(&self.endpoints, token, activity, email).await
    }

    async fn unregister(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        activities_api::unregister(&self.endpoints, token, activity, email).await
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn transport(error: gloo_net::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

/// Reads a 2xx body as `T`; anything else becomes a rejection carrying the
/// server's `detail`.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|error| ApiError::Decode(error.to_string()))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!(
            "Api unexpected response, url={url}, status={status}, response={body}",
            url = response.url(),
        );
        Err(ApiError::rejected(status, &body))
    }
}
