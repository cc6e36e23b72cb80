use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use shared::api::{ActivitiesApi, ApiError};
use shared::endpoints::Endpoints;
use shared::{
    ActivityCatalog, CheckResponse, LoginRequest, LoginResponse, MessageResponse, SignupRequest,
    Teacher,
};
use tracing::{debug, info, warn};

/// [`ActivitiesApi`] over `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestApi {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl ReqwestApi {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints,
        }
    }
}

fn transport(error: reqwest::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|error| ApiError::Decode(error.to_string()))
    } else {
        let url = response.url().clone();
        let body = response.text().await.unwrap_or_default();
        warn!(%url, %status, response = %body, "Unexpected api response");
        Err(ApiError::rejected(status.as_u16(), &body))
    }
}

#[async_trait(?Send)]
impl ActivitiesApi for ReqwestApi {
    async fn check_session(&self, token: &str) -> Result<Teacher, ApiError> {
        let response = self
            .http
            .get(self.endpoints.check())
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;
        let body = decode::<CheckResponse>(response).await?;
        debug!(teacher = %body.teacher.name, "Session check succeeded");
        Ok(body.teacher)
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.endpoints.login())
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        let response = decode::<LoginResponse>(response).await?;
        info!(username = %request.username, "Login succeeded");
        Ok(response)
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.endpoints.logout())
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        debug!(%status, "Logout request finished");
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::rejected(status.as_u16(), &body))
        }
    }

    async fn list_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let response = self
            .http
            .get(self.endpoints.activities())
            .send()
            .await
            .map_err(transport)?;
        let catalog = decode::<ActivityCatalog>(response).await?;
        debug!(count = catalog.len(), "Activities fetched");
        Ok(catalog)
    }

    async fn signup(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        let payload = SignupRequest {
            email: email.to_owned(),
        };
        let response = self
            .http
            .post(self.endpoints.signup(activity))
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(transport)?;
        let response = decode::<MessageResponse>(response).await?;
        info!(%activity, %email, "Student signed up");
        Ok(response)
    }

    async fn unregister(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        let response = self
            .http
            .delete(self.endpoints.unregister(activity, email))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;
        let response = decode::<MessageResponse>(response).await?;
        info!(%activity, %email, "Student unregistered");
        Ok(response)
    }
}
