use gloo_net::http::Request;
use shared::api::ApiError;
use shared::endpoints::Endpoints;
use shared::{CheckResponse, LoginRequest, LoginResponse, Teacher};

use super::{bearer, decode, transport};

pub async fn check(endpoints: &Endpoints, token: &str) -> Result<Teacher, ApiError> {
    let response = Request::get(endpoints.check().as_str())
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(transport)?;
    let body = decode::<CheckResponse>(response).await?;
    log::info!("Api auth check, teacher={}", body.teacher.name);
    Ok(body.teacher)
}

pub async fn login(endpoints: &Endpoints, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let endpoint = endpoints.login();
    log::info!("Doing login, endpoint={endpoint}");
    let response = Request::post(endpoint.as_str())
        .json(request)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let response = decode::<LoginResponse>(response).await?;
    log::info!("Api auth login, username={}", request.username);
    Ok(response)
}

pub async fn logout(endpoints: &Endpoints, token: &str) -> Result<(), ApiError> {
    let response = Request::post(endpoints.logout().as_str())
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(transport)?;
    log::info!("Api auth logout, status={}", response.status());
    if response.ok() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::rejected(response.status(), &body))
    }
}
