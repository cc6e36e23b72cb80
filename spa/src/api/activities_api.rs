use gloo_net::http::Request;
use shared::api::ApiError;
use shared::endpoints::Endpoints;
use shared::{ActivityCatalog, MessageResponse, SignupRequest};

use super::{bearer, decode, transport};

pub async fn list(endpoints: &Endpoints) -> Result<ActivityCatalog, ApiError> {
    let response = Request::get(endpoints.activities().as_str())
        .send()
        .await
        .map_err(transport)?;
    let catalog = decode::<ActivityCatalog>(response).await?;
    log::info!("Api list activities, count={}", catalog.len());
    Ok(catalog)
}

pub async fn signup(
    endpoints: &Endpoints,
    token: &str,
    activity: &str,
    email: &str,
) -> Result<MessageResponse, ApiError> {
    let payload = SignupRequest {
        email: email.to_owned(),
    };
    let response = Request::post(endpoints.signup(activity).as_str())
        .header("Authorization", &bearer(token))
        .json(&payload)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let response = decode::<MessageResponse>(response).await?;
    log::info!("Api signup, activity={activity}, email={email}");
    Ok(response)
}

pub async fn unregister(
    endpoints: &Endpoints,
    token: &str,
    activity: &str,
    email: &str,
) -> Result<MessageResponse, ApiError> {
    let response = Request::delete(endpoints.unregister(activity, email).as_str())
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(transport)?;
    let response = decode::<MessageResponse>(response).await?;
    log::info!("Api unregister, activity={activity}, email={email}");
    Ok(response)
}
