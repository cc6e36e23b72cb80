use shared::endpoints::{EndpointError, Endpoints};

/// Set at build time to talk to an API served from another origin.
const API_ENDPOINT: Option<&str> = option_env!("ACTIVITIES_API_ENDPOINT");

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("page_origin_unavailable: {0}")]
    Origin(String),
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
}

pub fn api_endpoints() -> Result<Endpoints, ConfigError> {
    let base = match API_ENDPOINT {
        Some(endpoint) => endpoint.to_owned(),
        None => page_origin()?,
    };
    log::info!("Using api endpoint, base={base}");
    Ok(Endpoints::parse(&base)?)
}

fn page_origin() -> Result<String, ConfigError> {
    web_sys::window()
        .ok_or_else(|| ConfigError::Origin("no window".to_owned()))?
        .location()
        .origin()
        .map_err(|error| ConfigError::Origin(format!("{error:?}")))
}
