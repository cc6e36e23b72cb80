use url::Url;

#[derive(thiserror::Error, Debug)]
pub enum EndpointError {
    #[error("invalid_endpoint_url: {0}")]
    Invalid(#[from] url::ParseError),
    #[error("endpoint_url_cannot_be_a_base: {0}")]
    CannotBeABase(String),
}

/// Builds request URLs for every route of the activities service.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base: Url) -> Result<Self, EndpointError> {
        if base.cannot_be_a_base() {
            return Err(EndpointError::CannotBeABase(base.to_string()));
        }
        Ok(Self { base })
    }

    pub fn parse(base: &str) -> Result<Self, EndpointError> {
        Self::new(Url::parse(base)?)
    }

    pub fn check(&self) -> Url {
        self.with_segments(&["auth", "check"])
    }

    pub fn login(&self) -> Url {
        self.with_segments(&["auth", "login"])
    }

    pub fn logout(&self) -> Url {
        self.with_segments(&["auth", "logout"])
    }

    pub fn activities(&self) -> Url {
        self.with_segments(&["activities"])
    }

    pub fn signup(&self, activity: &str) -> Url {
        self.with_segments(&["activities", activity, "signup"])
    }

    pub fn unregister(&self, activity: &str, email: &str) -> Url {
        let mut url = self.with_segments(&["activities", activity, "unregister"]);
        url.query_pairs_mut().append_pair("email", email);
        url
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // `new` rejects cannot-be-a-base URLs, so the path is always segmentable.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
