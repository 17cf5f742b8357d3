use std::fmt::Debug;

/// The intermediary endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/generate";

/// Builder for [`HttpConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HttpConfigBuilder {
    endpoint: Option<String>,
}

impl HttpConfigBuilder {
    /// Creates a builder with every option left to its default.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the full URL of the intermediary generate endpoint.
    #[inline]
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> HttpConfig {
        HttpConfig {
            endpoint: self
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }
}

/// Configuration for [`crate::HttpProvider`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HttpConfig {
    pub(crate) endpoint: String,
}

impl HttpConfig {
    /// Returns the endpoint requests are posted to.
    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
