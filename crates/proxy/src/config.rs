use std::env;

/// Remote generation service used when none is configured.
pub const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:8000";
/// Listen address used when none is configured.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

const UPSTREAM_URL_VAR: &str = "QUILL_API_URL";
const LISTEN_ADDR_VAR: &str = "QUILL_PROXY_ADDR";

/// Builder for [`ProxyConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProxyConfigBuilder {
    upstream_url: Option<String>,
    listen_addr: Option<String>,
}

impl ProxyConfigBuilder {
    /// Creates a builder with every option left to its default.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder filled from `QUILL_API_URL` and
    /// `QUILL_PROXY_ADDR`, when set.
    pub fn from_env() -> Self {
        Self {
            upstream_url: env::var(UPSTREAM_URL_VAR).ok(),
            listen_addr: env::var(LISTEN_ADDR_VAR).ok(),
        }
    }

    /// Sets the base URL of the remote generation service.
    #[inline]
    pub fn with_upstream_url<S: Into<String>>(mut self, url: S) -> Self {
        self.upstream_url = Some(url.into());
        self
    }

    /// Sets the address to listen on.
    #[inline]
    pub fn with_listen_addr<S: Into<String>>(mut self, addr: S) -> Self {
        self.listen_addr = Some(addr.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ProxyConfig {
        let upstream_url = self
            .upstream_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        ProxyConfig {
            upstream_url: upstream_url.trim_end_matches('/').to_string(),
            listen_addr: self
                .listen_addr
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
        }
    }
}

/// Configuration for the intermediary endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProxyConfig {
    pub(crate) upstream_url: String,
    pub(crate) listen_addr: String,
}

impl ProxyConfig {
    /// Returns the base URL of the remote generation service.
    #[inline]
    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    /// Returns the address to listen on.
    #[inline]
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Returns the URL topics are forwarded to.
    #[inline]
    pub fn generate_url(&self) -> String {
        format!("{}/generate-blog", self.upstream_url)
    }
}
