//! A generation provider that talks to the intermediary HTTP endpoint.

#[macro_use]
extern crate tracing;

mod config;
mod proto;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use mime::Mime;
use quill_model::{
    ErrorKind, GenerationProvider, GenerationProviderError, GenerationRequest,
    GenerationResponse,
};
use reqwest::{Client, header};

pub use config::{DEFAULT_ENDPOINT, HttpConfig, HttpConfigBuilder};

/// Message shown when the request never got an answer.
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "Something went wrong while generating your blog. Please try again.";

/// Error type for [`HttpProvider`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    fn transport(err: reqwest::Error) -> Self {
        error!("request to the generate endpoint failed: {err}");
        Self::new(TRANSPORT_ERROR_MESSAGE, ErrorKind::Transport)
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

impl GenerationProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Provider posting topics to the intermediary generate endpoint.
#[derive(Clone, Debug)]
pub struct HttpProvider {
    client: Client,
    config: Arc<HttpConfig>,
}

impl HttpProvider {
    /// Creates a new `HttpProvider` with the given configuration.
    #[inline]
    pub fn new(config: HttpConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }
}

impl GenerationProvider for HttpProvider {
    type Error = Error;

    fn generate(
        &self,
        req: &GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResponse, Self::Error>>
    + Send
    + 'static {
        let resp_fut = self
            .client
            .post(&self.config.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(&proto::GenerateBody { topic: &req.topic })
            .send();

        async move {
            let resp = resp_fut.await.map_err(Error::transport)?;
            let status = resp.status();
            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            let body = resp.text().await.map_err(Error::transport)?;
            trace!("got a reply ({status}): {body}");

            if !status.is_success() {
                let message = proto::error_message(&body);
                warn!("generate endpoint answered {status}: {message}");
                return Err(Error::new(message, ErrorKind::Upstream));
            }

            // A missing header is tolerated, a wrong one is not.
            let is_json = content_type
                .as_deref()
                .map(|v| {
                    v.parse()
                        .map(|m: Mime| m.subtype() == mime::JSON)
                        .unwrap_or(false)
                })
                .unwrap_or(true);
            if !is_json {
                return Err(Error::new(
                    format!("Unexpected content type: {content_type:?}"),
                    ErrorKind::MalformedResponse,
                ));
            }

            let reply: proto::ReplyBody = serde_json::from_str(&body)
                .map_err(|err| {
                    Error::new(
                        format!("Invalid response from server: {err}"),
                        ErrorKind::MalformedResponse,
                    )
                })?;
            match reply.error {
                Some(message) if !message.trim().is_empty() => {
                    Err(Error::new(message, ErrorKind::Upstream))
                }
                _ => Ok(reply.response),
            }
        }
    }
}
