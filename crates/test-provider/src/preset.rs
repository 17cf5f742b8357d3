use quill_model::{ErrorKind, GenerationResponse};
use serde::{Deserialize, Serialize};

/// How the fake provider answers one request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetOutcome {
    /// Answer with the given response.
    #[serde(rename = "reply")]
    Reply(GenerationResponse),
    /// Fail with the given kind and message.
    #[serde(rename = "failure")]
    Failure {
        /// Kind of the returned error.
        kind: ErrorKind,
        /// Message of the returned error.
        message: String,
    },
}

impl PresetOutcome {
    /// Creates a reply with a title and a `blog` body.
    #[inline]
    pub fn article<S1: Into<String>, S2: Into<String>>(
        title: S1,
        blog: S2,
    ) -> Self {
        Self::Reply(GenerationResponse {
            title: Some(title.into()),
            blog: Some(blog.into()),
            ..Default::default()
        })
    }

    /// Creates an upstream failure carrying `message`.
    #[inline]
    pub fn upstream_failure<S: Into<String>>(message: S) -> Self {
        Self::Failure {
            kind: ErrorKind::Upstream,
            message: message.into(),
        }
    }
}
