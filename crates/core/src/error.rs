use std::error::Error as StdError;
use std::fmt::{self, Display};

use quill_model::{ErrorKind, GenerationProviderError};

/// Message used when the topic is empty.
pub(crate) const EMPTY_TOPIC_MESSAGE: &str = "Please provide a topic.";

/// Describes why a generation attempt failed.
///
/// The message is meant for the user and is shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenerationError {
    kind: ErrorKind,
    message: String,
}

impl GenerationError {
    /// Creates a new error of the given kind.
    #[inline]
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates the error returned for an empty topic.
    #[inline]
    pub fn empty_topic() -> Self {
        Self::new(ErrorKind::Validation, EMPTY_TOPIC_MESSAGE)
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the user-facing message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for GenerationError {}

impl<E: GenerationProviderError> From<E> for GenerationError {
    fn from(err: E) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            return Self::new(err.kind(), format!("{}", err.kind()));
        }
        Self::new(err.kind(), message)
    }
}
