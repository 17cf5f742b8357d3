use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request was rejected before reaching the network, e.g. the
    /// topic was empty.
    Validation,
    /// The request could not be delivered or the reply could not be read.
    Transport,
    /// The intermediary or the remote service answered with an error.
    Upstream,
    /// The reply was delivered but is not something we can interpret.
    MalformedResponse,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "Validation error"),
            ErrorKind::Transport => write!(f, "Transport error"),
            ErrorKind::Upstream => write!(f, "Upstream error"),
            ErrorKind::MalformedResponse => write!(f, "Malformed response"),
        }
    }
}
