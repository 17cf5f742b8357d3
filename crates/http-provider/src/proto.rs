use quill_model::GenerationResponse;
use serde::{Deserialize, Serialize};

// ------------------------------
// Types received from the server
// ------------------------------

/// Every reply of the intermediary endpoint. A success body may still
/// carry an `error` field, in which case the generation failed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ReplyBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub response: GenerationResponse,
}

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GenerateBody<'a> {
    pub topic: &'a str,
}

// -----------
// Conversions
// -----------

const FALLBACK_ERROR: &str = "Backend error";

/// Extracts a user-facing message from a non-success reply.
///
/// `{"error": "..."}` bodies yield the error text, anything else is
/// relayed verbatim.
pub fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }

    let message = match serde_json::from_str(body) {
        Ok(ErrorBody { error }) => error,
        Err(_) => body.trim().to_string(),
    };
    if message.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}
