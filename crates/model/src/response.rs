use serde::{Deserialize, Serialize};

/// A successful reply from the generation provider.
///
/// The remote service is not consistent about where it puts the body, so
/// every field is optional. Unknown fields are ignored.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(default)]
pub struct GenerationResponse {
    /// The article heading, possibly with markdown markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The article body, preferred over the other body fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    /// Alternative body field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Alternative body field, used last.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl GenerationResponse {
    /// Returns the candidate body fields in the order they should be
    /// tried.
    #[inline]
    pub fn body_candidates(&self) -> [Option<&str>; 3] {
        [
            self.blog.as_deref(),
            self.response.as_deref(),
            self.content.as_deref(),
        ]
    }
}
