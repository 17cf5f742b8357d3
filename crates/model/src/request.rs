use serde::{Deserialize, Serialize};

/// A request to be sent to the generation provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The subject the article should be written about.
    pub topic: String,
}

impl GenerationRequest {
    /// Creates a request for the given topic.
    #[inline]
    pub fn new<S: Into<String>>(topic: S) -> Self {
        Self {
            topic: topic.into(),
        }
    }
}
