use std::pin::Pin;
use std::sync::Arc;

use quill_model::{GenerationProvider, GenerationRequest, GenerationResponse};
use tracing::Instrument;

use crate::error::GenerationError;
use crate::normalize::{derive_content, derive_title};

type GenerateResult = Result<GenerationResponse, GenerationError>;
type BoxedGenerateFuture = Pin<Box<dyn Future<Output = GenerateResult> + Send>>;
type HandlerFn =
    Arc<dyn Fn(GenerationRequest) -> BoxedGenerateFuture + Send + Sync>;

/// A normalized article, ready to be shown or stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Article {
    /// Marker-free title.
    pub title: String,
    /// Marker-free body.
    pub content: String,
}

/// A wrapper around a generation provider that validates input,
/// normalizes output and provides a type-erased interface for the other
/// modules.
#[derive(Clone)]
pub struct GenerationClient {
    handler_fn: HandlerFn,
}

impl GenerationClient {
    /// Creates a client backed by `provider`.
    #[inline]
    pub fn new<P: GenerationProvider + 'static>(provider: P) -> Self {
        // Erase `P` so the client can be stored without a type parameter.
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = provider.generate(&req);
            Box::pin(
                async move {
                    trace!("got a request: {:?}", req);
                    let resp = fut.await.map_err(GenerationError::from);
                    match &resp {
                        Ok(_) => trace!("finished a request"),
                        Err(err) => {
                            error!("got an error ({}): {err}", err.kind())
                        }
                    }
                    resp
                }
                .instrument(trace_span!("generation client req")),
            )
        });
        Self { handler_fn }
    }

    /// Generates an article about `topic`.
    ///
    /// The topic is trimmed first; an empty topic is rejected without
    /// reaching the provider. Exactly one attempt is made.
    pub async fn generate(
        &self,
        topic: &str,
    ) -> Result<Article, GenerationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GenerationError::empty_topic());
        }

        let resp = (self.handler_fn)(GenerationRequest::new(topic)).await?;
        Ok(Article {
            title: derive_title(resp.title.as_deref(), topic),
            content: derive_content(&resp),
        })
    }
}

#[cfg(test)]
mod tests {
    use quill_model::ErrorKind;
    use quill_test_provider::{PresetOutcome, TestProvider};

    use super::*;
    use crate::normalize::NO_CONTENT;

    #[tokio::test]
    async fn test_generate() {
        let mut provider = TestProvider::default();
        provider.add_article(
            "## Coffee Basics **Guide**",
            "Intro paragraph.\n\nSecond paragraph.",
        );
        let log = provider.clone();

        let client = GenerationClient::new(provider);
        let article = client.generate("  coffee ").await.unwrap();
        assert_eq!(
            article,
            Article {
                title: "Coffee Basics Guide".to_owned(),
                content: "Intro paragraph.\n\nSecond paragraph.".to_owned(),
            }
        );
        assert_eq!(log.requests(), vec![GenerationRequest::new("coffee")]);
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let mut provider = TestProvider::default();
        provider.add_outcome(PresetOutcome::Reply(Default::default()));

        let client = GenerationClient::new(provider);
        let article = client.generate("tea").await.unwrap();
        assert_eq!(article.title, "Insightful Article on tea");
        assert_eq!(article.content, NO_CONTENT);
    }

    #[tokio::test]
    async fn test_empty_topic() {
        let provider = TestProvider::default();
        let log = provider.clone();

        let client = GenerationClient::new(provider);
        for topic in ["", "   ", "\n\t"] {
            let err = client.generate(topic).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        assert_eq!(log.request_count(), 0);
    }

    #[tokio::test]
    async fn test_error_handling() {
        let mut provider = TestProvider::default();
        provider.add_upstream_failure("service unavailable");
        let log = provider.clone();

        let client = GenerationClient::new(provider);
        let err = client.generate("coffee").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert_eq!(err.message(), "service unavailable");
        assert_eq!(log.request_count(), 1);
    }
}
