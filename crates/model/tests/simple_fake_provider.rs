use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use quill_model::{
    ErrorKind, GenerationProvider, GenerationProviderError, GenerationRequest,
    GenerationResponse,
};
use tokio::time::sleep;

#[derive(Debug)]
struct FakeProviderError(ErrorKind);

impl Display for FakeProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Error for FakeProviderError {}

impl GenerationProviderError for FakeProviderError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

struct FakeProvider;

impl GenerationProvider for FakeProvider {
    type Error = FakeProviderError;

    fn generate(
        &self,
        req: &GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResponse, Self::Error>>
    + Send
    + 'static {
        let topic = req.topic.clone();
        async move {
            // Pretend we are waiting for the network.
            sleep(Duration::from_millis(1)).await;

            if topic.is_empty() {
                return Err(FakeProviderError(ErrorKind::Validation));
            }
            Ok(GenerationResponse {
                title: Some(format!("## All about {topic}")),
                blog: Some(format!("You asked about {topic}.")),
                ..Default::default()
            })
        }
    }
}

mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate() {
        let provider = FakeProvider;
        let resp = provider
            .generate(&GenerationRequest::new("tea"))
            .await
            .unwrap();

        assert_eq!(resp.title.as_deref(), Some("## All about tea"));
        assert_eq!(
            resp.body_candidates(),
            [Some("You asked about tea."), None, None]
        );
    }

    #[tokio::test]
    async fn test_error() {
        let provider = FakeProvider;
        let result = provider.generate(&GenerationRequest::new("")).await;
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
