//! A local fake generation provider for testing purpose.

mod preset;

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use quill_model::{
    ErrorKind, GenerationProvider, GenerationProviderError, GenerationRequest,
    GenerationResponse,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Error {}

impl GenerationProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// A local fake provider for testing purpose.
///
/// Before sending requests, you need to setup the script, which is how the
/// provider should answer each request. The n-th request gets the n-th
/// outcome. If there are no enough outcomes in the script, an error will be
/// returned.
///
/// Clones share the request log, so keep one around to inspect what was
/// sent after handing the provider over.
#[derive(Clone, Default)]
pub struct TestProvider {
    script: Vec<PresetOutcome>,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl TestProvider {
    #[inline]
    pub fn add_outcome(&mut self, outcome: PresetOutcome) {
        self.script.push(outcome);
    }

    #[inline]
    pub fn add_article<S1: Into<String>, S2: Into<String>>(
        &mut self,
        title: S1,
        blog: S2,
    ) {
        self.add_outcome(PresetOutcome::article(title, blog));
    }

    #[inline]
    pub fn add_upstream_failure<S: Into<String>>(&mut self, message: S) {
        self.add_outcome(PresetOutcome::upstream_failure(message));
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns every request received so far, oldest first.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Returns how many requests were received so far.
    #[inline]
    pub fn request_count(&self) -> usize {
        self.requests().len()
    }
}

impl Debug for TestProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestProvider")
            .field("script", &self.script.len())
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl GenerationProvider for TestProvider {
    type Error = crate::Error;

    fn generate(
        &self,
        req: &GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResponse, Self::Error>>
    + Send
    + 'static {
        let step_idx = match self.requests.lock() {
            Ok(mut requests) => {
                requests.push(req.clone());
                requests.len() - 1
            }
            Err(_) => usize::MAX,
        };
        let outcome = self.script.get(step_idx).cloned();
        let delay = self.delay.unwrap_or(Duration::from_millis(1));

        async move {
            sleep(delay).await;
            match outcome {
                Some(PresetOutcome::Reply(resp)) => Ok(resp),
                Some(PresetOutcome::Failure { kind, message }) => {
                    Err(Error { message, kind })
                }
                None => Err(Error {
                    message: "no enough outcomes".to_owned(),
                    kind: ErrorKind::Transport,
                }),
            }
        }
    }
}
