use std::error::Error;

use crate::error::ErrorKind;
use crate::request::GenerationRequest;
use crate::response::GenerationResponse;

/// The error type for a generation provider.
///
/// The `Display` output is shown to the user as-is, so implementors
/// should keep it human-readable.
pub trait GenerationProviderError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// A type that turns a topic into generated text.
///
/// Once the provider is created, it should behave like a stateless object.
/// Every call to [`GenerationProvider::generate`] is a single attempt;
/// providers must not retry on their own.
pub trait GenerationProvider: Send + Sync {
    /// The error type that may be returned by the provider.
    type Error: GenerationProviderError;

    /// Sends a generation request.
    fn generate(
        &self,
        req: &GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResponse, Self::Error>>
    + Send
    + 'static;
}
