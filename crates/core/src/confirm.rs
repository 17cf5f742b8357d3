use async_trait::async_trait;

/// Asks the user to confirm a destructive action.
///
/// Implementations block the calling flow until the user answers.
#[async_trait]
pub trait Confirm: Send + Sync {
    /// Returns whether the user agreed to `prompt`.
    async fn confirm(&self, prompt: &str) -> bool;
}

/// A fixed, non-interactive answer, for scripted or unattended runs.
#[async_trait]
impl Confirm for bool {
    #[inline]
    async fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_answer() {
        assert!(true.confirm("Delete this blog?").await);
        assert!(!false.confirm("Delete this blog?").await);
    }
}
