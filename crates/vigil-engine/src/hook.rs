use crate::error::{TimeoutError, WaitError};
use async_trait::async_trait;
use futures::future::BoxFuture;

/// Called by [`crate::Wait`] when a retry loop times out, before the error is
/// returned to the caller. Hooks see the entity while the failing state still
/// holds, which makes them the place to capture screenshots or page dumps.
#[async_trait]
pub trait FailureHook: Send + Sync {
    async fn on_failure(&self, error: &TimeoutError) -> Result<(), WaitError>;
}

/// Adapts a closure into a [`FailureHook`].
pub struct FnHook<F> {
    hook: F,
}

impl<F> FnHook<F>
where
    F: for<'a> Fn(&'a TimeoutError) -> BoxFuture<'a, Result<(), WaitError>> + Send + Sync,
{
    pub fn new(hook: F) -> Self {
        Self { hook }
    }
}

#[async_trait]
impl<F> FailureHook for FnHook<F>
where
    F: for<'a> Fn(&'a TimeoutError) -> BoxFuture<'a, Result<(), WaitError>> + Send + Sync,
{
    async fn on_failure(&self, error: &TimeoutError) -> Result<(), WaitError> {
        (self.hook)(error).await
    }
}

/// Logs every timeout at ERROR level.
#[derive(Debug, Clone, Default)]
pub struct TracingHook;

#[async_trait]
impl FailureHook for TracingHook {
    async fn on_failure(&self, error: &TimeoutError) -> Result<(), WaitError> {
        tracing::error!(
            entity = %error.entity,
            function = %error.function,
            timeout_ms = error.timeout.as_millis() as u64,
            cause = %error.cause,
            "wait timed out"
        );
        Ok(())
    }
}
