use crate::config::WaitConfig;
use crate::error::{TimeoutError, WaitError};
use crate::hook::FailureHook;
use crate::lambda::{Command, Condition, Query};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);
const DEADLINE_OVERSHOOT: Duration = Duration::from_millis(1);

/// Retries queries, commands and conditions against one entity until they
/// succeed or a deadline passes.
///
/// The entity and default timeout are fixed at construction; only the
/// per-call timeout of the `*_within` methods varies.
pub struct Wait<'a, T: ?Sized> {
    entity: &'a T,
    timeout: Duration,
    poll_interval: Duration,
    hooks: Vec<Arc<dyn FailureHook>>,
}

impl<'a, T> Wait<'a, T>
where
    T: ?Sized + fmt::Display + Sync + 'static,
{
    pub fn new(entity: &'a T, timeout: Duration, hooks: Vec<Arc<dyn FailureHook>>) -> Self {
        Self {
            entity,
            timeout,
            poll_interval: DEFAULT_POLL_INTERVAL,
            hooks,
        }
    }

    pub fn from_config(
        entity: &'a T,
        config: &WaitConfig,
        hooks: Vec<Arc<dyn FailureHook>>,
    ) -> Self {
        Self::new(entity, config.timeout(), hooks).with_poll_interval(config.poll_interval())
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn entity(&self) -> &'a T {
        self.entity
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `true` once `condition` passes, `false` if it never does within the
    /// default timeout. Never returns an error.
    pub async fn until(&self, condition: &Condition<T>) -> bool {
        self.until_within(condition, self.timeout).await
    }

    pub async fn until_within(&self, condition: &Condition<T>, timeout: Duration) -> bool {
        match self.query_within(condition, timeout).await {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(
                    entity = %self.entity,
                    condition = %condition,
                    error = %err,
                    "condition not reached"
                );
                false
            }
        }
    }

    /// Retry `command` until it succeeds; the timeout error is returned as is.
    pub async fn command(&self, command: &Command<T>) -> Result<(), WaitError> {
        self.command_within(command, self.timeout).await
    }

    pub async fn command_within(
        &self,
        command: &Command<T>,
        timeout: Duration,
    ) -> Result<(), WaitError> {
        self.query_within(command, timeout).await
    }

    pub async fn query<R>(&self, query: &Query<T, R>) -> Result<R, WaitError>
    where
        R: 'static,
    {
        self.query_within(query, self.timeout).await
    }

    /// Call `query` until it returns `Ok`.
    ///
    /// At least one attempt is made. A failed attempt after the deadline
    /// (strictly later than `start + timeout`) ends the loop with
    /// [`WaitError::Timeout`], so the total time may exceed `timeout` by one
    /// attempt. The pause between attempts is cut short to wake 1ms past the
    /// deadline. A timeout too large to represent as an instant waits without
    /// a deadline.
    pub async fn query_within<R>(
        &self,
        query: &Query<T, R>,
        timeout: Duration,
    ) -> Result<R, WaitError>
    where
        R: 'static,
    {
        let start = Instant::now();
        let deadline = start.checked_add(timeout);
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            match query.call(self.entity).await {
                Ok(result) => {
                    if attempts > 1 {
                        tracing::debug!(
                            entity = %self.entity,
                            function = %query,
                            attempts,
                            elapsed_ms = start.elapsed().as_millis() as u64,
                            "succeeded after retry"
                        );
                    }
                    return Ok(result);
                }
                Err(err) => {
                    if deadline.is_some_and(|deadline| Instant::now() > deadline) {
                        let failure =
                            TimeoutError::new(timeout, self.entity.to_string(), query.to_string(), &err);
                        tracing::warn!(
                            entity = %self.entity,
                            function = %query,
                            attempts,
                            elapsed_ms = start.elapsed().as_millis() as u64,
                            "timed out"
                        );
                        self.run_failure_hooks(&failure).await;
                        return Err(WaitError::Timeout(failure));
                    }

                    tracing::trace!(
                        entity = %self.entity,
                        function = %query,
                        attempt = attempts,
                        error = %err,
                        "attempt failed, retrying"
                    );
                    self.pause(deadline).await;
                }
            }
        }
    }

    async fn pause(&self, deadline: Option<Instant>) {
        let interval = match deadline {
            // Wake just after the deadline so the next failure times out.
            Some(deadline) => self.poll_interval.min(
                deadline
                    .saturating_duration_since(Instant::now())
                    .saturating_add(DEADLINE_OVERSHOOT),
            ),
            None => self.poll_interval,
        };

        if interval.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(interval).await;
        }
    }

    async fn run_failure_hooks(&self, failure: &TimeoutError) {
        for (index, hook) in self.hooks.iter().enumerate() {
            if let Err(err) = hook.on_failure(failure).await {
                tracing::warn!(hook = index, error = %err, "failure hook failed");
            }
        }
    }
}

impl<T: ?Sized + fmt::Display> fmt::Debug for Wait<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wait")
            .field("entity", &self.entity.to_string())
            .field("timeout", &self.timeout)
            .field("poll_interval", &self.poll_interval)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
