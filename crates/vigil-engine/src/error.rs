use std::time::Duration;

/// Failures produced while evaluating queries, commands and conditions.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WaitError {
    /// A single predicate evaluation did not hold.
    #[error("{0}")]
    ConditionNotMatched(String),

    /// The deadline passed while retrying.
    #[error(transparent)]
    Timeout(#[from] TimeoutError),

    /// An entity operation failed (element not found, script error, ...).
    #[error("{0}")]
    Failed(String),
}

impl WaitError {
    pub fn condition_not_matched(message: impl Into<String>) -> Self {
        WaitError::ConditionNotMatched(message.into())
    }

    pub fn failed(message: impl Into<String>) -> Self {
        WaitError::Failed(message.into())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, WaitError::Timeout(_))
    }

    pub fn is_condition_not_matched(&self) -> bool {
        matches!(self, WaitError::ConditionNotMatched(_))
    }

    pub fn timeout_error(&self) -> Option<&TimeoutError> {
        match self {
            WaitError::Timeout(err) => Some(err),
            _ => None,
        }
    }
}

/// Raised by [`crate::Wait`] once retries run past the deadline.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error(
    "Timed out after {}ms, while waiting for:\n\t{entity}.{function}\nReason: {cause}",
    .timeout.as_millis()
)]
pub struct TimeoutError {
    pub timeout: Duration,
    pub entity: String,
    pub function: String,
    pub cause: String,
}

impl TimeoutError {
    pub fn new(
        timeout: Duration,
        entity: impl Into<String>,
        function: impl Into<String>,
        cause: &WaitError,
    ) -> Self {
        Self {
            timeout,
            entity: entity.into(),
            function: function.into(),
            cause: cause.to_string(),
        }
    }
}
