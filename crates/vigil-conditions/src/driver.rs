//! Entity contracts the domain queries read from.
//!
//! Implementations live with the browser driver (WebDriver, CDP, ...); these
//! traits only name the reads that conditions need.

use async_trait::async_trait;
use std::fmt;
use vigil_engine::WaitError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DriverError {
    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Element {selector} is stale (removed from DOM)")]
    ElementStale { selector: String },

    #[error("Script execution error: {0}")]
    ScriptError(String),

    #[error("Connection lost")]
    ConnectionLost,

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Other: {0}")]
    Other(String),
}

impl From<DriverError> for WaitError {
    fn from(err: DriverError) -> Self {
        WaitError::failed(err.to_string())
    }
}

/// A single located DOM element.
#[async_trait]
pub trait Element: fmt::Display + Send + Sync {
    /// Whether the element is currently attached to the DOM. Absence is
    /// `Ok(false)`, not an error.
    async fn is_present(&self) -> Result<bool, DriverError>;

    async fn is_displayed(&self) -> Result<bool, DriverError>;

    async fn is_enabled(&self) -> Result<bool, DriverError>;

    async fn is_focused(&self) -> Result<bool, DriverError>;

    /// Visible text.
    async fn text(&self) -> Result<String, DriverError>;

    async fn attribute(&self, name: &str) -> Result<Option<String>, DriverError>;

    async fn value(&self) -> Result<String, DriverError> {
        Ok(self.attribute("value").await?.unwrap_or_default())
    }
}

/// A list of elements matched by one selector.
#[async_trait]
pub trait Collection: fmt::Display + Send + Sync {
    async fn size(&self) -> Result<usize, DriverError>;

    async fn texts(&self) -> Result<Vec<String>, DriverError>;
}

/// The browser session as a whole.
#[async_trait]
pub trait Browser: fmt::Display + Send + Sync {
    async fn url(&self) -> Result<String, DriverError>;

    async fn title(&self) -> Result<String, DriverError>;

    /// Number of open tabs/windows.
    async fn tab_count(&self) -> Result<usize, DriverError>;

    async fn execute_script(&self, script: &str) -> Result<serde_json::Value, DriverError>;

    async fn screenshot(&self) -> Result<Vec<u8>, DriverError> {
        Err(DriverError::NotSupported("screenshot".into()))
    }

    async fn page_source(&self) -> Result<String, DriverError> {
        Err(DriverError::NotSupported("page_source".into()))
    }
}
