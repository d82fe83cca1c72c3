use crate::driver::Browser;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};
use vigil_engine::config::SnapshotConfig;
use vigil_engine::{FailureHook, TimeoutError, WaitError};

/// Saves a screenshot and the page source when a wait times out.
///
/// Files land in `dir` as `<stamp>.png` and `<stamp>.html`, where the stamp is
/// the epoch time in milliseconds plus a per-hook counter.
pub struct SnapshotHook<B: ?Sized> {
    browser: Arc<B>,
    dir: PathBuf,
    screenshot: bool,
    page_source: bool,
    counter: AtomicU64,
}

impl<B: Browser + ?Sized> SnapshotHook<B> {
    pub fn new(browser: Arc<B>, dir: impl Into<PathBuf>) -> Self {
        Self {
            browser,
            dir: dir.into(),
            screenshot: true,
            page_source: true,
            counter: AtomicU64::new(0),
        }
    }

    /// `None` when snapshots are disabled.
    pub fn from_config(browser: Arc<B>, config: &SnapshotConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        Some(Self {
            screenshot: config.screenshot,
            page_source: config.page_source,
            ..Self::new(browser, config.dir.clone())
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn next_stamp(&self) -> String {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        format!("{}-{}", millis, self.counter.fetch_add(1, Ordering::SeqCst))
    }

    async fn save_screenshot(&self, stamp: &str) -> Result<(), WaitError> {
        let bytes = self.browser.screenshot().await?;
        let path = self.dir.join(format!("{}.png", stamp));
        write_file(&path, &bytes).await?;
        info!(path = %path.display(), "saved screenshot");
        Ok(())
    }

    async fn save_page_source(&self, stamp: &str) -> Result<(), WaitError> {
        let source = self.browser.page_source().await?;
        let path = self.dir.join(format!("{}.html", stamp));
        write_file(&path, source.as_bytes()).await?;
        info!(path = %path.display(), "saved page source");
        Ok(())
    }
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<(), WaitError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| WaitError::failed(format!("Failed to write {}: {}", path.display(), e)))
}

#[async_trait]
impl<B: Browser + ?Sized + 'static> FailureHook for SnapshotHook<B> {
    async fn on_failure(&self, error: &TimeoutError) -> Result<(), WaitError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            WaitError::failed(format!(
                "Failed to create snapshot dir {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let stamp = self.next_stamp();
        let mut first_error = None;

        if self.screenshot
            && let Err(err) = self.save_screenshot(&stamp).await
        {
            warn!(entity = %error.entity, error = %err, "screenshot not saved");
            first_error = first_error.or(Some(err));
        }
        if self.page_source
            && let Err(err) = self.save_page_source(&stamp).await
        {
            warn!(entity = %error.entity, error = %err, "page source not saved");
            first_error = first_error.or(Some(err));
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
