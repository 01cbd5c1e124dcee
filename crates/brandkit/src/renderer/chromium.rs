//! Headless Chromium via chromiumoxide.
//!
//! A [`BrowserSession`] owns one browser process for one scrape. It is torn
//! down by [`BrowserSession::shutdown`]; if that never runs (panic, task
//! cancelled) its `Drop` kills the process through chromiumoxide's own
//! `Drop`, then stops the event handler and removes the profile directory.

use crate::config::CHROMIUM_PATH_ENV;
use crate::error::{FetchTier, ScrapeError, ScrapeResult};
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Find a Chromium-family browser binary.
///
/// Order: `explicit`, `BRANDKIT_CHROMIUM_PATH`, `~/.brandkit/chromium/`,
/// `google-chrome` / `chromium` / `chromium-browser` on `PATH`, then the
/// standard macOS install location.
pub fn find_chromium(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("configured browser {} does not exist", path.display());
    }

    if let Ok(p) = std::env::var(CHROMIUM_PATH_ENV) {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        let candidates = if cfg!(target_os = "macos") {
            vec![
                home.join(".brandkit/chromium/chrome-mac-arm64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
                home.join(".brandkit/chromium/chrome-mac-x64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
                home.join(".brandkit/chromium/chrome"),
            ]
        } else {
            vec![
                home.join(".brandkit/chromium/chrome-linux64/chrome"),
                home.join(".brandkit/chromium/chrome"),
            ]
        };
        for c in candidates {
            if c.exists() {
                return Some(c);
            }
        }
    }

    for name in ["google-chrome", "chromium", "chromium-browser"] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    if cfg!(target_os = "macos") {
        let common =
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

/// One isolated browser process with its own throwaway profile.
pub struct BrowserSession {
    /// `None` once torn down.
    browser: Option<Browser>,
    handler_task: JoinHandle<()>,
    profile_dir: PathBuf,
}

impl BrowserSession {
    /// Launch a headless browser from `chrome_path`.
    pub async fn launch(chrome_path: &Path) -> ScrapeResult<Self> {
        let profile_dir =
            std::env::temp_dir().join(format!("brandkit-chromium-{}", uuid::Uuid::new_v4()));

        let config = BrowserConfig::builder()
            .chrome_executable(chrome_path)
            .user_data_dir(&profile_dir)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-background-networking")
            .build()
            .map_err(|e| ScrapeError::Launch(format!("failed to build browser config: {e}")))?;

        let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
            remove_profile_dir(&profile_dir);
            ScrapeError::Launch(e.to_string())
        })?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("chromium handler event error: {e}");
                }
            }
        });

        tracing::debug!("launched browser with profile {}", profile_dir.display());

        Ok(Self {
            browser: Some(browser),
            handler_task,
            profile_dir,
        })
    }

    /// Throwaway profile directory of this browser.
    pub fn profile_dir(&self) -> &Path {
        &self.profile_dir
    }

    /// Open one page, navigate to `url` within `timeout`, and return the
    /// rendered `outerHTML`.
    pub async fn capture(&self, url: &str, timeout: Duration) -> ScrapeResult<String> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| ScrapeError::Launch("browser already shut down".to_string()))?;
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScrapeError::Launch(format!("failed to create new page: {e}")))?;

        let navigation = tokio::time::timeout(timeout, async {
            page.goto(url).await?;
            page.wait_for_navigation().await?;
            Ok::<_, chromiumoxide::error::CdpError>(())
        })
        .await;

        let html = match navigation {
            Ok(Ok(())) => match page.evaluate("document.documentElement.outerHTML").await {
                Ok(result) => result
                    .into_value::<String>()
                    .map_err(|e| ScrapeError::Capture(format!("{e:?}"))),
                Err(e) => Err(ScrapeError::Capture(e.to_string())),
            },
            Ok(Err(e)) => Err(ScrapeError::Navigation(e.to_string())),
            Err(_) => Err(ScrapeError::Timeout {
                tier: FetchTier::Rendered,
                after: timeout,
            }),
        };

        if let Err(e) = page.close().await {
            tracing::debug!("page close failed: {e}");
        }
        html
    }

    /// Close the browser, wait for the process to exit, stop the event
    /// handler and remove the profile directory.
    pub async fn shutdown(mut self) {
        if let Some(mut browser) = self.browser.take() {
            if let Err(e) = browser.close().await {
                tracing::debug!("browser close failed: {e}");
            }
            if let Err(e) = browser.wait().await {
                tracing::debug!("waiting for browser exit failed: {e}");
            }
        }
        self.handler_task.abort();
        remove_profile_dir(&self.profile_dir);
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        // Already torn down by `shutdown`.
        let Some(browser) = self.browser.take() else {
            return;
        };
        tracing::warn!("browser session dropped without shutdown; forcing teardown");
        // chromiumoxide kills a still-running child when the Browser drops.
        drop(browser);
        self.handler_task.abort();
        remove_profile_dir(&self.profile_dir);
    }
}

fn remove_profile_dir(dir: &Path) {
    if let Err(e) = std::fs::remove_dir_all(dir) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::debug!("failed to remove browser profile {}: {e}", dir.display());
        }
    }
}
