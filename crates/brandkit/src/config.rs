//! Scraper configuration.
//!
//! Defaults reproduce the fixed behaviour: 10 s static timeout, 20 s
//! navigation timeout, a desktop Chrome user agent, rendering enabled.

use std::path::PathBuf;
use std::time::Duration;

/// Timeout for the single static GET.
pub const STATIC_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for browser navigation on the rendered tier.
pub const RENDER_TIMEOUT: Duration = Duration::from_secs(20);

/// Browser-like identification sent by the static tier.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                              AppleWebKit/537.36 (KHTML, like Gecko) \
                              Chrome/131.0.0.0 Safari/537.36";

/// Environment variable naming an explicit browser binary.
pub const CHROMIUM_PATH_ENV: &str = "BRANDKIT_CHROMIUM_PATH";

/// Environment variable that turns the rendered tier off when set to a
/// truthy value (`1`, `true`, `yes`).
pub const DISABLE_RENDER_ENV: &str = "BRANDKIT_DISABLE_RENDER";

/// Settings shared by both fetch tiers.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub static_timeout: Duration,
    pub render_timeout: Duration,
    pub user_agent: String,
    /// Explicit browser binary. When `None`, the browser is discovered.
    pub chromium_path: Option<PathBuf>,
    /// When false the rendered tier always fails (HTTP-only mode).
    pub render_enabled: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            static_timeout: STATIC_TIMEOUT,
            render_timeout: RENDER_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
            chromium_path: None,
            render_enabled: true,
        }
    }
}

impl ScraperConfig {
    /// Defaults, overridden by `BRANDKIT_CHROMIUM_PATH` and
    /// `BRANDKIT_DISABLE_RENDER`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var(CHROMIUM_PATH_ENV) {
            let path = path.trim();
            if !path.is_empty() {
                config.chromium_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(flag) = std::env::var(DISABLE_RENDER_ENV) {
            if is_truthy(&flag) {
                config.render_enabled = false;
            }
        }

        config
    }

    pub fn with_chromium_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    pub fn with_render_enabled(mut self, enabled: bool) -> Self {
        self.render_enabled = enabled;
        self
    }

    pub fn with_static_timeout(mut self, timeout: Duration) -> Self {
        self.static_timeout = timeout;
        self
    }

    pub fn with_render_timeout(mut self, timeout: Duration) -> Self {
        self.render_timeout = timeout;
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
