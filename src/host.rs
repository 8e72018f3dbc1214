//! Host facade wiring configuration, logging and the compositor together.

use std::path::Path;

use crate::config::HostConfig;
use crate::core::error::Result;
use crate::desktop::{Compositor, RefreshOutcome, RetryPolicy};
use crate::logging::{self, LoggingHandle};
use crate::os::{NativeWindowSystem, WindowHandle};

/// One-stop entry point for embedding applications.
///
/// Owns the compositor for the platform window system plus the logging
/// guards, so keeping the host alive keeps file logging alive.
pub struct UnderlayHost {
    compositor: Compositor<NativeWindowSystem>,
    config: HostConfig,
    _logging: LoggingHandle,
}

impl UnderlayHost {
    /// Build a host from an in-memory configuration.
    pub fn new(config: HostConfig) -> Result<Self> {
        config.validate()?;
        let logging = logging::init(&config.logging)?;
        let retry = RetryPolicy::from(&config.resolver);
        let compositor = Compositor::with_retry(NativeWindowSystem::new(), retry);
        tracing::info!(
            max_attempts = config.resolver.max_attempts,
            poll_interval_ms = config.resolver.poll_interval_ms,
            "underlay host ready"
        );
        Ok(Self {
            compositor,
            config,
            _logging: logging,
        })
    }

    /// Load the configuration file at `path` (defaults apply when it does
    /// not exist) and build a host from it.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let config = HostConfig::load_or_default(path).await?;
        Self::new(config)
    }

    /// Mount `window` behind the desktop icons; returns its previous
    /// parent.
    pub async fn attach(&self, window: WindowHandle) -> WindowHandle {
        self.compositor.attach(window).await
    }

    /// Restore `window` to top-level status; returns its previous parent.
    pub async fn detach(&self, window: WindowHandle) -> WindowHandle {
        self.compositor.detach(window).await
    }

    /// Broadcast the global desktop-settings-changed refresh.
    pub async fn refresh(&self) -> bool {
        self.compositor.refresh().await
    }

    /// Invalidate and repaint the desktop icon view.
    pub async fn refresh_desktop(&self) -> RefreshOutcome {
        self.compositor.refresh_desktop().await
    }

    /// The active configuration.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }
}
