//! Mounting windows on the resolved compositing surface.

use crate::os::{WindowHandle, WindowSystem};

use super::redraw::{self, RefreshOutcome};
use super::resolver::{RetryPolicy, SurfaceResolver};

/// Reparents caller-supplied windows under the desktop's compositing
/// surface and requests the repaints that make the change visible.
///
/// Stateless between calls: every [`attach`](Self::attach) resolves the
/// surface afresh. Concurrent attaches for different windows are
/// independent; calls for the same window must be serialized by the
/// caller.
pub struct Compositor<W> {
    windows: W,
    resolver: SurfaceResolver<W>,
}

impl<W: WindowSystem + Clone> Compositor<W> {
    pub fn new(windows: W) -> Self {
        Self::with_retry(windows, RetryPolicy::default())
    }

    pub fn with_retry(windows: W, retry: RetryPolicy) -> Self {
        Self {
            resolver: SurfaceResolver::with_retry(windows.clone(), retry),
            windows,
        }
    }
}

impl<W: WindowSystem> Compositor<W> {
    /// Mount `window` behind the desktop icons.
    ///
    /// Returns the window's previous parent as reported by the reparent
    /// call, for diagnostics. When the surface cannot be resolved the
    /// reparent still runs against the null handle and the call completes
    /// as a no-op rather than failing.
    pub async fn attach(&self, window: WindowHandle) -> WindowHandle {
        let surface = match self.resolver.find_desktop_manager().await {
            Some(desktop_manager) => self.resolver.resolve_surface(desktop_manager).await,
            None => {
                tracing::warn!("desktop manager window not found; attach degrades to a no-op");
                None
            }
        };

        let previous = self
            .windows
            .set_parent(window, surface.unwrap_or(WindowHandle::NULL))
            .await;

        let outcome = redraw::refresh_desktop(&self.windows).await;
        tracing::debug!(
            window = window.as_raw(),
            surface = surface.map_or(0, WindowHandle::as_raw),
            previous_parent = previous.as_raw(),
            invalidated = outcome.invalidated,
            updated = outcome.updated,
            "attach completed"
        );
        previous
    }

    /// Restore `window` to top-level status. Symmetric inverse of
    /// [`attach`](Self::attach); resolves nothing.
    pub async fn detach(&self, window: WindowHandle) -> WindowHandle {
        let previous = self.windows.set_parent(window, WindowHandle::NULL).await;
        tracing::debug!(
            window = window.as_raw(),
            previous_parent = previous.as_raw(),
            "detach completed"
        );
        previous
    }

    /// The resolver this compositor mounts against.
    pub fn resolver(&self) -> &SurfaceResolver<W> {
        &self.resolver
    }

    /// Broadcast the global desktop-settings-changed refresh.
    pub async fn refresh(&self) -> bool {
        redraw::refresh(&self.windows).await
    }

    /// Invalidate and repaint the desktop icon view.
    pub async fn refresh_desktop(&self) -> RefreshOutcome {
        redraw::refresh_desktop(&self.windows).await
    }
}
