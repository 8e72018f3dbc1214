//! WorkerW resolution.
//!
//! The compositing surface has no stable handle and its place in the window
//! hierarchy varies by OS version. Two strategies cover the observed
//! layouts:
//!
//! 1. Enumerate the current top-level windows and, for every window owning
//!    the shell's default view, look up its sibling "WorkerW". The scan
//!    always runs to completion and the last non-zero hit wins: a transient
//!    duplicate surface can exist momentarily and only the final one is
//!    live.
//! 2. If the scan finds nothing, poll for "WorkerW" directly under the
//!    desktop manager, bounded by [`RetryPolicy`], in case the shell is
//!    still creating it.
//!
//! Every miss is reported as `None`, never as an error; the shell's
//! internal structure is undocumented and lookups must degrade instead of
//! fault.

use std::time::Duration;

use crate::os::{WindowHandle, WindowSystem};

use super::{
    DEFAULT_VIEW_CLASS, DESKTOP_MANAGER_CLASS, SURFACE_CLASS, WM_SPAWN_SURFACE,
    WM_SPAWN_SURFACE_LPARAM, WM_SPAWN_SURFACE_WPARAM,
};

/// Bound and spacing of the direct-lookup fallback loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of direct lookups before giving up.
    pub max_attempts: u32,
    /// Pause between failed lookups.
    pub poll_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// Locates the desktop's behind-icons compositing surface.
pub struct SurfaceResolver<W> {
    windows: W,
    retry: RetryPolicy,
}

impl<W: WindowSystem> SurfaceResolver<W> {
    pub fn new(windows: W) -> Self {
        Self::with_retry(windows, RetryPolicy::default())
    }

    pub fn with_retry(windows: W, retry: RetryPolicy) -> Self {
        Self { windows, retry }
    }

    /// Look up the shell's desktop manager window. No retry: a miss means
    /// the shell is not in a state we can mount against, and callers
    /// degrade to a no-op.
    pub async fn find_desktop_manager(&self) -> Option<WindowHandle> {
        self.windows
            .find_window(DESKTOP_MANAGER_CLASS, None)
            .await
            .non_null()
    }

    /// Look up the default-view child that marks `owner` as shell-related.
    pub async fn find_default_view_child(&self, owner: WindowHandle) -> Option<WindowHandle> {
        self.windows
            .find_child_window(owner, WindowHandle::NULL, DEFAULT_VIEW_CLASS, None)
            .await
            .non_null()
    }

    /// Resolve the compositing surface, asking the shell to spawn it first
    /// in case it does not exist yet.
    ///
    /// Exactly one of the two strategies produces the result: enumeration
    /// is always tried first, and polling runs only when the scan came up
    /// empty.
    pub async fn resolve_surface(&self, desktop_manager: WindowHandle) -> Option<WindowHandle> {
        let delivered = self
            .windows
            .post_message(
                desktop_manager,
                WM_SPAWN_SURFACE,
                WM_SPAWN_SURFACE_WPARAM,
                WM_SPAWN_SURFACE_LPARAM,
            )
            .await;
        if !delivered {
            tracing::debug!("surface spawn request was not delivered");
        }

        if let Some(surface) = self.scan_for_surface().await {
            tracing::debug!(surface = surface.as_raw(), "surface found by enumeration");
            return Some(surface);
        }

        self.poll_for_surface(desktop_manager).await
    }

    /// One-shot snapshot of the current top-level stacking order. The
    /// snapshot is stale the moment it is captured and is never reused
    /// across resolutions.
    fn snapshot_top_level(&self) -> Vec<WindowHandle> {
        let mut handles = Vec::new();
        self.windows.enumerate_top_level_windows(&mut |handle| {
            handles.push(handle);
            true
        });
        handles
    }

    /// Scan every snapshotted window owning the default view for a sibling
    /// surface. The last non-zero hit wins; a zero lookup never replaces an
    /// earlier hit.
    async fn scan_for_surface(&self) -> Option<WindowHandle> {
        let snapshot = self.snapshot_top_level();
        let mut candidate = None;
        for owner in snapshot {
            if self.find_default_view_child(owner).await.is_none() {
                continue;
            }
            let sibling = self
                .windows
                .find_child_window(WindowHandle::NULL, owner, SURFACE_CLASS, None)
                .await;
            if !sibling.is_null() {
                candidate = Some(sibling);
            }
        }
        candidate
    }

    /// Direct lookup under the desktop manager, retried while the shell is
    /// still creating the surface. Stops on the first hit.
    async fn poll_for_surface(&self, desktop_manager: WindowHandle) -> Option<WindowHandle> {
        for attempt in 1..=self.retry.max_attempts {
            let surface = self
                .windows
                .find_child_window(desktop_manager, WindowHandle::NULL, SURFACE_CLASS, None)
                .await;
            if let Some(surface) = surface.non_null() {
                tracing::debug!(
                    attempt,
                    surface = surface.as_raw(),
                    "surface appeared under the desktop manager"
                );
                return Some(surface);
            }
            if attempt < self.retry.max_attempts {
                tokio::time::sleep(self.retry.poll_interval).await;
            }
        }
        tracing::warn!(
            attempts = self.retry.max_attempts,
            "compositing surface did not appear"
        );
        None
    }
}
