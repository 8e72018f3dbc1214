//! OS window boundary for underlay
//!
//! Everything the host needs from the platform window manager is expressed
//! by the [`WindowSystem`] trait: raw window lookups, top-level enumeration,
//! reparenting and repaint primitives. The Windows implementation lives in
//! [`windows`]; other platforms get a no-op stub so the crate builds and
//! tests everywhere.

#[cfg(windows)]
pub mod windows;

#[cfg(windows)]
pub use self::windows::Win32WindowSystem as NativeWindowSystem;

#[cfg(not(windows))]
pub mod stub;

#[cfg(not(windows))]
pub use stub::StubWindowSystem as NativeWindowSystem;

#[cfg(test)]
mod tests;

use async_trait::async_trait;

/// Opaque top-level window identifier issued by the OS window manager.
///
/// Handles are never allocated or freed here, only read and passed through.
/// Zero is the conventional "no window" sentinel at the OS boundary; code
/// above the boundary converts it to an `Option` via
/// [`non_null`](WindowHandle::non_null).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(isize);

impl WindowHandle {
    /// The zero sentinel ("no window").
    pub const NULL: WindowHandle = WindowHandle(0);

    /// Wrap a raw OS handle value.
    pub const fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    /// The raw OS handle value.
    pub const fn as_raw(self) -> isize {
        self.0
    }

    /// Whether this is the zero sentinel.
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// `None` when this is the zero sentinel.
    pub fn non_null(self) -> Option<WindowHandle> {
        if self.is_null() {
            None
        } else {
            Some(self)
        }
    }
}

/// Platform window-manager primitives the host is written against.
///
/// Implementations never surface platform errors through this trait:
/// lookups that find nothing return [`WindowHandle::NULL`] and boolean
/// operations report failure as `false`, so callers degrade instead of
/// aborting.
#[async_trait]
pub trait WindowSystem: Send + Sync {
    /// Look up a top-level window by class name and optional title.
    async fn find_window(&self, class_name: &str, window_name: Option<&str>) -> WindowHandle;

    /// Look up a child of `parent` (the desktop when null), starting the
    /// search after `after_child`.
    async fn find_child_window(
        &self,
        parent: WindowHandle,
        after_child: WindowHandle,
        class_name: &str,
        window_name: Option<&str>,
    ) -> WindowHandle;

    /// Invoke `visitor` once per current top-level window, in stacking
    /// order. Returning `false` stops the walk. The visitor is only live
    /// for the duration of this call.
    fn enumerate_top_level_windows(&self, visitor: &mut dyn FnMut(WindowHandle) -> bool);

    /// Post a message to `target` without waiting for it to be processed.
    async fn post_message(
        &self,
        target: WindowHandle,
        message: u32,
        wparam: usize,
        lparam: isize,
    ) -> bool;

    /// Reparent `child` under `new_parent`; the null handle restores
    /// top-level status. Returns the previous parent, null on failure.
    async fn set_parent(&self, child: WindowHandle, new_parent: WindowHandle) -> WindowHandle;

    /// Mark the whole client area of `window` dirty.
    async fn invalidate_region(&self, window: WindowHandle, erase: bool) -> bool;

    /// Request an immediate synchronous repaint of `window`'s dirty region.
    async fn update_window(&self, window: WindowHandle) -> bool;

    /// Broadcast a system parameter change to every top-level window.
    async fn broadcast_system_parameter_change(&self, action: u32, flag: u32) -> bool;
}
