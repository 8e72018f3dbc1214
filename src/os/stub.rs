//! Stub window system for platforms without a supported desktop shell.
//!
//! Every lookup reports "not found" and every action reports failure, so
//! callers degrade to completed no-ops instead of faulting. Useful for
//! development builds on macOS and Linux.

use async_trait::async_trait;

use crate::os::{WindowHandle, WindowSystem};

/// No-op window system for non-Windows platforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubWindowSystem;

impl StubWindowSystem {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WindowSystem for StubWindowSystem {
    async fn find_window(&self, _class_name: &str, _window_name: Option<&str>) -> WindowHandle {
        WindowHandle::NULL
    }

    async fn find_child_window(
        &self,
        _parent: WindowHandle,
        _after_child: WindowHandle,
        _class_name: &str,
        _window_name: Option<&str>,
    ) -> WindowHandle {
        WindowHandle::NULL
    }

    fn enumerate_top_level_windows(&self, _visitor: &mut dyn FnMut(WindowHandle) -> bool) {
        // No windows to report.
    }

    async fn post_message(
        &self,
        _target: WindowHandle,
        _message: u32,
        _wparam: usize,
        _lparam: isize,
    ) -> bool {
        false
    }

    async fn set_parent(&self, _child: WindowHandle, _new_parent: WindowHandle) -> WindowHandle {
        WindowHandle::NULL
    }

    async fn invalidate_region(&self, _window: WindowHandle, _erase: bool) -> bool {
        false
    }

    async fn update_window(&self, _window: WindowHandle) -> bool {
        false
    }

    async fn broadcast_system_parameter_change(&self, _action: u32, _flag: u32) -> bool {
        false
    }
}
