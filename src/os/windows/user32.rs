//! user32-backed [`WindowSystem`] implementation.
//!
//! Native failures are absorbed at this boundary: lookups that fail return
//! the null handle and boolean calls return `false`. The shell's window
//! hierarchy is undocumented and version-dependent, so exact-match failures
//! have to degrade rather than fault.

use async_trait::async_trait;

use windows::core::PCWSTR;
use windows::Win32::Foundation::{BOOL, HWND, LPARAM, WPARAM};
use windows::Win32::Graphics::Gdi::{InvalidateRect, UpdateWindow};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, FindWindowExW, FindWindowW, PostMessageW, SetParent, SystemParametersInfoW,
    SYSTEM_PARAMETERS_INFO_ACTION, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS,
};

use crate::os::{WindowHandle, WindowSystem};

/// Window system backed by user32.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32WindowSystem;

impl Win32WindowSystem {
    pub fn new() -> Self {
        Self
    }
}

/// Null-terminated UTF-16 buffer for a PCWSTR argument. The buffer must
/// stay alive for the duration of the call it backs.
fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

fn pcwstr(buf: Option<&[u16]>) -> PCWSTR {
    buf.map_or(PCWSTR::null(), |b| PCWSTR::from_raw(b.as_ptr()))
}

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.as_raw())
}

#[async_trait]
impl WindowSystem for Win32WindowSystem {
    async fn find_window(&self, class_name: &str, window_name: Option<&str>) -> WindowHandle {
        let class = wide(class_name);
        let name = window_name.map(wide);
        let found = unsafe { FindWindowW(pcwstr(Some(&class)), pcwstr(name.as_deref())) };
        WindowHandle::from_raw(found.0)
    }

    async fn find_child_window(
        &self,
        parent: WindowHandle,
        after_child: WindowHandle,
        class_name: &str,
        window_name: Option<&str>,
    ) -> WindowHandle {
        let class = wide(class_name);
        let name = window_name.map(wide);
        let found = unsafe {
            FindWindowExW(
                hwnd(parent),
                hwnd(after_child),
                pcwstr(Some(&class)),
                pcwstr(name.as_deref()),
            )
        };
        WindowHandle::from_raw(found.0)
    }

    fn enumerate_top_level_windows(&self, visitor: &mut dyn FnMut(WindowHandle) -> bool) {
        unsafe extern "system" fn visit(window: HWND, lparam: LPARAM) -> BOOL {
            let visitor = &mut *(lparam.0 as *mut &mut dyn FnMut(WindowHandle) -> bool);
            BOOL::from(visitor(WindowHandle::from_raw(window.0)))
        }

        // The callback pointer is only valid for this call; EnumWindows does
        // not retain it past returning.
        let mut visitor = visitor;
        let result = unsafe { EnumWindows(Some(visit), LPARAM(&mut visitor as *mut _ as isize)) };
        if let Err(error) = result {
            tracing::debug!(%error, "top-level window enumeration ended early");
        }
    }

    async fn post_message(
        &self,
        target: WindowHandle,
        message: u32,
        wparam: usize,
        lparam: isize,
    ) -> bool {
        unsafe { PostMessageW(hwnd(target), message, WPARAM(wparam), LPARAM(lparam)).is_ok() }
    }

    async fn set_parent(&self, child: WindowHandle, new_parent: WindowHandle) -> WindowHandle {
        let previous = unsafe { SetParent(hwnd(child), hwnd(new_parent)) };
        WindowHandle::from_raw(previous.0)
    }

    async fn invalidate_region(&self, window: WindowHandle, erase: bool) -> bool {
        unsafe { InvalidateRect(hwnd(window), None, BOOL::from(erase)).as_bool() }
    }

    async fn update_window(&self, window: WindowHandle) -> bool {
        unsafe { UpdateWindow(hwnd(window)).as_bool() }
    }

    async fn broadcast_system_parameter_change(&self, action: u32, flag: u32) -> bool {
        unsafe {
            SystemParametersInfoW(
                SYSTEM_PARAMETERS_INFO_ACTION(action),
                0,
                None,
                SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(flag),
            )
            .is_ok()
        }
    }
}
