//! Desktop repaint requests.

use crate::os::{WindowHandle, WindowSystem};

use super::{DEFAULT_VIEW_CLASS, DESKTOP_MANAGER_CLASS, SPIF_SENDCHANGE, SPI_SETDESKWALLPAPER};

/// What a targeted desktop refresh actually achieved. The two outcomes are
/// independent so callers can tell "region marked dirty" from "actually
/// repainted".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshOutcome {
    /// The icon view's region was marked dirty.
    pub invalidated: bool,
    /// The view repainted synchronously.
    pub updated: bool,
}

/// Broadcast a coarse "desktop settings changed" hint to the whole system.
pub async fn refresh<W: WindowSystem>(windows: &W) -> bool {
    windows
        .broadcast_system_parameter_change(SPI_SETDESKWALLPAPER, SPIF_SENDCHANGE)
        .await
}

/// Invalidate the desktop icon view without erasing its background, then
/// request an immediate synchronous repaint of it.
pub async fn refresh_desktop<W: WindowSystem>(windows: &W) -> RefreshOutcome {
    let desktop_manager = windows.find_window(DESKTOP_MANAGER_CLASS, None).await;
    let view = windows
        .find_child_window(desktop_manager, WindowHandle::NULL, DEFAULT_VIEW_CLASS, None)
        .await;
    if view.is_null() {
        tracing::debug!("desktop icon view not found; nothing to repaint");
        return RefreshOutcome::default();
    }

    RefreshOutcome {
        invalidated: windows.invalidate_region(view, false).await,
        updated: windows.update_window(view).await,
    }
}
