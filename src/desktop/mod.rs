//! Desktop surface resolution and window mounting.
//!
//! The shell's "Progman" window owns the desktop icon layer. A fixed
//! undocumented message makes it spawn a "WorkerW" surface that composites
//! behind the icons; reparenting an application window under that surface
//! turns the window into a live wallpaper. [`SurfaceResolver`] locates the
//! surface, [`Compositor`] performs the mount/unmount, and [`redraw`]
//! requests the shell repaints that make the change visible.

pub mod compositor;
pub mod redraw;
pub mod resolver;


pub use compositor::Compositor;
pub use redraw::{refresh, refresh_desktop, RefreshOutcome};
pub use resolver::{RetryPolicy, SurfaceResolver};

/// Class name of the shell's desktop manager window.
pub const DESKTOP_MANAGER_CLASS: &str = "Progman";

/// Class name of the child view that owns the desktop icons. Owning one of
/// these marks a top-level window as shell-related.
pub const DEFAULT_VIEW_CLASS: &str = "SHELLDLL_DefView";

/// Class name of the compositing surface that renders behind the icons.
pub const SURFACE_CLASS: &str = "WorkerW";

/// Undocumented message that asks the desktop manager to spawn the
/// compositing surface if it does not already exist. The payload is a fixed
/// value recognized by the shell, not a tunable.
pub const WM_SPAWN_SURFACE: u32 = 0x052C;
pub const WM_SPAWN_SURFACE_WPARAM: usize = 0xD;
pub const WM_SPAWN_SURFACE_LPARAM: isize = 0x1;

/// System-parameter action and flag broadcast by [`redraw::refresh`].
pub const SPI_SETDESKWALLPAPER: u32 = 0x0014;
pub const SPIF_SENDCHANGE: u32 = 0x02;
