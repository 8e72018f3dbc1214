//! Underlay - live wallpaper host core
//!
//! Mounts an arbitrary application window behind the desktop icons by
//! resolving the shell's hidden compositing surface ("WorkerW") and
//! reparenting the window under it. This crate provides:
//! - Surface resolution with enumeration-based discovery and a bounded
//!   polling fallback
//! - Attach/detach mounting with best-effort degradation (a missing
//!   surface yields a completed no-op, never a fault)
//! - Desktop redraw requests (global broadcast and targeted repaint)
//! - A platform window-system boundary with a Win32 implementation
//! - JSON configuration and structured logging

pub mod config;
pub mod core;
pub mod desktop;
pub mod host;
pub mod logging;
pub mod os;

// Re-export commonly used items
pub use crate::config::HostConfig;
pub use crate::core::error::{Result, UnderlayError};
pub use crate::desktop::{Compositor, RefreshOutcome, RetryPolicy, SurfaceResolver};
pub use crate::host::UnderlayHost;
pub use crate::os::{NativeWindowSystem, WindowHandle, WindowSystem};
