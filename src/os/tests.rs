//! Tests for the window-system boundary types.

use proptest::prelude::*;

use crate::os::WindowHandle;

#[test]
fn null_handle_semantics() {
    assert!(WindowHandle::NULL.is_null());
    assert_eq!(WindowHandle::from_raw(0), WindowHandle::NULL);
    assert_eq!(WindowHandle::NULL.non_null(), None);
    assert_eq!(WindowHandle::default(), WindowHandle::NULL);
}

#[test]
fn live_handle_semantics() {
    let handle = WindowHandle::from_raw(42);
    assert!(!handle.is_null());
    assert_eq!(handle.non_null(), Some(handle));
    assert_eq!(handle.as_raw(), 42);
}

proptest! {
    /// Wrapping and unwrapping a raw handle value loses nothing.
    #[test]
    fn raw_round_trip(raw in any::<isize>()) {
        let handle = WindowHandle::from_raw(raw);
        prop_assert_eq!(handle.as_raw(), raw);
    }

    /// `non_null` is `Some` exactly for non-zero raw values.
    #[test]
    fn non_null_matches_zero_sentinel(raw in any::<isize>()) {
        let handle = WindowHandle::from_raw(raw);
        prop_assert_eq!(handle.non_null().is_some(), raw != 0);
        prop_assert_eq!(handle.is_null(), raw == 0);
    }
}

#[cfg(not(windows))]
mod stub_behavior {
    use crate::os::stub::StubWindowSystem;
    use crate::os::{WindowHandle, WindowSystem};

    #[tokio::test]
    async fn every_lookup_misses() {
        let system = StubWindowSystem::new();
        assert!(system.find_window("Progman", None).await.is_null());
        assert!(system
            .find_child_window(WindowHandle::NULL, WindowHandle::NULL, "WorkerW", None)
            .await
            .is_null());
        assert!(system.set_parent(WindowHandle::from_raw(7), WindowHandle::NULL).await.is_null());
    }

    #[tokio::test]
    async fn every_action_reports_failure() {
        let system = StubWindowSystem::new();
        assert!(!system.post_message(WindowHandle::from_raw(1), 0x052C, 0xD, 0x1).await);
        assert!(!system.invalidate_region(WindowHandle::from_raw(1), false).await);
        assert!(!system.update_window(WindowHandle::from_raw(1)).await);
        assert!(!system.broadcast_system_parameter_change(0x0014, 0x02).await);
    }

    #[test]
    fn enumeration_visits_nothing() {
        let system = StubWindowSystem::new();
        let mut visited = 0;
        system.enumerate_top_level_windows(&mut |_| {
            visited += 1;
            true
        });
        assert_eq!(visited, 0);
    }
}
