// SPDX-License-Identifier: MPL-2.0
//! Toast countdown behavior driven through the public API with logical time.

use jobsite_ui::ui::notifications::{
    DismissReason, Manager, Notification, Phase, Severity, SeverityIcon, StyleClass,
    ToastInstance,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
    let calls = Arc::new(AtomicUsize::new(0));
    let handle = Arc::clone(&calls);
    (calls, move || {
        handle.fetch_add(1, Ordering::SeqCst);
    })
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn saved_toast_times_out_after_its_duration() {
    let start = Instant::now();
    let (calls, on_dismiss) = counter();
    let notification = Notification::success("Saved").with_duration(ms(1000));
    let mut toast = ToastInstance::mount(notification, on_dismiss, start);

    assert_eq!(toast.tick(start + ms(999)), None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(toast.tick(start + ms(1000)), Some(DismissReason::Timeout));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert_eq!(toast.tick(start + ms(5000)), None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn twenty_minute_toast_waits_its_full_duration() {
    let start = Instant::now();
    let (calls, on_dismiss) = counter();
    let duration = Duration::from_secs(20 * 60);
    let notification = Notification::info("Long").with_duration(duration);
    let mut toast = ToastInstance::mount(notification, on_dismiss, start);

    assert_eq!(toast.tick(start + Duration::from_secs(600)), None);
    assert_eq!(toast.tick(start + duration - ms(1)), None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(toast.tick(start + duration), Some(DismissReason::Timeout));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn fractional_millisecond_duration_is_not_rounded_down() {
    let start = Instant::now();
    let (calls, on_dismiss) = counter();
    let duration = Duration::from_micros(1_900);
    let notification = Notification::info("Quick").with_duration(duration);
    let mut toast = ToastInstance::mount(notification, on_dismiss, start);

    assert_eq!(toast.tick(start + ms(1)), None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(toast.tick(start + ms(2)), Some(DismissReason::Timeout));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn close_before_default_timeout_fires_once() {
    let start = Instant::now();
    let (calls, on_dismiss) = counter();
    let mut toast = ToastInstance::mount(Notification::info("Hello"), on_dismiss, start);
    assert_eq!(toast.deadline(), Some(start + ms(5000)));

    assert_eq!(
        toast.close(start + ms(200)),
        Some(DismissReason::UserClosed)
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert_eq!(toast.tick(start + ms(5000)), None);
    assert_eq!(toast.close(start + ms(5001)), None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn host_removal_cancels_the_countdown() {
    let start = Instant::now();
    let (calls, on_dismiss) = counter();
    let mut toast = ToastInstance::mount(Notification::warning("Careful"), on_dismiss, start);

    assert!(toast.cancel());
    assert_eq!(toast.phase(), Phase::Cancelled);
    assert_eq!(toast.tick(start + ms(5000)), None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn dropping_a_pending_toast_never_fires() {
    let start = Instant::now();
    let (calls, on_dismiss) = counter();
    let toast = ToastInstance::mount(Notification::error("Gone"), on_dismiss, start);
    drop(toast);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn callback_fires_exactly_once_whichever_path_wins() {
    let start = Instant::now();
    for close_at in [0, 1, 500, 999, 1000, 1500] {
        let (calls, on_dismiss) = counter();
        let mut toast = ToastInstance::mount(
            Notification::success("x").with_duration(ms(1000)),
            on_dismiss,
            start,
        );
        let _ = toast.tick(start + ms(close_at / 2));
        let _ = toast.close(start + ms(close_at));
        let _ = toast.tick(start + ms(2000));
        let _ = toast.close(start + ms(2001));
        assert_eq!(calls.load(Ordering::SeqCst), 1, "close at {close_at}ms");
    }
}

#[test]
fn manager_removal_cancels_pending_toast() {
    let start = Instant::now();
    let (calls, on_dismiss) = counter();
    let mut manager = Manager::new();
    let notification = Notification::info("Queued work");
    let id = notification.id();
    manager.push_with_callback(notification, on_dismiss, start);

    assert!(manager.remove(id, start + ms(100)));
    assert!(manager.tick(start + ms(5000)).is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn manager_tick_reports_expired_toasts() {
    let start = Instant::now();
    let (calls, on_dismiss) = counter();
    let mut manager = Manager::new();
    let notification = Notification::success("Done").with_duration(ms(1000));
    let id = notification.id();
    manager.push_with_callback(notification, on_dismiss, start);

    assert!(manager.tick(start + ms(500)).is_empty());
    assert_eq!(manager.tick(start + ms(1000)), vec![id]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!manager.has_notifications());
}

#[test]
fn severity_icons_follow_fixed_mapping() {
    let expected = [
        (Severity::Success, SeverityIcon::Check, StyleClass::Check),
        (Severity::Error, SeverityIcon::Cross, StyleClass::Cross),
        (Severity::Warning, SeverityIcon::Alert, StyleClass::Alert),
        (Severity::Info, SeverityIcon::Info, StyleClass::Info),
    ];
    for (severity, icon, class) in expected {
        assert_eq!(severity.icon(), icon);
        assert_eq!(severity.style_class(), class);
        assert_eq!(severity.color(), class.accent());
    }
}
