//! Overlay lifecycle tests under paused tokio time.
//!
//! These verify the dismissal guarantees: exactly one dismissal per
//! activation, timer behavior for every profile, synchronous cancellation,
//! and marker cleanup on every exit path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task;
use tokio::time::{self, Instant};

use keepsake_core::{
    ActivationProfile, DeviceClass, DismissReason, MotionPreference, Origin, OverlayController,
    OverlayKind, OverlayMarker, OverlayTiming,
};

fn origin() -> Origin {
    Origin::new(640.0, 400.0)
}

/// Counts invocations and records the reasons delivered.
#[derive(Clone, Default)]
struct DismissProbe {
    count: Arc<AtomicUsize>,
    reasons: Arc<Mutex<Vec<DismissReason>>>,
}

impl DismissProbe {
    fn callback(&self) -> impl FnOnce(DismissReason) + Send + 'static {
        let count = self.count.clone();
        let reasons = self.reasons.clone();
        move |reason| {
            count.fetch_add(1, Ordering::SeqCst);
            reasons.lock().push(reason);
        }
    }

    fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    fn last_reason(&self) -> Option<DismissReason> {
        self.reasons.lock().last().copied()
    }
}

async fn advance(duration: Duration) {
    time::advance(duration).await;
    // Let the watchdog observe any deadline that just became ready.
    task::yield_now().await;
    task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn desktop_night_sky_dismisses_at_primary_duration() {
    let marker = OverlayMarker::new();
    let controller = OverlayController::new(OverlayKind::NightSky, marker.clone());
    let probe = DismissProbe::default();

    let activation = controller
        .activate(ActivationProfile::desktop(), origin(), probe.callback())
        .expect("idle controller accepts activation");
    assert!(controller.is_active());
    assert!(marker.is_active());
    assert_eq!(activation.timing.primary, Duration::from_millis(3800));

    advance(Duration::from_millis(3799)).await;
    assert!(controller.is_active(), "still showing just before the deadline");

    advance(Duration::from_millis(1)).await;
    assert!(!controller.is_active());
    assert!(!marker.is_active());
    assert!(activation.is_dismissed());
    assert_eq!(probe.count(), 1);
    assert_eq!(probe.last_reason(), Some(DismissReason::PrimaryTimer));

    // Nothing later re-invokes the callback.
    advance(Duration::from_secs(10)).await;
    assert_eq!(probe.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn reduced_motion_shortens_the_show() {
    let controller = OverlayController::new(OverlayKind::NightSky, OverlayMarker::new());
    let probe = DismissProbe::default();
    let profile = ActivationProfile::new(DeviceClass::Desktop, MotionPreference::Reduced);

    controller
        .activate(profile, origin(), probe.callback())
        .expect("activation");

    advance(Duration::from_millis(2000)).await;
    assert!(!controller.is_active());
    assert_eq!(probe.last_reason(), Some(DismissReason::PrimaryTimer));
}

#[tokio::test(start_paused = true)]
async fn suppressed_primary_timer_falls_back_to_failsafe() {
    let marker = OverlayMarker::new();
    let controller = OverlayController::new(OverlayKind::NightSky, marker.clone());
    let probe = DismissProbe::default();

    // A primary deadline that will never fire within the test horizon
    // stands in for a throttled timer environment.
    let timing = OverlayTiming {
        primary: Duration::from_secs(3600),
        failsafe: Duration::from_millis(5000),
    };
    let activation = controller
        .activate_with(timing, ActivationProfile::desktop(), origin(), probe.callback())
        .expect("activation");

    let started = Instant::now();
    activation.dismissed().await;
    assert_eq!(started.elapsed(), Duration::from_millis(5000));

    task::yield_now().await;
    assert!(!controller.is_active());
    assert!(!marker.is_active());
    assert_eq!(probe.count(), 1);
    assert_eq!(probe.last_reason(), Some(DismissReason::FailsafeTimer));
}

#[tokio::test(start_paused = true)]
async fn cancellation_signal_wins_synchronously() {
    let marker = OverlayMarker::new();
    let controller = OverlayController::new(OverlayKind::BirdFlurry, marker.clone());
    let probe = DismissProbe::default();

    controller
        .activate(ActivationProfile::desktop(), origin(), probe.callback())
        .expect("activation");

    advance(Duration::from_millis(10)).await;
    assert!(controller.dismiss(DismissReason::Scroll));

    // Inactive in the same turn, before any timer had a chance.
    assert!(!controller.is_active());
    assert!(!marker.is_active());
    assert_eq!(probe.count(), 1);
    assert_eq!(probe.last_reason(), Some(DismissReason::Scroll));

    // The cancelled timers stay silent.
    advance(Duration::from_secs(10)).await;
    assert_eq!(probe.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn escape_and_hidden_signals_dismiss() {
    for reason in [DismissReason::DismissKey, DismissReason::Hidden] {
        let controller = OverlayController::new(OverlayKind::LoveFlurry, OverlayMarker::new());
        let probe = DismissProbe::default();
        controller
            .activate(ActivationProfile::desktop(), origin(), probe.callback())
            .expect("activation");

        assert!(controller.dismiss(reason));
        assert!(!controller.is_active());
        assert_eq!(probe.last_reason(), Some(reason));
    }
}

#[tokio::test(start_paused = true)]
async fn duplicate_activation_is_ignored_and_key_unchanged() {
    let controller = OverlayController::new(OverlayKind::NightSky, OverlayMarker::new());
    let probe = DismissProbe::default();

    let first = controller
        .activate(ActivationProfile::desktop(), origin(), probe.callback())
        .expect("first activation");
    let original_key = controller.current_key().expect("active");
    assert_eq!(first.key, original_key);

    let second = controller.activate(ActivationProfile::desktop(), origin(), probe.callback());
    assert!(second.is_none(), "duplicate triggers are ignored, not queued");
    assert_eq!(controller.current_key(), Some(original_key));

    // The running activation still ends exactly once.
    advance(Duration::from_millis(3800)).await;
    assert_eq!(probe.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn reactivation_after_dismissal_gets_a_fresh_key() {
    let marker = OverlayMarker::new();
    let controller = OverlayController::new(OverlayKind::BirdFlurry, marker.clone());
    let first_probe = DismissProbe::default();

    let first = controller
        .activate(ActivationProfile::desktop(), origin(), first_probe.callback())
        .expect("first activation");
    controller.dismiss(DismissReason::ParentHidden);
    assert!(!marker.is_active());

    let second_probe = DismissProbe::default();
    let second = controller
        .activate(ActivationProfile::desktop(), origin(), second_probe.callback())
        .expect("controller accepts a new activation after dismissal");
    assert!(second.key.0 > first.key.0);
    assert!(marker.is_active());

    advance(Duration::from_millis(2400)).await;
    assert!(!controller.is_active());
    assert!(!marker.is_active());
    assert_eq!(first_probe.count(), 1);
    assert_eq!(second_probe.count(), 1);
    assert_eq!(second_probe.last_reason(), Some(DismissReason::PrimaryTimer));
}

#[tokio::test(start_paused = true)]
async fn stale_watchdog_cannot_end_a_newer_activation() {
    let controller = OverlayController::new(OverlayKind::NightSky, OverlayMarker::new());
    let first_probe = DismissProbe::default();

    let short = OverlayTiming {
        primary: Duration::from_millis(100),
        failsafe: Duration::from_millis(5000),
    };
    controller
        .activate_with(short, ActivationProfile::desktop(), origin(), first_probe.callback())
        .expect("first activation");
    controller.dismiss(DismissReason::Scroll);

    let long = OverlayTiming {
        primary: Duration::from_secs(10),
        failsafe: Duration::from_secs(12),
    };
    let second_probe = DismissProbe::default();
    controller
        .activate_with(long, ActivationProfile::desktop(), origin(), second_probe.callback())
        .expect("second activation");

    // Past the first activation's deadlines: the new show must survive.
    advance(Duration::from_millis(6000)).await;
    assert!(controller.is_active());
    assert_eq!(second_probe.count(), 0);

    advance(Duration::from_secs(5)).await;
    assert!(!controller.is_active());
    assert_eq!(second_probe.count(), 1);
    assert_eq!(second_probe.last_reason(), Some(DismissReason::PrimaryTimer));
}

#[tokio::test(start_paused = true)]
async fn overlapping_overlays_share_the_marker() {
    let marker = OverlayMarker::new();
    let night_sky = OverlayController::new(OverlayKind::NightSky, marker.clone());
    let flurry = OverlayController::new(OverlayKind::LoveFlurry, marker.clone());

    night_sky
        .activate(ActivationProfile::desktop(), origin(), |_| {})
        .expect("night sky activation");
    flurry
        .activate(ActivationProfile::desktop(), origin(), |_| {})
        .expect("flurry activation");
    assert!(marker.is_active());

    flurry.dismiss(DismissReason::Scroll);
    assert!(marker.is_active(), "night sky still holds the marker");

    night_sky.dismiss(DismissReason::DismissKey);
    assert!(!marker.is_active());
}

#[tokio::test(start_paused = true)]
async fn teardown_releases_marker_and_fires_callback() {
    let marker = OverlayMarker::new();
    let controller = OverlayController::new(OverlayKind::LoveFlurry, marker.clone());
    let probe = DismissProbe::default();

    controller
        .activate(ActivationProfile::desktop(), origin(), probe.callback())
        .expect("activation");

    // What the UI does from its drop hook.
    controller.dismiss(DismissReason::Teardown);
    assert!(!marker.is_active());
    assert_eq!(probe.count(), 1);
    assert_eq!(probe.last_reason(), Some(DismissReason::Teardown));
}

#[tokio::test(start_paused = true)]
async fn dismissed_future_resolves_for_waiters() {
    let controller = OverlayController::new(OverlayKind::NightSky, OverlayMarker::new());
    let activation = controller
        .activate(ActivationProfile::desktop(), origin(), |_| {})
        .expect("activation");

    let waiter = tokio::spawn(async move {
        activation.dismissed().await;
        Instant::now()
    });

    advance(Duration::from_millis(500)).await;
    controller.dismiss(DismissReason::Navigation);

    let resolved_at = waiter.await.expect("waiter completes");
    assert_eq!(resolved_at.elapsed(), Duration::ZERO);
}
