//! Overlay lifecycle controller.
//!
//! Guarantees that a full-screen decorative overlay, once shown, is always
//! eventually removed and releases its side effects on every exit path.
//!
//! The state machine is `idle -> active -> idle`, nothing else. An
//! activation starts a watchdog task racing the primary deadline, the
//! failsafe deadline, and a per-activation [`CancellationToken`]; the first
//! to complete wins and the others are cancelled in the same turn, so a
//! stale timer can never re-invoke the dismissal callback.
//!
//! ## Usage
//!
//! ```ignore
//! let marker = OverlayMarker::new();
//! let controller = OverlayController::new(OverlayKind::NightSky, marker.clone());
//!
//! let activation = controller
//!     .activate(profile, Origin::new(x, y), move |reason| {
//!         tracing::info!("overlay gone: {}", reason.as_str());
//!     })
//!     .expect("not already active");
//!
//! // Any cancellation source, at any time:
//! controller.dismiss(DismissReason::Scroll);
//! ```
//!
//! `activate` must be called from within a tokio runtime; the watchdog is a
//! spawned task.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::particles::{self, Origin, ParticleSpec, StarSpec};
use crate::profile::{ActivationProfile, OverlayTiming};

/// The three decorative overlay effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    NightSky,
    BirdFlurry,
    LoveFlurry,
}

impl OverlayKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayKind::NightSky => "night-sky",
            OverlayKind::BirdFlurry => "bird-flurry",
            OverlayKind::LoveFlurry => "love-flurry",
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an activation ended. Exactly one reason is delivered per activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The expected happy-path deadline.
    PrimaryTimer,
    /// The safety net against throttled or suspended primary timers.
    FailsafeTimer,
    /// The dismiss key (Escape).
    DismissKey,
    /// First scroll event; a single scroll pixel is sufficient.
    Scroll,
    /// The window lost visibility.
    Hidden,
    /// Route navigation while the overlay was showing.
    Navigation,
    /// The parent cleared its visible flag.
    ParentHidden,
    /// The owning component was torn down.
    Teardown,
}

impl DismissReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DismissReason::PrimaryTimer => "primary-timer",
            DismissReason::FailsafeTimer => "failsafe",
            DismissReason::DismissKey => "dismiss-key",
            DismissReason::Scroll => "scroll",
            DismissReason::Hidden => "hidden",
            DismissReason::Navigation => "navigation",
            DismissReason::ParentHidden => "parent-hidden",
            DismissReason::Teardown => "teardown",
        }
    }
}

impl fmt::Display for DismissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incrementing identifier assigned per activation. Forces a fresh payload
/// per trigger and lets callers distinguish consecutive shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivationKey(pub u64);

impl fmt::Display for ActivationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared "some overlay is active" flag, used for scroll-lock and layering
/// coordination in the UI.
///
/// Reference-counted rather than a bare boolean: each controller increments
/// on activation and decrements exactly once on dismissal, so overlapping
/// effects cannot clear each other's mark. Injected into every controller
/// instead of living as a global.
#[derive(Clone, Default)]
pub struct OverlayMarker {
    engaged: Arc<AtomicU32>,
}

impl OverlayMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one overlay is showing.
    pub fn is_active(&self) -> bool {
        self.engaged.load(Ordering::SeqCst) > 0
    }

    fn engage(&self) {
        self.engaged.fetch_add(1, Ordering::SeqCst);
    }

    fn release(&self) {
        // Paired with engage by construction; the saturating check is only
        // observable if that pairing is broken.
        let prev = self.engaged.fetch_sub(1, Ordering::SeqCst);
        if prev == 0 {
            self.engaged.store(0, Ordering::SeqCst);
            tracing::warn!("overlay marker released while not engaged");
        }
    }
}

/// The randomized visual payload generated for one activation.
#[derive(Debug, Clone, Default)]
pub struct OverlayPayload {
    pub particles: Vec<ParticleSpec>,
    pub stars: Vec<StarSpec>,
}

impl OverlayPayload {
    fn generate(kind: OverlayKind, profile: ActivationProfile, origin: Origin) -> Self {
        let mut rng = rand::rng();
        match kind {
            OverlayKind::NightSky => Self {
                particles: Vec::new(),
                stars: particles::night_sky_stars(&mut rng, profile),
            },
            OverlayKind::BirdFlurry => Self {
                particles: particles::bird_flurry(&mut rng, origin, profile),
                stars: Vec::new(),
            },
            OverlayKind::LoveFlurry => Self {
                particles: particles::love_flurry(&mut rng, origin, profile),
                stars: Vec::new(),
            },
        }
    }
}

/// Handle to a live activation.
///
/// Holds the key, the timing the watchdog is running with, the generated
/// payload, and the profile it was generated for. [`Activation::dismissed`]
/// resolves once the activation has ended, on any path.
pub struct Activation {
    pub key: ActivationKey,
    pub timing: OverlayTiming,
    pub profile: ActivationProfile,
    pub payload: OverlayPayload,
    token: CancellationToken,
}

impl Activation {
    /// Resolves when the activation ends, whichever exit path wins.
    pub async fn dismissed(&self) {
        self.token.cancelled().await;
    }

    pub fn is_dismissed(&self) -> bool {
        self.token.is_cancelled()
    }
}

type DismissFn = Box<dyn FnOnce(DismissReason) + Send + 'static>;

struct ActiveState {
    key: ActivationKey,
    token: CancellationToken,
    on_dismiss: Option<DismissFn>,
}

enum State {
    Idle,
    Active(ActiveState),
}

struct Inner {
    state: State,
    next_key: u64,
}

/// Owns the show/hide lifecycle of one overlay effect.
///
/// Clone handles share state; any clone may dismiss. Callers that tear the
/// owning component down directly should call
/// `dismiss(DismissReason::Teardown)` so the marker and callback are
/// released on that path too.
#[derive(Clone)]
pub struct OverlayController {
    kind: OverlayKind,
    inner: Arc<Mutex<Inner>>,
    marker: OverlayMarker,
}

impl OverlayController {
    pub fn new(kind: OverlayKind, marker: OverlayMarker) -> Self {
        Self {
            kind,
            inner: Arc::new(Mutex::new(Inner {
                state: State::Idle,
                next_key: 1,
            })),
            marker,
        }
    }

    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        matches!(self.inner.lock().state, State::Active(_))
    }

    /// Key of the current activation, if any.
    pub fn current_key(&self) -> Option<ActivationKey> {
        match &self.inner.lock().state {
            State::Active(active) => Some(active.key),
            State::Idle => None,
        }
    }

    /// Begin a show with the standard timing table for this overlay kind.
    ///
    /// Returns `None` while already active: duplicate triggers are ignored,
    /// not queued, and the running activation keeps its key.
    pub fn activate(
        &self,
        profile: ActivationProfile,
        origin: Origin,
        on_dismiss: impl FnOnce(DismissReason) + Send + 'static,
    ) -> Option<Activation> {
        let timing = OverlayTiming::for_kind(self.kind, profile);
        self.activate_with(timing, profile, origin, on_dismiss)
    }

    /// Begin a show with caller-supplied timing.
    ///
    /// The failsafe still fires even if the primary deadline never does,
    /// which is also the seam tests use to simulate a suppressed primary
    /// timer.
    pub fn activate_with(
        &self,
        timing: OverlayTiming,
        profile: ActivationProfile,
        origin: Origin,
        on_dismiss: impl FnOnce(DismissReason) + Send + 'static,
    ) -> Option<Activation> {
        let (key, token) = {
            let mut inner = self.inner.lock();
            if let State::Active(active) = &inner.state {
                tracing::debug!(
                    overlay = %self.kind,
                    key = %active.key,
                    "activation ignored while already active"
                );
                return None;
            }
            let key = ActivationKey(inner.next_key);
            inner.next_key += 1;
            let token = CancellationToken::new();
            inner.state = State::Active(ActiveState {
                key,
                token: token.clone(),
                on_dismiss: Some(Box::new(on_dismiss)),
            });
            (key, token)
        };

        self.marker.engage();
        let payload = OverlayPayload::generate(self.kind, profile, origin);

        tracing::info!(
            overlay = %self.kind,
            key = %key,
            primary_ms = timing.primary.as_millis() as u64,
            failsafe_ms = timing.failsafe.as_millis() as u64,
            "overlay activated"
        );

        let watchdog = self.clone();
        let watchdog_token = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                // Checked first: a cancelled activation must never let a
                // deadline that became ready in the same turn fire instead.
                biased;
                _ = watchdog_token.cancelled() => {}
                _ = tokio::time::sleep(timing.primary) => {
                    watchdog.dismiss_current(key, DismissReason::PrimaryTimer);
                }
                _ = tokio::time::sleep(timing.failsafe) => {
                    watchdog.dismiss_current(key, DismissReason::FailsafeTimer);
                }
            }
        });

        Some(Activation {
            key,
            timing,
            profile,
            payload,
            token,
        })
    }

    /// End the current activation.
    ///
    /// First caller wins: the token is cancelled, the marker released, and
    /// the dismissal callback invoked exactly once. Subsequent calls are
    /// no-ops returning `false`.
    pub fn dismiss(&self, reason: DismissReason) -> bool {
        self.dismiss_inner(reason, None)
    }

    /// Dismiss only if `key` is still the current activation. Used by the
    /// watchdog so a stale deadline can never end a newer show.
    fn dismiss_current(&self, key: ActivationKey, reason: DismissReason) -> bool {
        self.dismiss_inner(reason, Some(key))
    }

    fn dismiss_inner(&self, reason: DismissReason, expected: Option<ActivationKey>) -> bool {
        let active = {
            let mut inner = self.inner.lock();
            let current = match &inner.state {
                State::Active(active) => expected.is_none() || expected == Some(active.key),
                State::Idle => false,
            };
            if !current {
                return false;
            }
            let State::Active(active) = std::mem::replace(&mut inner.state, State::Idle) else {
                return false;
            };
            active
        };

        // Cancel before running the callback so any racing timer observes
        // the cancellation within the same turn.
        active.token.cancel();
        self.marker.release();

        tracing::info!(
            overlay = %self.kind,
            key = %active.key,
            reason = %reason,
            "overlay dismissed"
        );

        if let Some(callback) = active.on_dismiss {
            callback(reason);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_refcounts_overlapping_engagements() {
        let marker = OverlayMarker::new();
        assert!(!marker.is_active());
        marker.engage();
        marker.engage();
        assert!(marker.is_active());
        marker.release();
        assert!(marker.is_active());
        marker.release();
        assert!(!marker.is_active());
    }

    #[test]
    fn test_dismiss_reason_labels() {
        assert_eq!(DismissReason::FailsafeTimer.as_str(), "failsafe");
        assert_eq!(DismissReason::Scroll.as_str(), "scroll");
        assert_eq!(OverlayKind::NightSky.as_str(), "night-sky");
    }

    #[test]
    fn test_dismiss_on_idle_controller_is_noop() {
        let controller = OverlayController::new(OverlayKind::NightSky, OverlayMarker::new());
        assert!(!controller.dismiss(DismissReason::Scroll));
        assert!(!controller.is_active());
        assert_eq!(controller.current_key(), None);
    }
}
