//! Device and motion profiles plus the per-overlay timing tables.
//!
//! Every overlay activation reads the host environment once (viewport width,
//! motion preference) and derives its particle counts and timer durations
//! from the resulting [`ActivationProfile`]. The three overlay effects carry
//! deliberately different durations; all of the constants live here so the
//! values can be compared side by side.

use std::time::Duration;

use crate::overlay::OverlayKind;

/// Viewport width below which the mobile profile applies (logical pixels).
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Minimum gap between the primary and failsafe deadlines.
pub const FAILSAFE_MARGIN: Duration = Duration::from_millis(1500);

/// Coarse device classification, derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width in logical pixels.
    pub fn from_viewport_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Host-reported accessibility setting requesting reduced animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPreference {
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn is_reduced(self) -> bool {
        matches!(self, MotionPreference::Reduced)
    }
}

/// Snapshot of the host environment taken at activation time.
///
/// Not subscribed to reactively: a running activation keeps the profile it
/// was created with even if the window is resized mid-show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationProfile {
    pub device: DeviceClass,
    pub motion: MotionPreference,
}

impl ActivationProfile {
    pub fn new(device: DeviceClass, motion: MotionPreference) -> Self {
        Self { device, motion }
    }

    /// Desktop, full motion. The common case and the test default.
    pub fn desktop() -> Self {
        Self::new(DeviceClass::Desktop, MotionPreference::Full)
    }

    pub fn is_mobile(&self) -> bool {
        self.device == DeviceClass::Mobile
    }

    pub fn is_reduced(&self) -> bool {
        self.motion.is_reduced()
    }
}

/// The two deadlines governing an activation.
///
/// The primary deadline is the expected "happy path" dismissal. The failsafe
/// is strictly later by at least [`FAILSAFE_MARGIN`] and exists so a
/// throttled or suspended primary timer can never leave the overlay stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTiming {
    pub primary: Duration,
    pub failsafe: Duration,
}

impl OverlayTiming {
    /// Build a timing pair, clamping the failsafe so the margin invariant
    /// holds regardless of the inputs.
    pub fn new(primary: Duration, failsafe_floor: Duration) -> Self {
        let failsafe = failsafe_floor.max(primary + FAILSAFE_MARGIN);
        Self { primary, failsafe }
    }

    /// Timing table for a given overlay effect and activation profile.
    pub fn for_kind(kind: OverlayKind, profile: ActivationProfile) -> Self {
        let (reduced_ms, mobile_ms, desktop_ms, floor_ms) = match kind {
            OverlayKind::NightSky => (2000, 3200, 3800, 5000),
            OverlayKind::BirdFlurry => (700, 2000, 2400, 4500),
            OverlayKind::LoveFlurry => (700, 1900, 2400, 4500),
        };
        let primary_ms = if profile.is_reduced() {
            reduced_ms
        } else if profile.is_mobile() {
            mobile_ms
        } else {
            desktop_ms
        };
        Self::new(
            Duration::from_millis(primary_ms),
            Duration::from_millis(floor_ms),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_class_breakpoint() {
        assert_eq!(DeviceClass::from_viewport_width(320.0), DeviceClass::Mobile);
        assert_eq!(
            DeviceClass::from_viewport_width(767.9),
            DeviceClass::Mobile
        );
        assert_eq!(
            DeviceClass::from_viewport_width(768.0),
            DeviceClass::Desktop
        );
        assert_eq!(
            DeviceClass::from_viewport_width(1920.0),
            DeviceClass::Desktop
        );
    }

    #[test]
    fn test_night_sky_timings_match_documented_durations() {
        let desktop = OverlayTiming::for_kind(OverlayKind::NightSky, ActivationProfile::desktop());
        assert_eq!(desktop.primary, Duration::from_millis(3800));
        assert_eq!(desktop.failsafe, Duration::from_millis(5300));

        let mobile = OverlayTiming::for_kind(
            OverlayKind::NightSky,
            ActivationProfile::new(DeviceClass::Mobile, MotionPreference::Full),
        );
        assert_eq!(mobile.primary, Duration::from_millis(3200));
        // 3200 + 1500 < 5000, so the floor wins
        assert_eq!(mobile.failsafe, Duration::from_millis(5000));

        let reduced = OverlayTiming::for_kind(
            OverlayKind::NightSky,
            ActivationProfile::new(DeviceClass::Desktop, MotionPreference::Reduced),
        );
        assert_eq!(reduced.primary, Duration::from_millis(2000));
        assert_eq!(reduced.failsafe, Duration::from_millis(5000));
    }

    #[test]
    fn test_flurry_floor_dominates_every_profile() {
        for kind in [OverlayKind::BirdFlurry, OverlayKind::LoveFlurry] {
            for device in [DeviceClass::Mobile, DeviceClass::Desktop] {
                for motion in [MotionPreference::Full, MotionPreference::Reduced] {
                    let t = OverlayTiming::for_kind(kind, ActivationProfile::new(device, motion));
                    assert_eq!(t.failsafe, Duration::from_millis(4500));
                }
            }
        }
    }

    #[test]
    fn test_margin_clamp_on_oversized_primary() {
        let t = OverlayTiming::new(Duration::from_secs(10), Duration::from_millis(4500));
        assert_eq!(t.failsafe, Duration::from_secs(10) + FAILSAFE_MARGIN);
    }
}
