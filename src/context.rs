//! Shared app context: the store, the gate flag, and overlay coordination.
//!
//! Provides the persistence layer and a handful of small flags to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let store = use_store();
//! let unlocked = use_unlocked();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use keepsake_core::{
    ActivationProfile, DeviceClass, MotionPreference, Origin, OverlayMarker, Store,
};
use tokio::sync::RwLock;

/// Shared store type for context.
///
/// Wrapped in Arc<RwLock<>> so components can read concurrently and the
/// startup task can slot the opened database in once it is ready.
pub type SharedStore = Arc<RwLock<Option<Store>>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the persistence layer from context.
pub fn use_store() -> Signal<SharedStore> {
    use_context::<Signal<SharedStore>>()
}

/// Whether the database has been opened yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StoreReady(pub bool);

pub fn use_store_ready() -> Signal<StoreReady> {
    use_context::<Signal<StoreReady>>()
}

/// Whether the riddle gate has been passed this session.
///
/// Deliberately not persisted: the gate is part of the experience and greets
/// her again on every launch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GateUnlocked(pub bool);

pub fn use_unlocked() -> Signal<GateUnlocked> {
    use_context::<Signal<GateUnlocked>>()
}

/// Whether the night sky has already played this session. The timeline
/// triggers it from today's card at most once per launch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NightSkySeen(pub bool);

pub fn use_night_sky_seen() -> Signal<NightSkySeen> {
    use_context::<Signal<NightSkySeen>>()
}

/// Reactive mirror of the overlay marker, for scroll-locking the page while
/// a full-screen effect is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayActive(pub bool);

pub fn use_overlay_active() -> Signal<OverlayActive> {
    use_context::<Signal<OverlayActive>>()
}

/// Hook to access the shared overlay marker.
///
/// One marker per app; every overlay controller engages and releases it so
/// overlapping effects coordinate instead of clobbering each other.
pub fn use_overlay_marker() -> OverlayMarker {
    use_context::<OverlayMarker>()
}

/// Snapshot the host environment for an overlay activation.
///
/// Read once per trigger, never subscribed: a running show keeps the profile
/// it started with even if the window is resized mid-flight.
pub fn activation_profile() -> ActivationProfile {
    let window = dioxus::desktop::window();
    let width = window.inner_size().width as f64 / window.scale_factor();
    let motion = if crate::reduced_motion_requested() {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    };
    ActivationProfile::new(DeviceClass::from_viewport_width(width), motion)
}

/// Center of the window in logical pixels, the fallback flurry origin.
pub fn viewport_center() -> Origin {
    let window = dioxus::desktop::window();
    let size = window.inner_size();
    let scale = window.scale_factor();
    Origin::new(
        size.width as f64 / scale / 2.0,
        size.height as f64 / scale / 2.0,
    )
}
