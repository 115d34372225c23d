//! Keepsake Core Library
//!
//! Headless domain logic for the Keepsake gift app: the self-terminating
//! overlay lifecycle, particle payload generation, the riddle gate, the
//! timeline reveal rules, and the persisted anniversary unlock state.
//!
//! ## Overview
//!
//! Keepsake is a password-gated, date-aware romantic gift application: a
//! timeline of time-locked notes, decorative full-screen overlays, a love
//! meter, and a constellation of sealed letters. Everything interactive in
//! the UI delegates to this crate so the behavior is testable without a
//! window.
//!
//! ## Core Principles
//!
//! - **Always dismissable**: an overlay, once shown, is structurally
//!   guaranteed to be removed - dual deadlines plus cancellation signals,
//!   first to fire wins.
//! - **Local-only**: no server, no network; the only persistence is a small
//!   redb database standing in for the original per-browser store.
//!
//! ## Quick Start
//!
//! ```ignore
//! use keepsake_core::{
//!     ActivationProfile, DismissReason, Origin, OverlayController,
//!     OverlayKind, OverlayMarker,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let marker = OverlayMarker::new();
//!     let night_sky = OverlayController::new(OverlayKind::NightSky, marker.clone());
//!
//!     let activation = night_sky
//!         .activate(ActivationProfile::desktop(), Origin::new(640.0, 400.0), |reason| {
//!             println!("dismissed: {reason}");
//!         })
//!         .expect("idle controller accepts activation");
//!
//!     // Ends by primary timer, failsafe, or any cancellation signal.
//!     activation.dismissed().await;
//!     assert!(!marker.is_active());
//! }
//! ```

pub mod anniversary;
pub mod content;
pub mod error;
pub mod gate;
pub mod overlay;
pub mod particles;
pub mod profile;
pub mod storage;
pub mod timeline;

// Re-exports
pub use anniversary::AnniversaryState;
pub use error::{KeepsakeError, KeepsakeResult};
pub use gate::{WrongGuessEffect, WrongNoteRotation};
pub use overlay::{
    Activation, ActivationKey, DismissReason, OverlayController, OverlayKind, OverlayMarker,
    OverlayPayload,
};
pub use particles::{Origin, ParticleKind, ParticleSpec, StarSpec};
pub use profile::{ActivationProfile, DeviceClass, MotionPreference, OverlayTiming};
pub use storage::Store;
pub use timeline::{DayNote, Media, MediaKind};
