//! Full-screen decorative overlays.
//!
//! Each overlay component owns an [`OverlayController`] for its lifetime and
//! drives it from a `visible` signal handed down by the parent. The
//! controller guarantees the show always ends; the component's job is wiring
//! the cancellation sources (Escape, scroll, window hidden, teardown) and
//! rendering the generated payload.

mod bird_flurry;
mod love_flurry;
mod night_sky;

pub use bird_flurry::BirdFlurryOverlay;
pub use love_flurry::LoveFlurryOverlay;
pub use night_sky::NightSkyOverlay;

use dioxus::desktop::tao::event::{Event as WryEvent, WindowEvent};
use dioxus::desktop::use_wry_event_handler;
use dioxus::prelude::*;
use keepsake_core::{
    ActivationProfile, DismissReason, Origin, OverlayController, OverlayKind, OverlayPayload,
};

use crate::context::{
    activation_profile, use_overlay_active, use_overlay_marker, OverlayActive,
};

/// One controller per component instance, wired to the shared marker, the
/// window-hidden signal, and the teardown path.
fn use_overlay_controller(kind: OverlayKind) -> OverlayController {
    let marker = use_overlay_marker();
    let controller = use_hook(move || OverlayController::new(kind, marker));

    // Losing window focus counts as the page going hidden.
    {
        let controller = controller.clone();
        use_wry_event_handler(move |event, _| {
            if let WryEvent::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } = event
            {
                controller.dismiss(DismissReason::Hidden);
            }
        });
    }

    // Unmount (navigation included) must release the marker and fire the
    // callback like every other exit.
    {
        let controller = controller.clone();
        use_drop(move || {
            controller.dismiss(DismissReason::Teardown);
        });
    }

    controller
}

/// Drive the controller from the `visible` signal.
///
/// Returns the payload of the running activation, or `None` while idle. The
/// spawned waiter clears `visible` once the controller reports the show
/// over, whichever exit path won.
fn use_activation(
    controller: OverlayController,
    mut visible: Signal<bool>,
    origin: ReadOnlySignal<Origin>,
) -> Signal<Option<(OverlayPayload, ActivationProfile)>> {
    let marker = use_overlay_marker();
    let mut shown = use_signal(|| None);
    let mut overlay_active = use_overlay_active();

    use_effect(move || {
        if visible() {
            let kind = controller.kind();
            let Some(activation) =
                controller.activate(activation_profile(), origin(), move |reason| {
                    tracing::debug!(overlay = %kind, reason = %reason, "overlay ended");
                })
            else {
                return;
            };
            shown.set(Some((activation.payload.clone(), activation.profile)));
            overlay_active.set(OverlayActive(true));

            let marker = marker.clone();
            spawn(async move {
                activation.dismissed().await;
                visible.set(false);
                shown.set(None);
                overlay_active.set(OverlayActive(marker.is_active()));
            });
        } else {
            controller.dismiss(DismissReason::ParentHidden);
        }
    });

    shown
}

/// Shared dismissal handlers for the overlay root element: Escape and any
/// scroll both end the show immediately.
fn dismiss_on_escape(controller: &OverlayController) -> impl FnMut(KeyboardEvent) {
    let controller = controller.clone();
    move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            controller.dismiss(DismissReason::DismissKey);
        }
    }
}

fn dismiss_on_scroll(controller: &OverlayController) -> impl FnMut(WheelEvent) {
    let controller = controller.clone();
    move |_| {
        controller.dismiss(DismissReason::Scroll);
    }
}

/// Renders a flurry payload. Every particle carries its travel vector and
/// timing as CSS custom properties; the keyframes live in the global styles.
#[component]
fn Particles(particles: Vec<keepsake_core::ParticleSpec>) -> Element {
    rsx! {
        for (i, p) in particles.iter().enumerate() {
            {
                let (end_x, end_y) = p.end_position();
                let dx = end_x - p.x;
                let dy = end_y - p.y;
                let class = match p.kind {
                    keepsake_core::ParticleKind::Bird => "particle bird",
                    keepsake_core::ParticleKind::Heart => "particle heart",
                    keepsake_core::ParticleKind::Text => "particle text",
                };
                let glyph = match p.kind {
                    keepsake_core::ParticleKind::Bird => "🕊️",
                    keepsake_core::ParticleKind::Heart => "♥",
                    keepsake_core::ParticleKind::Text => p.text.unwrap_or(""),
                };
                rsx! {
                    span {
                        key: "{i}",
                        class: "{class}",
                        style: "left: {p.x}px; top: {p.y}px; color: {p.color}; \
                                --dx: {dx}px; --dy: {dy}px; --scale: {p.scale}; --rot: {p.rotation}deg; \
                                animation-delay: {p.delay_ms}ms; animation-duration: {p.duration_ms}ms;",
                        "{glyph}"
                    }
                }
            }
        }
    }
}
