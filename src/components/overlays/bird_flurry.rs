//! The bird flurry: birds scatter from the tapped element while hearts and
//! phrases drift upward.

use dioxus::prelude::*;
use keepsake_core::{Origin, OverlayKind};

use super::{dismiss_on_escape, dismiss_on_scroll, use_activation, use_overlay_controller, Particles};

#[component]
pub fn BirdFlurryOverlay(visible: Signal<bool>, origin: ReadOnlySignal<Origin>) -> Element {
    let controller = use_overlay_controller(OverlayKind::BirdFlurry);
    let shown = use_activation(controller.clone(), visible, origin);

    let Some((payload, _)) = shown() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "overlay flurry",
            tabindex: "0",
            autofocus: true,
            onkeydown: dismiss_on_escape(&controller),
            onwheel: dismiss_on_scroll(&controller),
            Particles { particles: payload.particles.clone() }
        }
    }
}
