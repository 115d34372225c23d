//! The night sky overlay: a darkened sky, a twinkling star field, and the
//! initials constellation drawn over it.

use dioxus::prelude::*;
use keepsake_core::{particles, Origin, OverlayKind};

use super::{dismiss_on_escape, dismiss_on_scroll, use_activation, use_overlay_controller};

#[component]
pub fn NightSkyOverlay(visible: Signal<bool>, origin: ReadOnlySignal<Origin>) -> Element {
    let controller = use_overlay_controller(OverlayKind::NightSky);
    let shown = use_activation(controller.clone(), visible, origin);

    let Some((payload, profile)) = shown() else {
        return rsx! {};
    };
    let figure = particles::constellation(profile);

    rsx! {
        div {
            class: "overlay night-sky",
            tabindex: "0",
            autofocus: true,
            onkeydown: dismiss_on_escape(&controller),
            onwheel: dismiss_on_scroll(&controller),

            for (i, star) in payload.stars.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "night-sky-star",
                    style: "left: {star.x}%; top: {star.y}%; \
                            width: {star.size}px; height: {star.size}px; \
                            animation-delay: {star.delay_ms}ms;",
                }
            }

            svg {
                class: "constellation",
                view_box: "0 0 100 100",
                preserve_aspect_ratio: "xMidYMid meet",
                for (i, line) in figure.lines.iter().enumerate() {
                    line {
                        key: "l{i}",
                        x1: "{line.0}",
                        y1: "{line.1}",
                        x2: "{line.2}",
                        y2: "{line.3}",
                        stroke_width: "{figure.stroke_width}",
                    }
                }
                for (i, point) in figure.points.iter().enumerate() {
                    circle {
                        key: "p{i}",
                        cx: "{point.0}",
                        cy: "{point.1}",
                        r: "{figure.star_radius}",
                    }
                }
            }
        }
    }
}
