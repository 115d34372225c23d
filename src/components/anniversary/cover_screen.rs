//! Cover screen for the anniversary experience.

use dioxus::prelude::*;

#[component]
pub fn CoverScreen(
    heartbeat: bool,
    muted: bool,
    on_enter: EventHandler<()>,
    on_toggle_heartbeat: EventHandler<()>,
    on_toggle_mute: EventHandler<()>,
) -> Element {
    rsx! {
        main { class: "page cover-screen",
            div {
                class: if heartbeat { "cover-heart beating" } else { "cover-heart" },
                "💛"
            }
            h1 { class: "page-title", "Happy Anniversary, my love" }
            p { class: "subtitle", "five letters are waiting in the stars" }

            button { class: "cover-enter", onclick: move |_| on_enter.call(()), "look up" }

            div { class: "cover-toggles",
                button {
                    class: if heartbeat { "cover-toggle on" } else { "cover-toggle" },
                    onclick: move |_| on_toggle_heartbeat.call(()),
                    if heartbeat { "heartbeat on" } else { "heartbeat off" }
                }
                button {
                    class: if muted { "cover-toggle" } else { "cover-toggle on" },
                    onclick: move |_| on_toggle_mute.call(()),
                    if muted { "sound off" } else { "sound on" }
                }
            }
        }
    }
}
