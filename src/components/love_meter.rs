//! The love meter: fills as the month's notes unlock.

use dioxus::prelude::*;

#[component]
pub fn LoveMeter(percent: u8) -> Element {
    rsx! {
        div { class: "love-meter",
            div { class: "love-meter-label",
                span { "our story so far" }
                span { "{percent}%" }
            }
            div { class: "love-meter-track",
                div { class: "love-meter-fill", style: "width: {percent}%;" }
            }
        }
    }
}
