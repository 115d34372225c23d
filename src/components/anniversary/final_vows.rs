//! The vows, revealed one at a time, ending on the final note.

use dioxus::prelude::*;
use keepsake_core::content::letters::{FINAL_NOTE, VOWS};

#[component]
pub fn FinalVows(on_complete: EventHandler<()>) -> Element {
    let mut step = use_signal(|| 0usize);
    let vow = VOWS.get(step()).copied();

    rsx! {
        main { class: "page vows",
            if let Some(vow) = vow {
                p { key: "{step}", class: "vow-text", "{vow}" }
                button {
                    class: "cover-enter",
                    onclick: move |_| step += 1,
                    "and more…"
                }
            } else {
                p { class: "vow-text vow-final", "{FINAL_NOTE}" }
                button {
                    class: "cover-enter",
                    onclick: move |_| on_complete.call(()),
                    "always"
                }
            }
        }
    }
}
