//! Modal showing one opened letter, with prev/next paging through the set.

use dioxus::prelude::*;
use keepsake_core::content::letters::{LETTERS, LETTER_COUNT};
use keepsake_core::content::photos::PHOTOS_PER_LETTER;

#[component]
pub fn LetterModal(
    index: usize,
    on_close: EventHandler<()>,
    on_navigate: EventHandler<usize>,
) -> Element {
    let Some(letter) = LETTERS.get(index) else {
        return rsx! {};
    };

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                h2 { class: "modal-title", "{letter.title}" }
                div { class: "modal-body",
                    for (i, paragraph) in letter.body.iter().enumerate() {
                        p { key: "{i}", "{paragraph}" }
                    }
                }
                p { class: "modal-footnote",
                    "opening this letter unlocked {PHOTOS_PER_LETTER} photos 📸"
                }

                div { class: "modal-nav",
                    button {
                        class: "map-action",
                        disabled: index == 0,
                        onclick: move |_| {
                            if index > 0 {
                                on_navigate.call(index - 1);
                            }
                        },
                        "← previous"
                    }
                    button {
                        class: "map-action",
                        disabled: index + 1 >= LETTER_COUNT,
                        onclick: move |_| {
                            if index + 1 < LETTER_COUNT {
                                on_navigate.call(index + 1);
                            }
                        },
                        "next →"
                    }
                }
                button { class: "modal-close", onclick: move |_| on_close.call(()), "keep it close" }
            }
        }
    }
}
