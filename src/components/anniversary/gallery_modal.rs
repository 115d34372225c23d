//! The photo gallery, unlocked two photos at a time.

use dioxus::prelude::*;
use keepsake_core::content::photos::PHOTOS;

#[component]
pub fn GalleryModal(unlocked: usize, on_close: EventHandler<()>) -> Element {
    let total = PHOTOS.len();

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                h2 { class: "modal-title", "Our gallery" }
                p { class: "modal-footnote",
                    "{unlocked} of {total} revealed. Open more letters for the rest."
                }
                div { class: "gallery-grid",
                    for photo in PHOTOS.iter().take(unlocked) {
                        div { key: "{photo.id}", class: "gallery-photo",
                            img { src: "{photo.src}", alt: "{photo.alt}" }
                            if let Some(caption) = photo.caption {
                                p { class: "gallery-caption", "{caption}" }
                            }
                        }
                    }
                    for photo in PHOTOS.iter().skip(unlocked) {
                        div { key: "{photo.id}", class: "gallery-locked", "🔒" }
                    }
                }
                button { class: "modal-close", onclick: move |_| on_close.call(()), "close" }
            }
        }
    }
}
