//! Slow crossfading montage of the unlocked photos.

use std::time::Duration;

use dioxus::prelude::*;
use keepsake_core::content::photos::PHOTOS;

/// How long each photo stays up.
const SLIDE_MS: u64 = 2600;

#[component]
pub fn PhotoMontage(unlocked: usize, on_done: EventHandler<()>) -> Element {
    let mut current = use_signal(|| 0usize);

    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_millis(SLIDE_MS)).await;
            current.set(current() + 1);
        }
    });

    let photo = (unlocked > 0).then(|| PHOTOS[current() % unlocked]);

    rsx! {
        main { class: "page montage",
            h1 { class: "page-title", "Us, so far" }
            if let Some(photo) = photo {
                img { key: "{photo.id}", src: "{photo.src}", alt: "{photo.alt}" }
                if let Some(caption) = photo.caption {
                    p { class: "montage-caption", "{caption}" }
                }
            } else {
                p { class: "montage-caption", "open a letter to light up the first memory" }
            }
            button { class: "cover-enter", onclick: move |_| on_done.call(()), "back to the stars" }
        }
    }
}
