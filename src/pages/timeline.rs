//! The timeline: one note per October morning, the love meter, and the
//! doorway to the anniversary once the birthday card is out.

use std::time::Duration;

use dioxus::prelude::*;
use keepsake_core::content::notes::NOTES;
use keepsake_core::timeline::{self, LOCK_TOAST_MS};
use keepsake_core::Origin;
use rand::Rng;

use crate::app::Route;
use crate::components::overlays::{BirdFlurryOverlay, NightSkyOverlay};
use crate::components::{LoveMeter, NoteCard};
use crate::context::{
    use_night_sky_seen, use_overlay_active, use_unlocked, viewport_center, NightSkySeen,
};

const CONFETTI_GLYPHS: [&str; 4] = ["🎉", "💛", "🌸", "✨"];

#[component]
pub fn TimelinePage() -> Element {
    let navigator = use_navigator();
    let unlocked = use_unlocked();
    let overlay_active = use_overlay_active();

    // The gate is the only way in
    use_effect(move || {
        if !unlocked().0 {
            navigator.replace(Route::GatePage {});
        }
    });

    let mut toast = use_signal(|| None::<String>);
    let mut toast_seq = use_signal(|| 0u64);
    let mut night_sky_visible = use_signal(|| false);
    let mut night_sky_seen = use_night_sky_seen();
    let night_origin = use_signal(viewport_center);
    let mut bird_visible = use_signal(|| false);
    let mut bird_origin = use_signal(viewport_center);

    let today = timeline::today_note_index(NOTES);
    let percent = timeline::love_meter_percent(NOTES);
    let milestone = timeline::milestone_visible(NOTES);

    // Confetti layout for the milestone, fixed for the component's lifetime
    let confetti: Vec<(f64, u64, u64, &'static str)> = use_hook(|| {
        if !milestone {
            return Vec::new();
        }
        let mut rng = rand::rng();
        (0..36)
            .map(|_| {
                (
                    rng.random::<f64>() * 100.0,
                    rng.random_range(0..1200u64),
                    2600 + rng.random_range(0..1800u64),
                    CONFETTI_GLYPHS[rng.random_range(0..CONFETTI_GLYPHS.len())],
                )
            })
            .collect()
    });

    let on_tap = move |(index, x, y): (usize, f64, f64)| {
        let Some(note) = NOTES.get(index) else { return };
        if timeline::effective_blurred(NOTES, index) {
            toast.set(Some(timeline::lock_toast(note.date)));
            let seq = toast_seq() + 1;
            toast_seq.set(seq);
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(LOCK_TOAST_MS)).await;
                if toast_seq() == seq {
                    toast.set(None);
                }
            });
        } else if Some(index) == today && !night_sky_seen().0 {
            // Once per session; after that the card taps like any other
            night_sky_seen.set(NightSkySeen(true));
            night_sky_visible.set(true);
        } else {
            bird_origin.set(Origin::new(x, y));
            bird_visible.set(true);
        }
    };

    rsx! {
        main {
            class: if overlay_active().0 { "page no-scroll" } else { "page" },

            h1 { class: "page-title", "Our October" }
            p { class: "subtitle", "one note for every morning until your day" }

            LoveMeter { percent }

            if milestone {
                button {
                    class: "anniversary-link",
                    onclick: move |_| { navigator.push(Route::AnniversaryPage {}); },
                    "💛 something else is waiting for you"
                }
                for (i, piece) in confetti.iter().enumerate() {
                    span {
                        key: "{i}",
                        class: "confetti-piece",
                        style: "left: {piece.0}%; animation-delay: {piece.1}ms; \
                                animation-duration: {piece.2}ms;",
                        "{piece.3}"
                    }
                }
            }

            div { class: "timeline",
                for (i, note) in NOTES.iter().enumerate() {
                    NoteCard {
                        key: "{note.date}",
                        index: i,
                        note: *note,
                        locked: timeline::effective_blurred(NOTES, i),
                        is_today: Some(i) == today,
                        on_tap,
                    }
                }
            }

            if let Some(message) = toast() {
                div { class: "toast", "{message}" }
            }
        }

        NightSkyOverlay { visible: night_sky_visible, origin: night_origin }
        BirdFlurryOverlay { visible: bird_visible, origin: bird_origin }
    }
}
