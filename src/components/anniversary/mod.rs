//! The anniversary experience: a cover screen, a constellation of five
//! sealed letters, the vows, and a photo montage.
//!
//! Progress (opened letters, unlocked photos, vows) persists through the
//! store so she can return to it any day after.

mod constellation_map;
mod cover_screen;
mod final_vows;
mod gallery_modal;
mod letter_modal;
mod photo_montage;

pub use constellation_map::ConstellationMap;
pub use cover_screen::CoverScreen;
pub use final_vows::FinalVows;
pub use gallery_modal::GalleryModal;
pub use letter_modal::LetterModal;
pub use photo_montage::PhotoMontage;

use dioxus::prelude::*;
use keepsake_core::{AnniversaryState, Origin};

use crate::components::overlays::LoveFlurryOverlay;
use crate::context::{use_store, use_store_ready};

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Cover,
    Map,
    Vows,
    Montage,
}

#[component]
pub fn AnniversaryExperience() -> Element {
    let store = use_store();
    let store_ready = use_store_ready();
    let mut state = use_signal(|| None::<AnniversaryState>);
    let mut phase = use_signal(|| Phase::Cover);
    let mut open_letter = use_signal(|| None::<usize>);
    let mut gallery_open = use_signal(|| false);
    let love_visible = use_signal(|| false);
    let love_origin = use_signal(|| Origin::new(0.0, 0.0));

    // Load persisted progress once the store is ready
    use_effect(move || {
        if store_ready().0 {
            spawn(async move {
                let shared = store();
                let guard = shared.read().await;
                if let Some(ref opened) = *guard {
                    match opened.load_anniversary_state() {
                        Ok(loaded) => state.set(Some(loaded)),
                        Err(e) => tracing::error!("Failed to load anniversary state: {}", e),
                    }
                }
            });
        }
    });

    let persist = move |snapshot: AnniversaryState| {
        spawn(async move {
            let shared = store();
            let guard = shared.read().await;
            if let Some(ref opened) = *guard {
                if let Err(e) = opened.save_anniversary_state(&snapshot) {
                    tracing::error!("Failed to save anniversary state: {}", e);
                }
            }
        });
    };

    let Some(current) = state() else {
        return rsx! {
            main { class: "page cover-screen",
                p { class: "subtitle", "lighting the candles…" }
            }
        };
    };

    let mut love_visible = love_visible;
    let mut love_origin = love_origin;
    let on_open = move |(index, x, y): (usize, f64, f64)| {
        let Some(mut updated) = state() else { return };
        if updated.open_letter(index) {
            state.set(Some(updated.clone()));
            persist(updated);
        }
        open_letter.set(Some(index));
        love_origin.set(Origin::new(x, y));
        love_visible.set(true);
    };

    rsx! {
        match phase() {
            Phase::Cover => rsx! {
                CoverScreen {
                    heartbeat: current.heartbeat_mode,
                    muted: current.audio_muted,
                    on_enter: move |_| phase.set(Phase::Map),
                    on_toggle_heartbeat: move |_| {
                        let Some(mut updated) = state() else { return };
                        updated.set_heartbeat_mode(!updated.heartbeat_mode);
                        state.set(Some(updated.clone()));
                        persist(updated);
                    },
                    on_toggle_mute: move |_| {
                        let Some(mut updated) = state() else { return };
                        updated.set_audio_settings(!updated.audio_muted, updated.audio_volume);
                        state.set(Some(updated.clone()));
                        persist(updated);
                    },
                }
            },
            Phase::Map => rsx! {
                main { class: "page",
                    ConstellationMap {
                        opened: current.opened_letters.to_vec(),
                        unlocked_photos: current.unlocked_photo_count,
                        on_open: on_open,
                        on_gallery: move |_| gallery_open.set(true),
                        on_vows: move |_| phase.set(Phase::Vows),
                    }
                }
                if let Some(index) = open_letter() {
                    LetterModal {
                        index,
                        on_close: move |_| open_letter.set(None),
                        on_navigate: move |next: usize| {
                            // Paging into a sealed letter opens it too
                            let Some(mut updated) = state() else { return };
                            if updated.open_letter(next) {
                                state.set(Some(updated.clone()));
                                persist(updated);
                            }
                            open_letter.set(Some(next));
                        },
                    }
                }
                if gallery_open() {
                    GalleryModal {
                        unlocked: current.unlocked_photo_count,
                        on_close: move |_| gallery_open.set(false),
                    }
                }
                LoveFlurryOverlay { visible: love_visible, origin: love_origin }
            },
            Phase::Vows => rsx! {
                FinalVows {
                    on_complete: move |_| {
                        let Some(mut updated) = state() else { return };
                        updated.complete_vows();
                        state.set(Some(updated.clone()));
                        persist(updated);
                        phase.set(Phase::Montage);
                    },
                }
            },
            Phase::Montage => rsx! {
                PhotoMontage {
                    unlocked: current.unlocked_photo_count,
                    on_done: move |_| {
                        let Some(mut updated) = state() else { return };
                        if !updated.has_seen_montage {
                            updated.set_has_seen_montage(true);
                            state.set(Some(updated.clone()));
                            persist(updated);
                        }
                        phase.set(Phase::Map);
                    },
                }
            },
        }
    }
}
