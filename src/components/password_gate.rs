//! The riddle gate standing between the front door and the timeline.
//!
//! Wrong guesses get a rotating micro-note and a pair of floating emojis,
//! throttled by the rotation state in the core crate. The right answer plays
//! a short unlock animation before handing over.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use keepsake_core::gate::{self, WrongGuessEffect, WrongNoteRotation, RIDDLE, UNLOCK_DELAY};

/// How long a wrong-guess effect stays on screen.
const WRONG_EFFECT_MS: u64 = 1800;

#[component]
pub fn PasswordGate(on_unlock: EventHandler<()>) -> Element {
    let mut guess = use_signal(String::new);
    let mut wrong = use_signal(|| None::<WrongGuessEffect>);
    let mut effect_seq = use_signal(|| 0u64);
    let mut unlocking = use_signal(|| false);
    let mut rotation = use_signal(WrongNoteRotation::new);

    let mut submit = move || {
        if unlocking() {
            return;
        }
        let answer = guess();
        if gate::verify_answer(&answer) {
            tracing::info!("gate unlocked");
            unlocking.set(true);
            spawn(async move {
                tokio::time::sleep(UNLOCK_DELAY).await;
                on_unlock.call(());
            });
            return;
        }

        // The rotation swallows rapid resubmissions
        let effect = rotation.with_mut(|r| r.pick(&mut rand::rng(), Instant::now()));
        if let Some(effect) = effect {
            wrong.set(Some(effect));
            let seq = effect_seq() + 1;
            effect_seq.set(seq);
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(WRONG_EFFECT_MS)).await;
                if effect_seq() == seq {
                    wrong.set(None);
                }
            });
        }
    };

    rsx! {
        main {
            class: if unlocking() { "page gate unlocking" } else { "page gate" },

            h1 { class: "page-title", "Keepsake" }
            p { class: "gate-riddle", "{RIDDLE}" }

            input {
                class: "gate-input",
                r#type: "text",
                placeholder: "your answer…",
                value: "{guess}",
                autofocus: true,
                oninput: move |evt| guess.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        submit();
                    }
                },
            }
            button { class: "gate-submit", onclick: move |_| submit(), "open" }

            if let Some(effect) = wrong() {
                p { class: "gate-wrong-note", "{effect.note}" }
                span {
                    class: "gate-wrong-emoji",
                    style: "left: 32%; top: 56%;",
                    "{effect.emojis[0]}"
                }
                span {
                    class: "gate-wrong-emoji",
                    style: "left: 62%; top: 53%;",
                    "{effect.emojis[1]}"
                }
            } else {
                p { class: "gate-wrong-note" }
            }

            if unlocking() {
                for i in 0..6u64 {
                    {
                        let left = 18 + i * 13;
                        let delay = i * 120;
                        rsx! {
                            span {
                                key: "{i}",
                                class: "gate-unlock-heart",
                                style: "left: {left}%; top: 62%; animation-delay: {delay}ms;",
                                "💛"
                            }
                        }
                    }
                }
            }
        }
    }
}
