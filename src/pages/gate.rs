//! The front door. Everything behind it waits for the riddle.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::PasswordGate;
use crate::context::{use_unlocked, GateUnlocked};

#[component]
pub fn GatePage() -> Element {
    let navigator = use_navigator();
    let mut unlocked = use_unlocked();

    // Returning within the same session skips the gate
    use_effect(move || {
        if unlocked().0 {
            navigator.replace(Route::TimelinePage {});
        }
    });

    rsx! {
        PasswordGate {
            on_unlock: move |_| {
                unlocked.set(GateUnlocked(true));
                navigator.push(Route::TimelinePage {});
            },
        }
    }
}
