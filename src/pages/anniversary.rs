//! The anniversary page, reachable only after the milestone card reveals.

use dioxus::prelude::*;
use keepsake_core::content::notes::NOTES;
use keepsake_core::timeline;

use crate::app::Route;
use crate::components::anniversary::AnniversaryExperience;
use crate::context::use_unlocked;

#[component]
pub fn AnniversaryPage() -> Element {
    let navigator = use_navigator();
    let unlocked = use_unlocked();

    use_effect(move || {
        if !unlocked().0 {
            navigator.replace(Route::GatePage {});
        } else if !timeline::milestone_visible(NOTES) {
            // Deep-linking ahead of the birthday lands back on the timeline
            navigator.replace(Route::TimelinePage {});
        }
    });

    rsx! {
        AnniversaryExperience {}
    }
}
