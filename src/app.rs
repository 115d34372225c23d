use std::sync::Arc;

use dioxus::prelude::*;
use keepsake_core::{OverlayMarker, Store};
use tokio::sync::RwLock;

use crate::context::{
    get_data_dir, GateUnlocked, NightSkySeen, OverlayActive, SharedStore, StoreReady,
};
use crate::pages::{AnniversaryPage, GatePage, TimelinePage};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Riddle gate, the only way in
/// - `/timeline` - The daily notes and the love meter
/// - `/anniversary` - The constellation of sealed letters
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    GatePage {},
    #[route("/timeline")]
    TimelinePage {},
    #[route("/anniversary")]
    AnniversaryPage {},
}

/// Root application component.
///
/// Provides global styles, the store, the gate flag, and the shared overlay
/// marker, then hands off to the router.
#[component]
pub fn App() -> Element {
    // Shared persistence layer, opened asynchronously below
    let store: Signal<SharedStore> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut store_ready: Signal<StoreReady> = use_signal(StoreReady::default);
    let unlocked: Signal<GateUnlocked> = use_signal(GateUnlocked::default);
    let overlay_active: Signal<OverlayActive> = use_signal(OverlayActive::default);
    let night_sky_seen: Signal<NightSkySeen> = use_signal(NightSkySeen::default);

    use_context_provider(|| store);
    use_context_provider(|| store_ready);
    use_context_provider(|| unlocked);
    use_context_provider(|| overlay_active);
    use_context_provider(|| night_sky_seen);
    use_context_provider(OverlayMarker::new);

    // Open the database on mount
    use_effect(move || {
        spawn(async move {
            let path = get_data_dir().join("keepsake.redb");
            match Store::new(&path) {
                Ok(opened) => {
                    let shared = store();
                    let mut guard = shared.write().await;
                    *guard = Some(opened);
                    drop(guard);
                    store_ready.set(StoreReady(true));
                    tracing::info!("Store opened at {:?}", path);
                }
                Err(e) => {
                    tracing::error!("Failed to open store: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
