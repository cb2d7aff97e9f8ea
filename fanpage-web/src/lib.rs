#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use fanpage_core::KeyValueStore;
use web_sys::Document;

pub mod a11y;
pub mod config;
pub mod contact_form;
pub mod dom;
pub mod floating_panel;
pub mod nav;
pub mod prefs;
pub mod storage;

use crate::prefs::SharedPreferences;
use crate::storage::BrowserStore;

/// What got wired up on this page. Features whose markup is missing are
/// simply reported as not bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bindings {
    /// Font increase/decrease and theme toggle buttons bound (0..=3).
    pub accessibility_controls: usize,
    pub navigation: bool,
    /// Contact forms bound (0..=2 with the default configuration).
    pub contact_forms: usize,
    pub floating_panel: bool,
}

/// Load preferences from `store` and bind every feature found in `doc`.
pub fn boot_with_store<S: KeyValueStore + 'static>(
    doc: &Document,
    store: S,
) -> (SharedPreferences<S>, Bindings) {
    let cfg = config::page_config(doc);
    let shared = prefs::load_preferences(doc, &cfg, store);
    let bindings = Bindings {
        accessibility_controls: a11y::setup_accessibility_controls(doc, &cfg, &shared),
        navigation: nav::setup_navigation(doc, &cfg.navigation),
        contact_forms: contact_form::setup_contact_forms(doc, &cfg.contact),
        floating_panel: floating_panel::setup_floating_contact(doc, &cfg.floating),
    };
    log::debug!("page bindings: {bindings:?}");
    (shared, bindings)
}

/// Boot against the browser's `localStorage`.
pub fn boot(doc: &Document) -> Bindings {
    let (_, bindings) = boot_with_store(doc, BrowserStore::local());
    bindings
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    let Some(doc) = dom::document() else {
        return;
    };
    // Bind once the markup is parsed, even if the module loads early.
    if doc.ready_state() == "loading" {
        let ready_doc = doc.clone();
        dom::try_listen(&doc, "DOMContentLoaded", move |_| {
            boot(&ready_doc);
        });
    } else {
        boot(&doc);
    }
}
