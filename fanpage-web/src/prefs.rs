//! Applying stored display preferences to the document.
use std::cell::RefCell;
use std::rc::Rc;

use fanpage_core::{KeyValueStore, PageConfig, Preferences, PreferencesController, Theme};
use web_sys::Document;

use crate::dom;

/// Preferences shared by every handler that reads or changes them.
pub type SharedPreferences<S> = Rc<RefCell<PreferencesController<S>>>;

/// Toggle the light-theme marker class on `<body>`.
pub fn apply_theme(doc: &Document, theme: Theme, light_class: &str) {
    if let Some(body) = doc.body() {
        dom::set_class(&body, light_class, theme.is_light());
    }
}

/// Set the root `font-size` on `<html>` from the current scale.
pub fn apply_font_scale(doc: &Document, prefs: &Preferences) {
    if let Some(html) = doc.document_element() {
        dom::set_style(&html, "font-size", &prefs.root_font_size());
    }
}

/// Load stored preferences, apply them and hand back the shared controller.
pub fn load_preferences<S: KeyValueStore>(
    doc: &Document,
    cfg: &PageConfig,
    store: S,
) -> SharedPreferences<S> {
    let mut controller = PreferencesController::new(store, cfg.storage.clone());
    let prefs = controller.load();
    apply_theme(doc, prefs.theme, &cfg.accessibility.light_theme_class);
    apply_font_scale(doc, &prefs);
    log::debug!(
        "preferences loaded: theme={} scale={}",
        prefs.theme,
        prefs.font_scale
    );
    Rc::new(RefCell::new(controller))
}
