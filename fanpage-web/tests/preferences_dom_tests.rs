#![cfg(target_arch = "wasm32")]

mod common;

use common::{PAGE, click, mount, root_font_size, text};
use fanpage_core::{MemoryStore, Theme};
use fanpage_web::boot_with_store;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn stored_preferences_are_applied_on_boot() {
    let doc = mount(PAGE);
    let store = MemoryStore::with_items([
        ("fanpage_theme", "light"),
        ("fanpage_font_scale", "1.2"),
    ]);
    let (shared, bindings) = boot_with_store(&doc, store);

    assert_eq!(bindings.accessibility_controls, 3);
    assert_eq!(shared.borrow().theme(), Theme::Light);
    assert!(doc.body().expect("body").class_list().contains("light-theme"));
    assert_eq!(root_font_size(&doc), "19.2px");
    assert_eq!(text(&doc, "#theme-toggle"), "Claro");
}

#[wasm_bindgen_test]
fn invalid_stored_values_keep_defaults() {
    let doc = mount(PAGE);
    let store = MemoryStore::with_items([
        ("fanpage_theme", "blue"),
        ("fanpage_font_scale", "2.0"),
    ]);
    let (shared, _) = boot_with_store(&doc, store);

    assert_eq!(shared.borrow().theme(), Theme::Dark);
    assert!(!doc.body().expect("body").class_list().contains("light-theme"));
    assert_eq!(root_font_size(&doc), "16px");
    assert_eq!(text(&doc, "#theme-toggle"), "Oscuro");
}

#[wasm_bindgen_test]
fn font_buttons_step_persist_and_stop_at_bounds() {
    let doc = mount(PAGE);
    let store = MemoryStore::new();
    boot_with_store(&doc, store.clone());

    click(&doc, "font-increase");
    assert_eq!(root_font_size(&doc), "17.6px");
    assert_eq!(store.get("fanpage_font_scale").as_deref(), Some("1.1"));

    for _ in 0..10 {
        click(&doc, "font-increase");
    }
    assert_eq!(root_font_size(&doc), "24px");
    assert_eq!(store.get("fanpage_font_scale").as_deref(), Some("1.5"));

    for _ in 0..20 {
        click(&doc, "font-decrease");
    }
    assert_eq!(root_font_size(&doc), "12.8px");
    assert_eq!(store.get("fanpage_font_scale").as_deref(), Some("0.8"));
}

#[wasm_bindgen_test]
fn theme_toggle_twice_restores_class_and_label() {
    let doc = mount(PAGE);
    let store = MemoryStore::new();
    boot_with_store(&doc, store.clone());
    let body = doc.body().expect("body");
    let initial_label = text(&doc, "#theme-toggle");
    assert_eq!(initial_label, "Oscuro");

    click(&doc, "theme-toggle");
    assert!(body.class_list().contains("light-theme"));
    assert_eq!(text(&doc, "#theme-toggle"), "Claro");
    assert_eq!(store.get("fanpage_theme").as_deref(), Some("light"));

    click(&doc, "theme-toggle");
    assert!(!body.class_list().contains("light-theme"));
    assert_eq!(text(&doc, "#theme-toggle"), initial_label);
    assert_eq!(store.get("fanpage_theme").as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn page_without_markup_binds_nothing() {
    let doc = mount("<main><p>Solo texto</p></main>");
    let (_, bindings) = boot_with_store(&doc, MemoryStore::new());
    assert_eq!(bindings, fanpage_web::Bindings::default());
}
