use fanpage_core::{FloatingPanel, PageConfig, PanelEffect};

#[test]
fn scrolling_back_up_collapses_an_expanded_body() {
    let cfg = PageConfig::load_from_static();
    let mut panel = FloatingPanel::new(cfg.floating.scroll_threshold);

    panel.on_scroll(450.0);
    assert!(panel.is_visible());
    assert_eq!(panel.toggle(), PanelEffect::FocusFirstField);
    assert!(panel.is_expanded());

    panel.on_scroll(120.0);
    assert!(!panel.is_visible());
    assert!(!panel.is_expanded());

    panel.on_scroll(450.0);
    assert!(panel.is_visible());
    assert!(!panel.is_expanded(), "re-showing must not re-open the body");
}
