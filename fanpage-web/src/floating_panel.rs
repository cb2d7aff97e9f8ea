//! Floating contact panel: shown once the page is scrolled, with a form body
//! that expands and collapses in place.
use std::cell::RefCell;
use std::rc::Rc;

use fanpage_core::constants::FOCUSABLE_FIELD_QUERY;
use fanpage_core::{FloatingConfig, FloatingPanel, PanelEffect};
use web_sys::{Document, Element, HtmlElement};

use crate::dom;

struct PanelView {
    panel: Element,
    toggle: Option<HtmlElement>,
    body: Option<HtmlElement>,
    visible_class: String,
}

impl PanelView {
    fn render(&self, state: &FloatingPanel) {
        let visible = state.is_visible();
        let _ = self
            .panel
            .set_attribute("aria-hidden", if visible { "false" } else { "true" });
        dom::set_class(&self.panel, &self.visible_class, visible);

        let expanded = state.is_expanded();
        if let Some(body) = &self.body {
            body.set_hidden(!expanded);
        }
        if let Some(toggle) = &self.toggle {
            let _ = toggle.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
        }
    }

    fn focus(&self, effect: PanelEffect) {
        let target = match effect {
            PanelEffect::None => None,
            PanelEffect::FocusFirstField => self
                .body
                .as_ref()
                .and_then(|body| dom::query_first::<HtmlElement>(body, FOCUSABLE_FIELD_QUERY)),
            PanelEffect::FocusToggle => self.toggle.clone(),
        };
        if let Some(el) = target {
            let _ = el.focus();
        }
    }
}

/// Handle to a bound floating panel. Clones share the same panel.
#[derive(Clone)]
pub struct FloatingPanelHandle {
    state: Rc<RefCell<FloatingPanel>>,
    view: Rc<PanelView>,
}

impl FloatingPanelHandle {
    /// Current flags.
    #[must_use]
    pub fn state(&self) -> FloatingPanel {
        *self.state.borrow()
    }

    /// React to the page being scrolled to `offset_y`.
    pub fn scrolled_to(&self, offset_y: f64) {
        let mut state = self.state.borrow_mut();
        state.on_scroll(offset_y);
        self.view.render(&state);
    }

    /// Toggle button pressed.
    pub fn toggle(&self) {
        let effect = self.state.borrow_mut().toggle();
        self.view.render(&self.state.borrow());
        self.view.focus(effect);
    }

    /// Close button pressed.
    pub fn close(&self) {
        let effect = self.state.borrow_mut().close();
        self.view.render(&self.state.borrow());
        self.view.focus(effect);
    }
}

fn current_scroll_y() -> f64 {
    dom::window()
        .and_then(|win| win.scroll_y().or_else(|_| win.page_y_offset()).ok())
        .unwrap_or(0.0)
}

/// Bind the floating panel. Returns `None`, binding nothing, when the panel
/// root is not on the page.
pub fn bind_floating_contact(doc: &Document, cfg: &FloatingConfig) -> Option<FloatingPanelHandle> {
    let Ok(panel) = dom::element_by_id::<Element>(doc, &cfg.panel) else {
        log::debug!("no floating contact panel on this page");
        return None;
    };
    let toggle = dom::element_by_id::<HtmlElement>(doc, &cfg.toggle).ok();
    let body = dom::element_by_id::<HtmlElement>(doc, &cfg.body).ok();
    let close = dom::element_by_id::<HtmlElement>(doc, &cfg.close).ok();

    let visible = panel.class_list().contains(&cfg.visible_class);
    let expanded = toggle
        .as_ref()
        .and_then(|t| t.get_attribute("aria-expanded"))
        .is_some_and(|v| v == "true");
    let handle = FloatingPanelHandle {
        state: Rc::new(RefCell::new(FloatingPanel::with_state(
            cfg.scroll_threshold,
            visible,
            expanded,
        ))),
        view: Rc::new(PanelView {
            panel,
            toggle: toggle.clone(),
            body,
            visible_class: cfg.visible_class.clone(),
        }),
    };

    if let Some(win) = dom::window() {
        let on_scroll = handle.clone();
        dom::try_listen(&win, "scroll", move |_| {
            on_scroll.scrolled_to(current_scroll_y());
        });
    }
    if let Some(toggle) = &toggle {
        let on_toggle = handle.clone();
        dom::try_listen(toggle, "click", move |_| on_toggle.toggle());
    }
    if let Some(close) = &close {
        let on_close = handle.clone();
        dom::try_listen(close, "click", move |_| on_close.close());
    }
    Some(handle)
}

/// Bind the floating panel, reporting whether it was present.
pub fn setup_floating_contact(doc: &Document, cfg: &FloatingConfig) -> bool {
    bind_floating_contact(doc, cfg).is_some()
}
