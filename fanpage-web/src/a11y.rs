//! Font size and theme controls.
use std::rc::Rc;

use fanpage_core::{KeyValueStore, PageConfig, PreferencesController};
use web_sys::{Document, Element};

use crate::dom;
use crate::prefs::{self, SharedPreferences};

type FontStep<S> = fn(&mut PreferencesController<S>) -> bool;

fn bind_font_step<S: KeyValueStore + 'static>(
    doc: &Document,
    id: &str,
    shared: &SharedPreferences<S>,
    step: FontStep<S>,
) -> bool {
    let Ok(button) = dom::element_by_id::<Element>(doc, id) else {
        log::debug!("no `#{id}` on this page");
        return false;
    };
    let shared = Rc::clone(shared);
    let doc = doc.clone();
    dom::try_listen(&button, "click", move |_| {
        let mut controller = shared.borrow_mut();
        // At the bounds the step is a no-op and nothing is re-applied.
        if step(&mut *controller) {
            prefs::apply_font_scale(&doc, &controller.preferences());
        }
    })
}

fn bind_theme_toggle<S: KeyValueStore + 'static>(
    doc: &Document,
    id: &str,
    light_class: &str,
    shared: &SharedPreferences<S>,
) -> bool {
    let Ok(button) = dom::element_by_id::<Element>(doc, id) else {
        log::debug!("no `#{id}` on this page");
        return false;
    };
    button.set_text_content(Some(&shared.borrow().theme().label()));

    let shared = Rc::clone(shared);
    let doc = doc.clone();
    let light_class = light_class.to_string();
    let label_target = button.clone();
    dom::try_listen(&button, "click", move |_| {
        let theme = shared.borrow_mut().toggle_theme();
        prefs::apply_theme(&doc, theme, &light_class);
        label_target.set_text_content(Some(&theme.label()));
    })
}

/// Bind the font increase/decrease buttons and the theme toggle. Returns how
/// many of the three controls were found and bound.
pub fn setup_accessibility_controls<S: KeyValueStore + 'static>(
    doc: &Document,
    cfg: &PageConfig,
    shared: &SharedPreferences<S>,
) -> usize {
    let ids = &cfg.accessibility;
    [
        bind_font_step(
            doc,
            &ids.font_increase,
            shared,
            PreferencesController::increase_font,
        ),
        bind_font_step(
            doc,
            &ids.font_decrease,
            shared,
            PreferencesController::decrease_font,
        ),
        bind_theme_toggle(doc, &ids.theme_toggle, &ids.light_theme_class, shared),
    ]
    .into_iter()
    .filter(|bound| *bound)
    .count()
}
