//! Responsive navigation menu.
use fanpage_core::{NavAction, NavigationIds, next_open};
use web_sys::{Document, Element};

use crate::dom;

fn apply(list: &Element, open_class: &str, action: NavAction) {
    let open = list.class_list().contains(open_class);
    dom::set_class(list, open_class, next_open(action, open));
}

/// Bind the hamburger toggle and the navigation links. Returns `false` when
/// the page has no toggle or no menu list.
pub fn setup_navigation(doc: &Document, ids: &NavigationIds) -> bool {
    let (Ok(toggle), Ok(list)) = (
        dom::element_by_id::<Element>(doc, &ids.toggle),
        dom::element_by_id::<Element>(doc, &ids.list),
    ) else {
        log::debug!("navigation menu not present");
        return false;
    };

    let toggle_list = list.clone();
    let open_class = ids.open_class.clone();
    let bound = dom::try_listen(&toggle, "click", move |_| {
        apply(&toggle_list, &open_class, NavAction::Toggle);
    });

    let Some(root) = doc.document_element() else {
        return bound;
    };
    for link in dom::query_all::<Element>(&root, &ids.link_selector) {
        let list = list.clone();
        let open_class = ids.open_class.clone();
        dom::try_listen(&link, "click", move |_| {
            apply(&list, &open_class, NavAction::LinkFollowed);
        });
    }
    bound
}
