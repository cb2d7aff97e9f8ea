use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("element `#{0}` not found")]
    Missing(String),
    #[error("element `#{id}` is not a {expected}")]
    WrongType { id: String, expected: &'static str },
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Look up an element by id and cast it to the requested interface.
///
/// # Errors
/// Returns [`DomError::Missing`] when no element carries `id`, or
/// [`DomError::WrongType`] when it is not a `T`.
pub fn element_by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T, DomError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| DomError::Missing(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType {
            id: id.to_string(),
            expected: std::any::type_name::<T>(),
        })
}

/// Every element under `root` matching `selector`, cast to `T`. Elements of
/// another type are skipped.
#[must_use]
pub fn query_all<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// First element under `root` matching `selector`, cast to `T`.
#[must_use]
pub fn query_first<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
///
/// # Errors
/// Returns an error if the browser rejects the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners are never removed, so the closure lives as long as the page.
    closure.forget();
    Ok(())
}

/// Like [`listen`], but a rejected listener is logged and reported as
/// `false` instead of an error.
pub fn try_listen<F>(target: &EventTarget, event: &str, handler: F) -> bool
where
    F: FnMut(Event) + 'static,
{
    listen(target, event, handler)
        .map_err(|err| log::warn!("could not attach `{event}` listener: {err}"))
        .is_ok()
}

/// Add or remove a class depending on `enabled`.
pub fn set_class(el: &Element, class: &str, enabled: bool) {
    let list = el.class_list();
    let _ = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Set an inline style property, ignoring elements without a style object.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
