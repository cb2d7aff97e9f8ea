#![allow(dead_code)]

use fanpage_web::dom;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

pub const PAGE: &str = r#"
<button id="font-increase">A+</button>
<button id="font-decrease">A-</button>
<button id="theme-toggle">Tema</button>
<nav>
  <button id="nav-toggle">Menú</button>
  <ul id="nav-list">
    <li><a class="nav-link" href="#inicio">Inicio</a></li>
    <li><a class="nav-link" href="#galeria">Galería</a></li>
  </ul>
</nav>
<form id="contact-form">
  <input id="nombre" name="nombre">
  <span id="nombre-error" class="error-message"></span>
  <input id="email" name="email">
  <span class="error-message"></span>
  <textarea id="mensaje" name="mensaje"></textarea>
  <p class="form-status"></p>
</form>
<aside id="floating-contact" aria-hidden="true">
  <button id="contact-toggle" aria-expanded="false">Contacto</button>
  <div id="floating-contact-form" hidden>
    <button id="floating-contact-close">Cerrar</button>
    <form id="floating-contact-form-el">
      <input id="f-nombre" name="nombre">
      <input id="f-email" name="email">
      <textarea id="f-mensaje" name="mensaje"></textarea>
      <p class="form-status"></p>
    </form>
  </div>
</aside>
"#;

/// Replace the body with `html` and reset page-level state left by
/// earlier tests.
pub fn mount(html: &str) -> Document {
    let doc = dom::document().expect("document");
    let body = doc.body().expect("body");
    body.set_inner_html(html);
    body.set_class_name("");
    let root: HtmlElement = doc
        .document_element()
        .expect("html element")
        .dyn_into()
        .expect("html is an HtmlElement");
    let _ = root.style().remove_property("font-size");
    doc
}

pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> T {
    dom::element_by_id::<T>(doc, id).unwrap_or_else(|err| panic!("{err}"))
}

pub fn click(doc: &Document, id: &str) {
    by_id::<HtmlElement>(doc, id).click();
}

pub fn fill(doc: &Document, id: &str, value: &str) {
    let el: Element = by_id(doc, id);
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

pub fn value(doc: &Document, id: &str) -> String {
    let el: Element = by_id(doc, id);
    el.dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::value)
        .or_else(|| el.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value))
        .unwrap_or_default()
}

/// Dispatch a cancelable `submit` and report whether it was prevented.
pub fn submit(doc: &Document, form_id: &str) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).expect("submit event");
    by_id::<Element>(doc, form_id)
        .dispatch_event(&event)
        .expect("dispatch submit");
    event.default_prevented()
}

pub fn text(doc: &Document, selector: &str) -> String {
    doc.query_selector(selector)
        .expect("valid selector")
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

pub fn root_font_size(doc: &Document) -> String {
    let root: HtmlElement = doc
        .document_element()
        .expect("html element")
        .dyn_into()
        .expect("html is an HtmlElement");
    root.style().get_property_value("font-size").unwrap_or_default()
}
