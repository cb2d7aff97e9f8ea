//! Contact form validation wiring.
//!
//! Each bound form reads, validates and reports on its own fields only, so
//! the page form and the floating form never touch each other's errors.
use std::rc::Rc;

use fanpage_core::constants::FOCUSABLE_FIELD_QUERY;
use fanpage_core::{
    ContactConfig, ContactSubmission, Field, FieldError, FormStatus, ValidationReport, validate,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;

fn field_element(form: &HtmlFormElement, field: Field) -> Option<Element> {
    dom::query_first::<Element>(form, &format!("[name=\"{}\"]", field.name()))
}

fn field_value(el: &Element) -> Option<String> {
    el.dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::value)
        .or_else(|| {
            el.dyn_ref::<HtmlTextAreaElement>()
                .map(HtmlTextAreaElement::value)
        })
}

/// Current trimmed values of the form's `nombre`, `email` and `mensaje` fields.
#[must_use]
pub fn read_submission(form: &HtmlFormElement) -> ContactSubmission {
    ContactSubmission::from_lookup(|field| {
        field_element(form, field).and_then(|el| field_value(&el))
    })
}

/// Remove every error marker and message inside `form`.
pub fn clear_errors(form: &HtmlFormElement, cfg: &ContactConfig) {
    for field in dom::query_all::<Element>(form, FOCUSABLE_FIELD_QUERY) {
        dom::set_class(&field, &cfg.error_class, false);
    }
    for message in dom::query_all::<Element>(form, &format!(".{}", cfg.error_message_class)) {
        message.set_text_content(Some(""));
    }
}

/// Where the message for `input` goes: `#<id>-error` first, then an
/// immediately following `.error-message` sibling.
fn error_slot(form: &HtmlFormElement, input: &Element, cfg: &ContactConfig) -> Option<Element> {
    let id = input.id();
    if !id.is_empty()
        && let Some(slot) = dom::query_first::<Element>(form, &format!("#{id}-error"))
    {
        return Some(slot);
    }
    input
        .next_element_sibling()
        .filter(|el| el.class_list().contains(&cfg.error_message_class))
}

/// Mark the failing field and show its message, creating an inline
/// `<span>` when the markup has no slot for it.
pub fn show_error_for(form: &HtmlFormElement, cfg: &ContactConfig, error: FieldError) {
    let Some(input) = field_element(form, error.field) else {
        return;
    };
    dom::set_class(&input, &cfg.error_class, true);
    let message = error.message();

    if let Some(slot) = error_slot(form, &input, cfg) {
        slot.set_text_content(Some(&message));
        return;
    }
    let Some(doc) = input.owner_document() else {
        return;
    };
    match doc.create_element("span") {
        Ok(span) => {
            span.set_class_name(&cfg.error_message_class);
            span.set_text_content(Some(&message));
            if let Err(err) = input.after_with_node_1(&span) {
                log::warn!(
                    "inline error for `{}`: {}",
                    error.field.name(),
                    dom::js_error_message(&err)
                );
            }
        }
        Err(err) => log::warn!("inline error element: {}", dom::js_error_message(&err)),
    }
}

fn show_status(form: &HtmlFormElement, cfg: &ContactConfig, status: FormStatus) {
    let Some(el) = dom::query_first::<Element>(form, &cfg.status_selector) else {
        return;
    };
    el.set_text_content(Some(&status.message()));
    let color = match status {
        FormStatus::Success => &cfg.success_color,
        FormStatus::Failure => &cfg.failure_color,
    };
    dom::set_style(&el, "color", color);
}

/// Run one submit attempt against `form`: clear, read, validate, then either
/// show the errors or confirm and reset the form.
pub fn submit_form(form: &HtmlFormElement, cfg: &ContactConfig) -> ValidationReport {
    clear_errors(form, cfg);
    let report = validate(&read_submission(form));
    for error in report.errors() {
        show_error_for(form, cfg, *error);
    }

    let status = report.outcome();
    show_status(form, cfg, status);
    if status == FormStatus::Success {
        form.reset();
    }
    log::debug!(
        "contact form `#{}` submitted: {} field error(s)",
        form.id(),
        report.errors().len()
    );
    report
}

fn bind_contact_form(form: &HtmlFormElement, cfg: &Rc<ContactConfig>) -> bool {
    let target = form.clone();
    let cfg = Rc::clone(cfg);
    dom::try_listen(form, "submit", move |event| {
        event.prevent_default();
        submit_form(&target, &cfg);
    })
}

/// Bind validation to every configured form present on the page. Returns the
/// number of forms bound.
pub fn setup_contact_forms(doc: &Document, cfg: &ContactConfig) -> usize {
    let shared = Rc::new(cfg.clone());
    cfg.form_ids
        .iter()
        .filter_map(|id| dom::element_by_id::<HtmlFormElement>(doc, id).ok())
        .filter(|form| bind_contact_form(form, &shared))
        .count()
}
