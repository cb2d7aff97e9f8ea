//! User-visible strings.
//!
//! The page is Spanish-only, so there is a single embedded bundle. Lookups
//! use dotted keys (`contact.email.required`) and fall back to the key itself
//! when a string is missing.
use once_cell::sync::Lazy;
use serde_json::{Map, Value};

const ES_BUNDLE: &str = include_str!("../i18n/es.json");

static BUNDLE: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(ES_BUNDLE).unwrap_or_else(|err| {
        log::error!("message bundle is not valid JSON: {err}");
        Value::Object(Map::new())
    })
});

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

/// Look up a message by dotted key.
#[must_use]
pub fn t(key: &str) -> String {
    get_nested_value(&BUNDLE, key)
        .and_then(Value::as_str)
        .map_or_else(|| key.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nested_keys() {
        assert_eq!(t("theme.label.dark"), "Oscuro");
        assert_eq!(t("contact.status.failure"), "Revisá los campos en rojo.");
    }

    #[test]
    fn missing_or_non_string_keys_echo_the_key() {
        assert_eq!(t("missing.key"), "missing.key");
        assert_eq!(t("contact.nombre"), "contact.nombre");
    }
}
