//! Contact form validation.
//!
//! Every submit runs all three field checks in order (name, email, message)
//! and collects every failure instead of stopping at the first one.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{MESSAGE_MIN_CHARS, NAME_MIN_CHARS};
use crate::i18n;

static NAME_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(&format!(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ\s]{{{NAME_MIN_CHARS},}}$")).ok()
});
static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

fn pattern_matches(re: &Lazy<Option<Regex>>, value: &str) -> bool {
    Lazy::force(re).as_ref().is_some_and(|re| re.is_match(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Nombre,
    Email,
    Mensaje,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Nombre, Self::Email, Self::Mensaje];

    /// Value of the field's `name` attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nombre => "nombre",
            Self::Email => "email",
            Self::Mensaje => "mensaje",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Required,
    Format,
    TooShort,
}

impl FailureKind {
    const fn key(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Format => "format",
            Self::TooShort => "too_short",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub kind: FailureKind,
}

impl FieldError {
    #[must_use]
    pub fn message(&self) -> String {
        i18n::t(&format!("contact.{}.{}", self.field.name(), self.kind.key()))
    }
}

/// Trimmed field values of one submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub nombre: String,
    pub email: String,
    pub mensaje: String,
}

impl ContactSubmission {
    #[must_use]
    pub fn new(nombre: &str, email: &str, mensaje: &str) -> Self {
        Self {
            nombre: nombre.trim().to_string(),
            email: email.trim().to_string(),
            mensaje: mensaje.trim().to_string(),
        }
    }

    /// Build from raw values read by field name; absent fields count as empty.
    #[must_use]
    pub fn from_lookup(mut lookup: impl FnMut(Field) -> Option<String>) -> Self {
        let mut read = |field| lookup(field).unwrap_or_default();
        let (nombre, email, mensaje) = (
            read(Field::Nombre),
            read(Field::Email),
            read(Field::Mensaje),
        );
        Self::new(&nombre, &email, &mensaje)
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Nombre => &self.nombre,
            Field::Email => &self.email,
            Field::Mensaje => &self.mensaje,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Success,
    Failure,
}

impl FormStatus {
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Success => i18n::t("contact.status.success"),
            Self::Failure => i18n::t("contact.status.failure"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: SmallVec<[FieldError; 3]>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failures in field order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field == field)
    }

    #[must_use]
    pub fn outcome(&self) -> FormStatus {
        if self.is_valid() {
            FormStatus::Success
        } else {
            FormStatus::Failure
        }
    }
}

fn check(field: Field, value: &str) -> Option<FailureKind> {
    if value.is_empty() {
        return Some(FailureKind::Required);
    }
    match field {
        Field::Nombre => (!pattern_matches(&NAME_RE, value)).then_some(FailureKind::Format),
        Field::Email => (!pattern_matches(&EMAIL_RE, value)).then_some(FailureKind::Format),
        Field::Mensaje => {
            (value.chars().count() < MESSAGE_MIN_CHARS).then_some(FailureKind::TooShort)
        }
    }
}

/// Validate every field of a submission.
#[must_use]
pub fn validate(submission: &ContactSubmission) -> ValidationReport {
    let errors = Field::ALL
        .into_iter()
        .filter_map(|field| {
            check(field, submission.value(field)).map(|kind| FieldError { field, kind })
        })
        .collect();
    ValidationReport { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_for(sub: &ContactSubmission, field: Field) -> Option<FailureKind> {
        validate(sub).error_for(field).map(|e| e.kind)
    }

    #[test]
    fn names_accept_accents_and_spaces() {
        for name in ["Ana Pérez", "Íñigo Núñez", "Jo"] {
            let sub = ContactSubmission::new(name, "a@b.co", "mensaje largo ok");
            assert_eq!(kind_for(&sub, Field::Nombre), None, "{name}");
        }
        for name in ["A", "R2D2", "ana_p", "Zoë"] {
            let sub = ContactSubmission::new(name, "a@b.co", "mensaje largo ok");
            assert_eq!(kind_for(&sub, Field::Nombre), Some(FailureKind::Format), "{name}");
        }
    }

    #[test]
    fn name_length_follows_minimum() {
        let short = "A".repeat(NAME_MIN_CHARS - 1);
        let sub = ContactSubmission::new(&short, "a@b.co", "mensaje largo ok");
        assert_eq!(kind_for(&sub, Field::Nombre), Some(FailureKind::Format));
        let exact = "A".repeat(NAME_MIN_CHARS);
        let sub = ContactSubmission::new(&exact, "a@b.co", "mensaje largo ok");
        assert_eq!(kind_for(&sub, Field::Nombre), None);
    }

    #[test]
    fn email_shape() {
        for email in ["ana@example.com", "a.b@c.d.e"] {
            let sub = ContactSubmission::new("Ana", email, "mensaje largo ok");
            assert_eq!(kind_for(&sub, Field::Email), None, "{email}");
        }
        for email in ["ana@example", "ana@@example.com", "ana example@x.com", "@x.com", "ana@.com"]
        {
            let sub = ContactSubmission::new("Ana", email, "mensaje largo ok");
            assert_eq!(kind_for(&sub, Field::Email), Some(FailureKind::Format), "{email}");
        }
    }

    #[test]
    fn message_length_counts_characters_after_trimming() {
        let sub = ContactSubmission::new("Ana", "a@b.co", "   ñandúñandú   ");
        assert_eq!(kind_for(&sub, Field::Mensaje), None);
        let sub = ContactSubmission::new("Ana", "a@b.co", "  123456789  ");
        assert_eq!(kind_for(&sub, Field::Mensaje), Some(FailureKind::TooShort));
    }

    #[test]
    fn whitespace_only_is_required_not_format() {
        let sub = ContactSubmission::new("   ", " ", "\n\t");
        let report = validate(&sub);
        assert!(
            report
                .errors()
                .iter()
                .all(|e| e.kind == FailureKind::Required)
        );
        assert_eq!(report.errors().len(), 3);
    }

    #[test]
    fn lookup_treats_missing_fields_as_empty() {
        let sub = ContactSubmission::from_lookup(|field| match field {
            Field::Nombre => Some("  Ana  ".into()),
            _ => None,
        });
        assert_eq!(sub, ContactSubmission::new("Ana", "", ""));
    }

    #[test]
    fn messages_match_field_and_kind() {
        let err = FieldError {
            field: Field::Mensaje,
            kind: FailureKind::TooShort,
        };
        assert_eq!(
            err.message(),
            "El mensaje debe tener al menos 10 caracteres."
        );
        assert_eq!(FormStatus::Failure.message(), "Revisá los campos en rojo.");
    }
}
