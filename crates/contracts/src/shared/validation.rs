//! Client-side validation failures.
//!
//! Only emptiness of required fields, phone format, `validationPattern`
//! and parseability of typed inputs are checked in the browser. Everything
//! else (uniqueness, references) is validated by the backend.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Поле «{label}» обязательно для заполнения")]
    Required { label: String },

    #[error("Поле «{label}»: некорректный номер телефона «{value}»")]
    InvalidPhone { label: String, value: String },

    #[error("Поле «{label}» не соответствует формату")]
    PatternMismatch { label: String },

    #[error("Поле «{label}»: ожидается число, получено «{value}»")]
    InvalidNumber { label: String, value: String },

    #[error("Поле «{label}»: некорректная дата «{value}»")]
    InvalidDate { label: String, value: String },

    #[error("Поле «{label}»: неизвестное значение «{value}»")]
    UnknownListValue { label: String, value: String },
}

impl FieldError {
    pub fn label(&self) -> &str {
        match self {
            FieldError::Required { label }
            | FieldError::InvalidPhone { label, .. }
            | FieldError::PatternMismatch { label }
            | FieldError::InvalidNumber { label, .. }
            | FieldError::InvalidDate { label, .. }
            | FieldError::UnknownListValue { label, .. } => label,
        }
    }
}

/// Matches a value against a field's `validationPattern`.
///
/// Patterns are authored for the browser's RegExp engine, so the frontend
/// supplies the implementation.
pub trait PatternMatcher {
    fn is_match(&self, pattern: &str, value: &str) -> bool;
}

/// Matcher that accepts every value.
pub struct AcceptAll;

impl PatternMatcher for AcceptAll {
    fn is_match(&self, _pattern: &str, _value: &str) -> bool {
        true
    }
}
