//! Required-field checks for the create/edit forms.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) need attention", .fields.len())]
pub struct FormErrors {
    pub fields: Vec<FieldError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Record an error when `value` is blank.
    pub fn require(&mut self, field: &'static str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{} is required", label));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Optional text input: blank becomes `None`.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_blank() {
        let mut errors = FormErrors::new();
        errors.require("name", "Name", "   ");
        errors.require("price", "Price", "10");
        assert_eq!(errors.fields.len(), 1);
        assert_eq!(errors.message_for("name"), Some("Name is required"));
        assert_eq!(errors.message_for("price"), None);
        assert_eq!(errors.to_string(), "1 field(s) need attention");
    }

    #[test]
    fn test_into_result() {
        assert_eq!(FormErrors::new().into_result(|| 5), Ok(5));
        let mut errors = FormErrors::new();
        errors.push("x", "bad");
        assert!(errors.into_result(|| 5).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" SKU-1 "), Some("SKU-1".to_string()));
    }
}
