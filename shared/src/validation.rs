use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::{INVALID_EMAIL_ERROR, REQUIRED_ERROR};

// Structural check only: something@something.something, no whitespace or extra '@'
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

/// The three inputs of the entry form, each tied to a fixed input id and error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Surname,
    Email,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Surname, FormField::Email];

    /// Matches the field name on `EntryForm`, which is also the key validator reports under.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Email => "email",
        }
    }

    pub fn input_id(&self) -> &'static str {
        match self {
            Self::Name => "wof_name",
            Self::Surname => "wof_surname",
            Self::Email => "wof_email",
        }
    }

    pub fn error_slot_id(&self) -> &'static str {
        match self {
            Self::Name => "wof_name_error",
            Self::Surname => "wof_surname_error",
            Self::Email => "wof_email_error",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Surname => "Surname",
            Self::Email => "E-mail",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Email => FieldKind::Email,
            Self::Name | Self::Surname => FieldKind::Text,
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self.kind() {
            FieldKind::Email => "email",
            FieldKind::Text => "text",
        }
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", REQUIRED_ERROR));
    }
    Ok(())
}

pub fn validate_email_format(value: &str) -> Result<(), ValidationError> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(field_error("invalid_email_format", INVALID_EMAIL_ERROR));
    }
    Ok(())
}

pub fn error_message(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct EntryForm {
    #[validate(custom = "validate_required")]
    pub name: String,
    #[validate(custom = "validate_required")]
    pub surname: String,
    #[validate(custom = "validate_email_format")]
    pub email: String,
}

impl EntryForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Surname => &self.surname,
            FormField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Surname => self.surname = value,
            FormField::Email => self.email = value,
        }
    }

    /// Runs every field check (no short-circuit) and collects one entry per field.
    pub fn report(&self) -> FormReport {
        let failures = self.validate().err();
        let fields = FormField::ALL
            .iter()
            .map(|&field| {
                let error = failures.as_ref().and_then(|errors| {
                    errors
                        .field_errors()
                        .get(field.key())
                        .and_then(|list| list.first())
                        .map(error_message)
                });
                FieldReport { field, error }
            })
            .collect();
        FormReport { fields }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldReport {
    pub field: FormField,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormReport {
    pub fields: Vec<FieldReport>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|report| report.error.is_none())
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.fields
            .iter()
            .find(|report| report.field == field)
            .and_then(|report| report.error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, surname: &str, email: &str) -> EntryForm {
        EntryForm {
            name: name.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(validate_email_format("a@b.co").is_ok());
        assert!(validate_email_format("first.last@mail.example.org").is_ok());
        assert!(validate_email_format("a@b").is_err());
        assert!(validate_email_format("abc").is_err());
        assert!(validate_email_format("").is_err());
        assert!(validate_email_format("a b@c.de").is_err());
        assert!(validate_email_format("a@@b.co").is_err());
    }

    #[test]
    fn test_required_trims_whitespace() {
        assert!(validate_required("Ana").is_ok());
        let err = validate_required("   ").unwrap_err();
        assert_eq!(err.code, "required");
        assert_eq!(error_message(&err), REQUIRED_ERROR);
    }

    #[test]
    fn test_empty_email_reports_format_error() {
        let report = form("", "", "").report();
        assert_eq!(report.error_for(FormField::Name), Some("Required"));
        assert_eq!(report.error_for(FormField::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_report_collects_every_field() {
        let report = form("", "", "abc").report();
        assert!(!report.is_valid());
        assert_eq!(report.fields.len(), 3);
        assert_eq!(report.error_for(FormField::Name), Some("Required"));
        assert_eq!(report.error_for(FormField::Surname), Some("Required"));
        assert_eq!(report.error_for(FormField::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_report_accepts_valid_form() {
        let report = form("Ana", "Horvat", "ana@example.com").report();
        assert!(report.is_valid());
        assert!(FormField::ALL.iter().all(|&f| report.error_for(f).is_none()));
    }

    #[test]
    fn test_field_ids_pair_with_error_slots() {
        for field in FormField::ALL {
            assert_eq!(field.error_slot_id(), format!("{}_error", field.input_id()));
        }
        assert_eq!(FormField::Email.input_type(), "email");
        assert_eq!(FormField::Surname.input_type(), "text");
    }

    #[test]
    fn test_set_and_value() {
        let mut entry = EntryForm::default();
        entry.set(FormField::Surname, "Novak");
        assert_eq!(entry.value(FormField::Surname), "Novak");
        assert_eq!(entry.value(FormField::Name), "");
    }
}
