//! Validation Utilities
//!
//! Field rules shared by the request payloads, plus the conversion of
//! `validator` errors into [`AppError`].

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};
use validator::{ValidateEmail, ValidateLength, ValidationError, ValidationErrors};

use super::error::{AppError, FieldError};

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));

    let message = field_errors
        .first()
        .map(|e| format!("{}: {}", e.field, e.message))
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation {
        message,
        errors: field_errors,
    }
}

/// Accumulates per-field rule results into a `ValidationErrors`.
#[derive(Debug)]
pub struct FieldChecks {
    errors: ValidationErrors,
}

impl Default for FieldChecks {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldChecks {
    pub fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
        }
    }

    /// Record the outcome of one rule for `field`.
    pub fn check(&mut self, field: &'static str, result: Result<(), ValidationError>) -> &mut Self {
        if let Err(error) = result {
            self.errors.add(field, error);
        }
        self
    }

    /// Run `rule` on a present non-null value; reject an explicit `null`.
    pub fn check_present<T, F>(
        &mut self,
        field: &'static str,
        value: &Option<Option<T>>,
        rule: F,
    ) -> &mut Self
    where
        F: FnOnce(&T) -> Result<(), ValidationError>,
    {
        match value {
            None => self,
            Some(None) => self.check(field, Err(rule_error("not_null", "must not be null".into()))),
            Some(Some(v)) => self.check(field, rule(v)),
        }
    }

    /// Run `rule` on a present non-null value; `null` is allowed.
    pub fn check_nullable<T, F>(
        &mut self,
        field: &'static str,
        value: &Option<Option<T>>,
        rule: F,
    ) -> &mut Self
    where
        F: FnOnce(&T) -> Result<(), ValidationError>,
    {
        match value {
            Some(Some(v)) => self.check(field, rule(v)),
            _ => self,
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

fn rule_error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_error("not_blank", "must not be blank".into()));
    }
    Ok(())
}

/// Character count within `min..=max`.
pub fn length_between(value: &str, min: u64, max: u64) -> Result<(), ValidationError> {
    if !value.validate_length(Some(min), Some(max), None) {
        return Err(rule_error(
            "length",
            format!("size must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Well-formed email address.
pub fn email(value: &str) -> Result<(), ValidationError> {
    if !value.validate_email() {
        return Err(rule_error(
            "email",
            "must be a well-formed email address".into(),
        ));
    }
    Ok(())
}

/// Combine rules, keeping the first failure.
pub fn all_of(
    value: &str,
    rules: &[fn(&str) -> Result<(), ValidationError>],
) -> Result<(), ValidationError> {
    rules.iter().try_for_each(|rule| rule(value))
}

/// Keeps `null` distinguishable from an absent field: absent is `None`,
/// `null` is `Some(None)`. Use with `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Required string fields: absent or `null` becomes empty, so the field's
/// own rule reports it. Use with `#[serde(default)]`.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Query-string values where an empty value (`?labelId=`) means absent.
pub fn empty_as_none<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
