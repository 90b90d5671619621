//! Declarative field rules for the record forms
//!
//! Each record exposes a static schema (`&[FieldRule]`) in display order. The
//! form controller runs the schema on submit; nothing here knows about the
//! browser.

use once_cell::sync::Lazy;
use regex::Regex;

/// Same shape yup accepts: something@something.tld, no whitespace.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub email: bool,
    /// Allowed values, compared case-insensitively
    pub one_of: Option<&'static [&'static str]>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            email: false,
            one_of: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub const fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.one_of = Some(values);
        self
    }

    /// Validate a string value against the rules.
    ///
    /// Checks run in a fixed order (presence, length, shape, membership) and
    /// the first failure wins. An empty optional value skips the rest.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} must be at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} must be at most {} characters", field_label, max));
            }
        }

        if self.email && !is_email(trimmed) {
            return Err("Invalid email".to_string());
        }

        if let Some(allowed) = self.one_of {
            if !allowed.iter().any(|a| a.eq_ignore_ascii_case(trimmed)) {
                return Err(format!("{} must be {}", field_label, join_alternatives(allowed)));
            }
        }

        Ok(())
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn join_alternatives(values: &[&str]) -> String {
    match values {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

/// One entry of a record's form schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Wire / form key, e.g. `emailAddress`
    pub name: &'static str,
    /// Label used in messages, e.g. `Email`
    pub label: &'static str,
    pub rules: ValidationRules,
}

impl FieldRule {
    pub const fn new(name: &'static str, label: &'static str, rules: ValidationRules) -> Self {
        Self { name, label, rules }
    }

    pub fn check(&self, value: &str) -> Result<(), String> {
        self.rules.validate_string(value, self.label)
    }
}

/// Field name → message, kept in insertion (schema) order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces an existing message for the same field
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.0.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = message,
            None => self.0.push((field, message)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }
}

/// Run every rule of `schema`, reading values through `value_of`
pub fn validate_schema<'a, F>(schema: &[FieldRule], value_of: F) -> FieldErrors
where
    F: Fn(&str) -> &'a str,
{
    let mut errors = FieldErrors::new();
    for rule in schema {
        if let Err(message) = rule.check(value_of(rule.name)) {
            errors.insert(rule.name, message);
        }
    }
    errors
}
