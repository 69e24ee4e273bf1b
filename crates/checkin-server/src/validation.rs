//! Sanitize and validate JSON object bodies against a field schema

use checkin_core::ApiError;
use serde_json::{Map, Value};

/// Expected JSON type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
    Number,
}

impl FieldKind {
    const fn describe(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Boolean => "a boolean",
            Self::Number => "a number",
        }
    }

    fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::String, Value::String(_)) | (Self::Boolean, Value::Bool(_)) | (Self::Number, Value::Number(_))
        )
    }
}

/// Rules for a single body field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Minimum length in characters, strings only
    pub min_length: Option<usize>,
    /// Trim surrounding whitespace during sanitize, strings only
    pub trim: bool,
}

impl FieldRule {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            min_length: None,
            trim: false,
        }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    #[must_use]
    pub const fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }
}

/// Trim every string field marked for trimming
pub fn sanitize(schema: &[FieldRule], body: &mut Map<String, Value>) {
    for rule in schema.iter().filter(|r| r.trim) {
        if let Some(Value::String(value)) = body.get_mut(rule.name) {
            let trimmed = value.trim();
            if trimmed.len() != value.len() {
                *value = trimmed.to_owned();
            }
        }
    }
}

/// Check `body` against `schema`, reporting the first violation only
///
/// # Errors
///
/// Returns a `VALIDATION_ERROR` naming the offending field
pub fn validate(schema: &[FieldRule], body: &Map<String, Value>) -> Result<(), ApiError> {
    for rule in schema {
        let value = match body.get(rule.name) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(value) => Some(value),
        };

        let Some(value) = value else {
            if rule.required {
                return Err(ApiError::validation(format!("{} is required", rule.name)));
            }
            continue;
        };

        if !rule.kind.matches(value) {
            return Err(ApiError::validation(format!(
                "{} must be {}",
                rule.name,
                rule.kind.describe()
            )));
        }

        if let (Some(min), Value::String(s)) = (rule.min_length, value)
            && s.chars().count() < min
        {
            return Err(ApiError::validation(format!(
                "{} must be at least {min} characters",
                rule.name
            )));
        }
    }

    Ok(())
}
