//! Stock validators for common field checks.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{FieldError, Validator, Validity};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("e-mail pattern compiles")
});

/// Wraps a boolean check, optionally attaching a message on failure.
pub struct Predicate<F> {
    check: F,
    message: Option<String>,
}

pub fn predicate<F>(check: F) -> Predicate<F>
where
    F: Fn(&str) -> bool,
{
    Predicate {
        check,
        message: None,
    }
}

impl<F> Predicate<F> {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<F> Validator for Predicate<F>
where
    F: Fn(&str) -> bool,
{
    fn validate(&self, value: &str) -> Validity {
        if (self.check)(value) {
            Validity::Valid
        } else {
            Validity::Invalid(self.message.clone())
        }
    }
}

#[derive(Debug, Clone)]
pub struct Email {
    message: String,
}

impl Default for Email {
    fn default() -> Self {
        Self {
            message: "Enter a valid e-mail address".to_string(),
        }
    }
}

impl Email {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Validator for Email {
    fn validate(&self, value: &str) -> Validity {
        if EMAIL_PATTERN.is_match(value) {
            Validity::Valid
        } else {
            Validity::invalid(self.message.clone())
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    message: String,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, FieldError> {
        let regex = Regex::new(pattern).map_err(|err| FieldError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self {
            regex,
            message: format!("must match {pattern}"),
        })
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validator for Pattern {
    fn validate(&self, value: &str) -> Validity {
        if self.regex.is_match(value) {
            Validity::Valid
        } else {
            Validity::invalid(self.message.clone())
        }
    }
}

/// Bounds on the number of characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Length {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl Length {
    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

impl Validator for Length {
    fn validate(&self, value: &str) -> Validity {
        let len = value.chars().count();
        if let Some(min) = self.min
            && len < min
        {
            return Validity::invalid(format!("must be at least {min} characters"));
        }
        if let Some(max) = self.max
            && len > max
        {
            return Validity::invalid(format!("must be at most {max} characters"));
        }
        Validity::Valid
    }
}

/// Checks the value, as a JSON string instance, against a JSON Schema.
pub struct JsonSchema {
    validator: jsonschema::Validator,
}

impl JsonSchema {
    pub fn new(schema: &Value) -> Result<Self, FieldError> {
        let validator =
            jsonschema::validator_for(schema).map_err(|err| FieldError::InvalidSchema {
                message: err.to_string(),
            })?;
        Ok(Self { validator })
    }
}

impl Validator for JsonSchema {
    fn validate(&self, value: &str) -> Validity {
        let instance = Value::String(value.to_string());
        match self.validator.iter_errors(&instance).next() {
            Some(error) => Validity::invalid(error.to_string()),
            None => Validity::Valid,
        }
    }
}
