use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::field::validators::{Email, JsonSchema, Length, Pattern};
use crate::field::{
    EmailField, Field, FieldArgs, FieldError, LabelSpec, PasswordField, TextField, Validator,
};

#[derive(Debug, Clone, Deserialize)]
pub struct FormDefinition {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub label: Option<LabelSpec>,
    #[serde(default, rename = "labelid")]
    pub label_id: Option<String>,
    #[serde(default, deserialize_with = "strictly_true")]
    pub required: bool,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub validate: Option<ValidatorSpec>,
}

/// Declarative form of the stock validators.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidatorSpec {
    Email {
        message: Option<String>,
    },
    Pattern {
        pattern: String,
        message: Option<String>,
    },
    Length {
        min: Option<usize>,
        max: Option<usize>,
    },
    Schema {
        schema: Value,
    },
}

impl ValidatorSpec {
    pub fn build(&self) -> Result<Box<dyn Validator>, FieldError> {
        let validator: Box<dyn Validator> = match self {
            ValidatorSpec::Email { message } => Box::new(match message {
                Some(message) => Email::with_message(message.clone()),
                None => Email::default(),
            }),
            ValidatorSpec::Pattern { pattern, message } => {
                let mut validator = Pattern::new(pattern)?;
                if let Some(message) = message {
                    validator = validator.with_message(message.clone());
                }
                Box::new(validator)
            }
            ValidatorSpec::Length { min, max } => Box::new(Length {
                min: *min,
                max: *max,
            }),
            ValidatorSpec::Schema { schema } => Box::new(JsonSchema::new(schema)?),
        };
        Ok(validator)
    }
}

impl FieldDefinition {
    pub fn into_field(self) -> Result<Box<dyn Field>, FieldError> {
        let validator = self.validate.as_ref().map(ValidatorSpec::build).transpose()?;
        let args = FieldArgs {
            name: self.name,
            label: self.label,
            label_id: self.label_id,
            required: self.required,
            value: self.value,
            validator,
        };
        let field: Box<dyn Field> = match self.kind {
            FieldKind::Text => Box::new(TextField::new(args)),
            FieldKind::Email => Box::new(EmailField::new(args)),
            FieldKind::Password => Box::new(PasswordField::new(args)),
        };
        Ok(field)
    }
}

/// Only a literal `true` marks a field as required.
fn strictly_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}
