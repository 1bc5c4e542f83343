use serde::Deserialize;
use serde_json::{Map, Value};

use super::validity::Validator;

/// Label input: plain text or a map of label properties.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LabelSpec {
    Text(String),
    Properties(Map<String, Value>),
}

impl From<&str> for LabelSpec {
    fn from(text: &str) -> Self {
        LabelSpec::Text(text.to_string())
    }
}

impl From<String> for LabelSpec {
    fn from(text: String) -> Self {
        LabelSpec::Text(text)
    }
}

/// Construction arguments for a field controller.
#[derive(Default)]
pub struct FieldArgs {
    pub name: String,
    pub label: Option<LabelSpec>,
    /// Localization key, applied to the label as `textid`.
    pub label_id: Option<String>,
    pub required: bool,
    pub value: Option<String>,
    pub validator: Option<Box<dyn Validator>>,
}

impl FieldArgs {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<LabelSpec>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_label_id(mut self, label_id: impl Into<String>) -> Self {
        self.label_id = Some(label_id.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_validator<V>(mut self, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Label properties to apply, with plain text promoted to `text`.
    pub fn label_properties(&self) -> Map<String, Value> {
        let mut properties = match &self.label {
            Some(LabelSpec::Text(text)) => {
                let mut map = Map::new();
                map.insert("text".to_string(), Value::String(text.clone()));
                map
            }
            Some(LabelSpec::Properties(map)) => map.clone(),
            None => Map::new(),
        };
        if let Some(label_id) = &self.label_id {
            properties.insert("textid".to_string(), Value::String(label_id.clone()));
        }
        properties
    }
}

impl std::fmt::Debug for FieldArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldArgs")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("label_id", &self.label_id)
            .field("required", &self.required)
            .field("value", &self.value)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_label_becomes_text_property() {
        let args = FieldArgs::new("email").with_label("E-mail");
        assert_eq!(
            Value::Object(args.label_properties()),
            json!({"text": "E-mail"})
        );
    }

    #[test]
    fn label_id_is_merged_into_properties() {
        let label: LabelSpec = serde_json::from_value(json!({"width": 10})).expect("label");
        let args = FieldArgs::new("email")
            .with_label(label)
            .with_label_id("email_label");
        assert_eq!(
            Value::Object(args.label_properties()),
            json!({"width": 10, "textid": "email_label"})
        );
    }

    #[test]
    fn no_label_means_no_properties() {
        assert!(FieldArgs::new("plain").label_properties().is_empty());
    }
}
