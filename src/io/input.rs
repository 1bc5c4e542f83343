use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::host::FormDefinition;

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Value>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

pub fn parse_form_definition(contents: &str, format: DocumentFormat) -> Result<FormDefinition> {
    let document = parse_document_str(contents, format)?;
    serde_json::from_value(document).context("document is not a form definition")
}

pub fn load_form_definition(path: &Path) -> Result<FormDefinition> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read form definition {}", path.display()))?;
    parse_form_definition(&contents, DocumentFormat::from_path(path))
        .with_context(|| format!("failed to load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FieldKind;

    #[test]
    fn parses_json_definitions() {
        let definition = parse_form_definition(
            r#"{"title": "Login", "fields": [{"name": "user"}, {"name": "pw", "kind": "password"}]}"#,
            DocumentFormat::Json,
        )
        .expect("definition parses");
        assert_eq!(definition.title.as_deref(), Some("Login"));
        assert_eq!(definition.fields[1].kind, FieldKind::Password);
    }

    #[test]
    fn rejects_documents_without_field_names() {
        let result = parse_form_definition(r#"{"fields": [{"label": "x"}]}"#, DocumentFormat::Json);
        assert!(result.is_err());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parses_toml_definitions() {
        let contents = r#"
title = "Contact"

[[fields]]
name = "email"
kind = "email"
required = true
"#;
        let definition =
            parse_form_definition(contents, DocumentFormat::Toml).expect("definition parses");
        assert!(definition.fields[0].required);
    }
}
