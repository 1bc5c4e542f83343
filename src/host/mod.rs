mod definition;

use crossterm::event::KeyEvent;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::field::{Field, FieldError};

pub use definition::{FieldDefinition, FieldKind, FormDefinition, ValidatorSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub name: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    pub issues: Vec<FieldIssue>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Ordered table of field rows keyed by row name.
///
/// Routes taps and keys to the focused row and validates every row on its
/// own; rows never see each other's values.
#[derive(Debug, Default)]
pub struct Form {
    title: Option<String>,
    fields: IndexMap<String, Box<dyn Field>>,
    focused: Option<usize>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definition(definition: FormDefinition) -> Result<Self, FieldError> {
        let mut form = Form::new();
        form.title = definition.title;
        for field in definition.fields {
            form.push(field.into_field()?);
        }
        Ok(form)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Adds a row; a row with the same name is replaced in place.
    pub fn push(&mut self, field: Box<dyn Field>) {
        let name = field.name().to_string();
        self.fields.insert(name, field);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&dyn Field> {
        self.fields.get(name).map(|field| field.as_ref() as &dyn Field)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Box<dyn Field>> {
        self.fields.get_mut(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &dyn Field> {
        self.fields.values().map(|field| field.as_ref() as &dyn Field)
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_name(&self) -> Option<&str> {
        self.focused
            .and_then(|index| self.fields.get_index(index))
            .map(|(name, _)| name.as_str())
    }

    /// Row tap: blurs every other row and focuses the tapped one.
    pub fn tap(&mut self, name: &str) -> Result<(), FieldError> {
        let index = self
            .fields
            .get_index_of(name)
            .ok_or_else(|| FieldError::unknown_field(name))?;
        self.focus_index(index)
    }

    pub fn focus_next(&mut self) -> Result<(), FieldError> {
        if self.fields.is_empty() {
            return Ok(());
        }
        let next = match self.focused {
            Some(index) => (index + 1) % self.fields.len(),
            None => 0,
        };
        self.focus_index(next)
    }

    pub fn focus_prev(&mut self) -> Result<(), FieldError> {
        if self.fields.is_empty() {
            return Ok(());
        }
        let len = self.fields.len();
        let prev = match self.focused {
            Some(0) | None => len - 1,
            Some(index) => index - 1,
        };
        self.focus_index(prev)
    }

    /// Focuses the row first; the other rows are only blurred once that
    /// succeeded, so a failed focus leaves the previous row focused.
    fn focus_index(&mut self, index: usize) -> Result<(), FieldError> {
        let Some((name, field)) = self.fields.get_index_mut(index) else {
            return Ok(());
        };
        field.focus()?;
        debug!(field = %name, "row focused");
        for (idx, (_, field)) in self.fields.iter_mut().enumerate() {
            if idx != index {
                field.blur();
            }
        }
        self.focused = Some(index);
        Ok(())
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut Box<dyn Field>> {
        let index = self.focused?;
        self.fields.get_index_mut(index).map(|(_, field)| field)
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Result<bool, FieldError> {
        match self.focused_field_mut() {
            Some(field) => field.handle_key(key),
            None => Ok(false),
        }
    }

    pub fn validate(&mut self) -> Result<FormReport, FieldError> {
        let mut report = FormReport::default();
        for (name, field) in self.fields.iter_mut() {
            let validity = field.is_valid()?;
            if !validity.is_valid() {
                report.issues.push(FieldIssue {
                    name: name.clone(),
                    message: validity.message().map(str::to_string),
                });
            }
        }
        debug!(issues = report.issues.len(), "form validated");
        Ok(report)
    }

    pub fn values(&self) -> Result<Map<String, Value>, FieldError> {
        let mut values = Map::new();
        for (name, field) in &self.fields {
            values.insert(name.clone(), Value::String(field.get_value()?));
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldArgs, FieldController, TextField};
    use crate::shell::RowShell;
    use serde_json::json;

    fn sample_form() -> Form {
        let mut form = Form::new();
        form.push(Box::new(TextField::new(
            FieldArgs::new("first").with_label("First"),
        )));
        form.push(Box::new(TextField::new(
            FieldArgs::new("second").required(true),
        )));
        form
    }

    #[test]
    fn tap_focuses_only_the_tapped_row() {
        let mut form = sample_form();
        form.tap("first").expect("known row");
        form.tap("second").expect("known row");
        assert_eq!(form.focused_name(), Some("second"));
        assert!(!form.field("first").expect("first").controller().is_focused());
        assert!(form.field("second").expect("second").controller().is_focused());
    }

    #[test]
    fn tap_on_unknown_row_is_an_error() {
        let mut form = sample_form();
        assert_eq!(form.tap("missing"), Err(FieldError::unknown_field("missing")));
    }

    #[test]
    fn failed_focus_keeps_the_previous_row_focused() {
        let mut form = sample_form();
        form.push(Box::new(FieldController::new(
            FieldArgs::new("detached"),
            RowShell::new(),
        )));
        form.tap("first").expect("known row");
        assert_eq!(
            form.tap("detached"),
            Err(FieldError::input_missing("detached"))
        );
        assert_eq!(form.focused_name(), Some("first"));
        assert!(form.field("first").expect("first").controller().is_focused());
    }

    #[test]
    fn focus_cycles_through_rows() {
        let mut form = sample_form();
        form.focus_next().expect("rows attached");
        assert_eq!(form.focused_name(), Some("first"));
        form.focus_next().expect("rows attached");
        form.focus_next().expect("rows attached");
        assert_eq!(form.focused_name(), Some("first"));
        form.focus_prev().expect("rows attached");
        assert_eq!(form.focused_name(), Some("second"));
    }

    #[test]
    fn validate_reports_each_invalid_row() {
        let mut form = sample_form();
        let report = form.validate().expect("rows attached");
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].name, "second");
        form.field_mut("second")
            .expect("second")
            .set_value("filled")
            .expect("input attached");
        assert!(form.validate().expect("rows attached").is_valid());
    }

    #[test]
    fn values_are_collected_in_row_order() {
        let mut form = sample_form();
        form.field_mut("first")
            .expect("first")
            .set_value("one")
            .expect("input attached");
        let values = form.values().expect("rows attached");
        assert_eq!(Value::Object(values), json!({"first": "one", "second": ""}));
    }

    #[test]
    fn definitions_build_a_form() {
        let definition: FormDefinition = serde_json::from_value(json!({
            "title": "Sign up",
            "fields": [
                {"name": "email", "kind": "email", "required": true},
                {"name": "password", "kind": "password"}
            ]
        }))
        .expect("definition");
        let form = Form::from_definition(definition).expect("form builds");
        assert_eq!(form.title(), Some("Sign up"));
        assert_eq!(form.len(), 2);
    }
}
