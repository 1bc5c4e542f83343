use std::rc::Rc;

use serde_json::{Map, Value};
use unicode_width::UnicodeWidthStr;

use crate::input::InputHandle;

/// Columns between the label text and the control area.
pub const LABEL_GUTTER: u16 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn add(&mut self, token: &str) {
        if !self.contains(token) {
            self.0.push(token.to_string());
        }
    }

    pub fn remove(&mut self, token: &str) {
        self.0.retain(|class| class != token);
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|class| class == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RowView {
    /// Identifier the host uses to route taps back to the field.
    pub name: String,
    pub classes: ClassList,
}

#[derive(Debug, Clone, Default)]
pub struct LabelView {
    pub text: String,
    pub text_id: Option<String>,
    pub width: Option<u16>,
    /// Properties without a dedicated slot, kept for the host theme.
    pub properties: Map<String, Value>,
    pub classes: ClassList,
}

impl LabelView {
    pub fn apply_properties(&mut self, properties: &Map<String, Value>) {
        for (key, value) in properties {
            match (key.as_str(), value) {
                ("text", Value::String(text)) => self.text = text.clone(),
                ("textid", Value::String(id)) => self.text_id = Some(id.clone()),
                ("width", Value::Number(width)) => {
                    self.width = width
                        .as_u64()
                        .map(|width| width.min(u16::MAX as u64) as u16);
                }
                _ => {
                    self.properties.insert(key.clone(), value.clone());
                }
            }
        }
    }

    /// Width the label occupies once drawn, gutter included.
    pub fn rendered_width(&self) -> u16 {
        if let Some(width) = self.width {
            return width;
        }
        if self.text.is_empty() {
            return 0;
        }
        let text_width = self.text.width().min(u16::MAX as usize) as u16;
        text_width.saturating_add(LABEL_GUTTER)
    }
}

#[derive(Debug, Default)]
pub struct ControlView {
    /// Column where the control area starts, relative to the row.
    pub left: u16,
    children: Vec<InputHandle>,
}

impl ControlView {
    pub fn add(&mut self, input: InputHandle) {
        self.children.push(input);
    }

    pub fn contains(&self, input: &InputHandle) -> bool {
        self.children.iter().any(|child| Rc::ptr_eq(child, input))
    }

    pub fn children(&self) -> &[InputHandle] {
        &self.children
    }
}

/// The row, label and control wrapper a field controller arranges.
#[derive(Debug, Default)]
pub struct RowShell {
    pub row: RowView,
    pub label: LabelView,
    pub control: ControlView,
}

impl RowShell {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn class_list_ignores_duplicates() {
        let mut classes = ClassList::default();
        classes.add("errorRow");
        classes.add("errorRow");
        assert_eq!(classes.iter().count(), 1);
        classes.remove("errorRow");
        assert!(classes.is_empty());
    }

    #[test]
    fn label_properties_fill_known_slots() {
        let mut label = LabelView::default();
        let properties = json!({"text": "E-mail", "textid": "email_label", "color": "blue"});
        label.apply_properties(properties.as_object().expect("object"));
        assert_eq!(label.text, "E-mail");
        assert_eq!(label.text_id.as_deref(), Some("email_label"));
        assert_eq!(label.properties.get("color"), Some(&json!("blue")));
        assert_eq!(label.rendered_width(), 7);
    }

    #[test]
    fn explicit_width_wins_over_text_width() {
        let mut label = LabelView::default();
        let properties = json!({"text": "Name", "width": 12});
        label.apply_properties(properties.as_object().expect("object"));
        assert_eq!(label.rendered_width(), 12);
    }

    #[test]
    fn empty_label_takes_no_space() {
        assert_eq!(LabelView::default().rendered_width(), 0);
    }
}
