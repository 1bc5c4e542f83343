use std::collections::HashMap;

use ratatui::style::{Color, Modifier, Style};

use crate::field::{ERROR_LABEL_CLASS, ERROR_ROW_CLASS};
use crate::shell::ClassList;

/// Resolves view class tokens into terminal styles.
#[derive(Debug, Clone)]
pub struct Theme {
    classes: HashMap<String, Style>,
    pub label: Style,
    pub value: Style,
    pub focused: Style,
    pub message: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let mut classes = HashMap::new();
        classes.insert(ERROR_ROW_CLASS.to_string(), Style::default().fg(Color::Red));
        classes.insert(
            ERROR_LABEL_CLASS.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        );
        Self {
            classes,
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),
            focused: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
            message: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

impl Theme {
    pub fn with_class(mut self, token: impl Into<String>, style: Style) -> Self {
        self.classes.insert(token.into(), style);
        self
    }

    pub fn class(&self, token: &str) -> Option<Style> {
        self.classes.get(token).copied()
    }

    /// Patches `base` with the style of every known class, in list order.
    pub fn resolve(&self, base: Style, classes: &ClassList) -> Style {
        classes
            .iter()
            .filter_map(|token| self.class(token))
            .fold(base, |style, patch| style.patch(patch))
    }
}
