use std::time::Duration;

use crate::presentation::Theme;

pub const DEFAULT_HELP: &str =
    "Up/Down move • Enter focus • type to edit • Ctrl+S validate and save • Ctrl+Q quit";

#[derive(Debug, Clone)]
pub struct FormOptions {
    pub title: Option<String>,
    pub tick_rate: Duration,
    pub auto_validate: bool,
    pub show_help: bool,
    pub theme: Theme,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            title: None,
            tick_rate: Duration::from_millis(250),
            auto_validate: true,
            show_help: true,
            theme: Theme::default(),
        }
    }
}

impl FormOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Re-validate the focused row after every edit.
    pub fn with_auto_validate(mut self, enabled: bool) -> Self {
        self.auto_validate = enabled;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn help_text(&self) -> Option<&'static str> {
        self.show_help.then_some(DEFAULT_HELP)
    }
}
