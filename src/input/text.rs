use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::InputView;

const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    buffer: String,
    focused: bool,
    masked: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }
}

impl InputView for TextInput {
    fn value(&self) -> String {
        self.buffer.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.buffer = value.to_string();
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                self.buffer.push(ch);
                true
            }
            KeyCode::Backspace => self.buffer.pop().is_some(),
            KeyCode::Delete => {
                let changed = !self.buffer.is_empty();
                self.buffer.clear();
                changed
            }
            _ => false,
        }
    }

    fn display_value(&self) -> String {
        if self.masked {
            MASK_CHAR.to_string().repeat(self.buffer.chars().count())
        } else {
            self.buffer.clone()
        }
    }
}
