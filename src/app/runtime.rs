use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::Frame;
use serde_json::{Map, Value};
use tracing::info;

use crate::host::Form;
use crate::presentation::{UiContext, draw};

use super::{
    input::{KeyCommand, classify},
    options::FormOptions,
    status::StatusLine,
    terminal::FormScreen,
};

pub(crate) struct App {
    form: Form,
    options: FormOptions,
    status: StatusLine,
    error_count: usize,
    should_quit: bool,
    result: Option<Map<String, Value>>,
}

impl App {
    pub(crate) fn new(form: Form, options: FormOptions) -> Self {
        Self {
            form,
            options,
            status: StatusLine::new(),
            error_count: 0,
            should_quit: false,
            result: None,
        }
    }

    pub(crate) fn run(&mut self) -> Result<Option<Map<String, Value>>> {
        let mut screen = FormScreen::enter()?;
        if self.form.focused_index().is_none() {
            self.form.focus_next()?;
        }
        while !self.should_quit {
            screen.draw(|frame| self.draw(frame))?;
            if event::poll(self.options.tick_rate)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key)?;
            }
        }
        Ok(self.result.take())
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        let status = self.status.message();
        draw(
            frame,
            UiContext {
                form: &self.form,
                theme: &self.options.theme,
                status_message: &status,
                error_count: self.error_count,
                help: self.options.help_text(),
            },
        );
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match classify(&key) {
            KeyCommand::Save => self.on_save()?,
            KeyCommand::Quit => self.should_quit = true,
            KeyCommand::NextField => self.form.focus_next()?,
            KeyCommand::PrevField => self.form.focus_prev()?,
            KeyCommand::Submit => {
                self.validate_focused()?;
                self.form.focus_next()?;
            }
            KeyCommand::ResetStatus => self.status = StatusLine::Ready,
            KeyCommand::Edit(key) => {
                if self.form.handle_key(&key)? {
                    if let Some(name) = self.form.focused_name() {
                        self.status = StatusLine::Editing(name.to_string());
                    }
                    if self.options.auto_validate {
                        self.validate_focused()?;
                    }
                }
            }
            KeyCommand::None => {}
        }
        Ok(())
    }

    fn validate_focused(&mut self) -> Result<()> {
        if let Some(field) = self.form.focused_field_mut() {
            field.is_valid()?;
        }
        self.refresh_error_count();
        Ok(())
    }

    fn on_save(&mut self) -> Result<()> {
        let report = self.form.validate()?;
        self.refresh_error_count();
        self.status = StatusLine::from_report(&report);
        if report.is_valid() {
            self.result = Some(self.form.values()?);
            self.should_quit = true;
            info!(fields = self.form.len(), "form submitted");
        }
        Ok(())
    }

    fn refresh_error_count(&mut self) {
        self.error_count = self
            .form
            .fields()
            .filter(|field| field.controller().visual_state().is_error())
            .count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{EmailField, FieldArgs, TextField};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        let mut form = Form::new();
        form.push(Box::new(TextField::new(FieldArgs::new("name").required(true))));
        form.push(Box::new(EmailField::new(FieldArgs::new("email"))));
        App::new(form, FormOptions::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(key(KeyCode::Char(ch))).expect("key handled");
        }
    }

    #[test]
    fn save_with_errors_keeps_running() {
        let mut app = app();
        app.form.focus_next().expect("rows attached");
        app.handle_key(ctrl('s')).expect("key handled");
        assert!(!app.should_quit);
        assert_eq!(app.error_count, 2);
        assert!(app.result.is_none());
        assert_eq!(
            app.status,
            StatusLine::Blocked(vec!["name".into(), "email".into()])
        );
    }

    #[test]
    fn typing_and_saving_collects_values() {
        let mut app = app();
        app.form.focus_next().expect("rows attached");
        type_text(&mut app, "Ada");
        app.handle_key(key(KeyCode::Down)).expect("key handled");
        type_text(&mut app, "ada@example.com");
        app.handle_key(ctrl('s')).expect("key handled");
        assert!(app.should_quit);
        let values = app.result.clone().expect("values collected");
        assert_eq!(values.get("name"), Some(&Value::from("Ada")));
        assert_eq!(values.get("email"), Some(&Value::from("ada@example.com")));
    }

    #[test]
    fn auto_validation_marks_the_edited_row() {
        let mut app = app();
        app.form.tap("email").expect("known row");
        type_text(&mut app, "ada@");
        assert_eq!(app.error_count, 1);
        let email = app.form.field("email").expect("email row");
        assert!(email.controller().visual_state().is_error());
        type_text(&mut app, "example.com");
        assert_eq!(app.error_count, 0);
    }

    #[test]
    fn submit_moves_to_the_next_row() {
        let mut app = app();
        app.form.focus_next().expect("rows attached");
        app.handle_key(key(KeyCode::Enter)).expect("key handled");
        assert_eq!(app.form.focused_name(), Some("email"));
        assert_eq!(app.error_count, 1);
    }
}
