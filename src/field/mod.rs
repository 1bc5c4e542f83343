mod args;
mod error;
mod kinds;
pub mod validators;
mod validity;
mod visual;

use std::fmt;

use crossterm::event::KeyEvent;
use tracing::{debug, warn};

use crate::input::InputHandle;
use crate::shell::RowShell;

pub use args::{FieldArgs, LabelSpec};
pub use error::FieldError;
pub use kinds::{EmailField, PasswordField, TextField};
pub use validity::{REQUIRED_MESSAGE, Validator, Validity};
pub use visual::{ERROR_LABEL_CLASS, ERROR_ROW_CLASS, VisualState};

/// Base controller shared by every field type.
///
/// It arranges the row shell, holds the construction-time value until an
/// input is attached, and runs the required / custom validation pass.
pub struct FieldController {
    shell: RowShell,
    pub required: bool,
    pub validator: Option<Box<dyn Validator>>,
    input: Option<InputHandle>,
    pending_value: Option<String>,
    visual_state: VisualState,
    error_message: Option<String>,
}

impl FieldController {
    pub fn new(args: FieldArgs, mut shell: RowShell) -> Self {
        let properties = args.label_properties();
        let FieldArgs {
            name,
            required,
            value,
            validator,
            ..
        } = args;

        shell.row.name = name;
        if !properties.is_empty() {
            shell.label.apply_properties(&properties);
        }
        shell.control.left = shell.label.rendered_width();

        Self {
            shell,
            required,
            validator,
            input: None,
            pending_value: value,
            visual_state: VisualState::Normal,
            error_message: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.shell.row.name
    }

    pub fn shell(&self) -> &RowShell {
        &self.shell
    }

    pub fn visual_state(&self) -> VisualState {
        self.visual_state
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn has_pending_value(&self) -> bool {
        self.pending_value.is_some()
    }

    pub fn input(&self) -> Result<&InputHandle, FieldError> {
        self.input
            .as_ref()
            .ok_or_else(|| FieldError::input_missing(self.name()))
    }

    /// Adopts `input` as canonical when none is attached yet and inserts it
    /// into the control wrapper. Returns the pending value, which the caller
    /// must apply; the slot is cleared.
    pub fn attach_input(&mut self, input: InputHandle) -> Option<String> {
        if self.input.is_none() {
            self.input = Some(input.clone());
        }
        if self.shell.control.contains(&input) {
            warn!(field = %self.name(), "input inserted into the control wrapper twice");
        }
        self.shell.control.add(input);
        debug!(
            field = %self.name(),
            pending = self.pending_value.is_some(),
            "input attached"
        );
        self.pending_value.take()
    }

    pub fn set_input(&mut self, input: InputHandle) -> Result<(), FieldError> {
        if let Some(value) = self.attach_input(input) {
            self.set_value(&value)?;
        }
        Ok(())
    }

    pub fn show_error(&mut self, show: bool) {
        self.visual_state = VisualState::from_error(show);
        if !show {
            self.error_message = None;
        }
        self.project_visual_state();
    }

    pub fn focus(&mut self) -> Result<(), FieldError> {
        self.input()?.borrow_mut().focus();
        Ok(())
    }

    pub fn blur(&mut self) {
        if let Some(input) = &self.input {
            input.borrow_mut().blur();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.input
            .as_ref()
            .is_some_and(|input| input.borrow().is_focused())
    }

    pub fn get_value(&self) -> Result<String, FieldError> {
        Ok(self.input()?.borrow().value())
    }

    pub fn set_value(&mut self, value: &str) -> Result<(), FieldError> {
        self.input()?.borrow_mut().set_value(value);
        Ok(())
    }

    pub fn is_valid(&mut self) -> Result<Validity, FieldError> {
        let value = self.get_value()?;
        let validity = self.check(&value);
        self.apply_validity(&validity);
        Ok(validity)
    }

    /// Required check first, then the custom validator.
    pub fn check(&self, value: &str) -> Validity {
        if self.required && value.is_empty() {
            Validity::invalid(REQUIRED_MESSAGE)
        } else if let Some(validator) = &self.validator {
            validator.validate(value)
        } else {
            Validity::Valid
        }
    }

    pub fn apply_validity(&mut self, validity: &Validity) {
        self.show_error(!validity.is_valid());
        self.error_message = validity.message().map(str::to_string);
        debug!(
            field = %self.name(),
            valid = validity.is_valid(),
            message = ?self.error_message,
            "field validated"
        );
    }

    fn project_visual_state(&mut self) {
        let RowShell { row, label, .. } = &mut self.shell;
        if self.visual_state.is_error() {
            row.classes.add(ERROR_ROW_CLASS);
            label.classes.add(ERROR_LABEL_CLASS);
        } else {
            row.classes.remove(ERROR_ROW_CLASS);
            label.classes.remove(ERROR_LABEL_CLASS);
        }
    }
}

impl fmt::Debug for FieldController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldController")
            .field("shell", &self.shell)
            .field("required", &self.required)
            .field("validator", &self.validator.is_some())
            .field("input", &self.input)
            .field("pending_value", &self.pending_value)
            .field("visual_state", &self.visual_state)
            .field("error_message", &self.error_message)
            .finish()
    }
}

/// A concrete field type built around a [`FieldController`].
///
/// Implementors only provide access to their controller; every other
/// method has a default that may be overridden. `set_input` and `is_valid`
/// go through `set_value` / `get_value`, so overrides of those are honored.
pub trait Field: fmt::Debug {
    fn controller(&self) -> &FieldController;
    fn controller_mut(&mut self) -> &mut FieldController;

    fn name(&self) -> &str {
        self.controller().name()
    }

    fn set_input(&mut self, input: InputHandle) -> Result<(), FieldError> {
        match self.controller_mut().attach_input(input) {
            Some(value) => self.set_value(&value),
            None => Ok(()),
        }
    }

    fn focus(&mut self) -> Result<(), FieldError> {
        self.controller_mut().focus()
    }

    fn blur(&mut self) {
        self.controller_mut().blur();
    }

    fn get_value(&self) -> Result<String, FieldError> {
        self.controller().get_value()
    }

    fn set_value(&mut self, value: &str) -> Result<(), FieldError> {
        self.controller_mut().set_value(value)
    }

    fn is_valid(&mut self) -> Result<Validity, FieldError> {
        let value = self.get_value()?;
        let validity = self.controller().check(&value);
        self.controller_mut().apply_validity(&validity);
        Ok(validity)
    }

    fn show_error(&mut self, show: bool) {
        self.controller_mut().show_error(show);
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Result<bool, FieldError> {
        Ok(self.controller().input()?.borrow_mut().handle_key(key))
    }
}

impl Field for FieldController {
    fn controller(&self) -> &FieldController {
        self
    }

    fn controller_mut(&mut self) -> &mut FieldController {
        self
    }
}
