use std::{cell::RefCell, rc::Rc};

use crate::input::{InputHandle, InputView, TextInput, shared};
use crate::shell::RowShell;

use super::validators::Email;
use super::{Field, FieldArgs, FieldController, FieldError};

fn controller_with_input(args: FieldArgs, input: &Rc<RefCell<TextInput>>) -> FieldController {
    let mut controller = FieldController::new(args, RowShell::new());
    let handle: InputHandle = input.clone();
    if let Some(value) = controller.attach_input(handle) {
        input.borrow_mut().set_value(&value);
    }
    controller
}

/// Single-line text entry.
#[derive(Debug)]
pub struct TextField {
    controller: FieldController,
    input: Rc<RefCell<TextInput>>,
}

impl TextField {
    pub fn new(args: FieldArgs) -> Self {
        Self::with_input(args, TextInput::new())
    }

    pub fn with_input(args: FieldArgs, input: TextInput) -> Self {
        let input = shared(input);
        let controller = controller_with_input(args, &input);
        Self { controller, input }
    }

    pub fn input(&self) -> &Rc<RefCell<TextInput>> {
        &self.input
    }
}

impl Field for TextField {
    fn controller(&self) -> &FieldController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FieldController {
        &mut self.controller
    }
}

/// E-mail entry. Falls back to the stock e-mail check when no validator is
/// given and ignores surrounding whitespace when reading the value.
#[derive(Debug)]
pub struct EmailField {
    controller: FieldController,
    input: Rc<RefCell<TextInput>>,
}

impl EmailField {
    pub fn new(mut args: FieldArgs) -> Self {
        if args.validator.is_none() {
            args.validator = Some(Box::new(Email::default()));
        }
        let input = shared(TextInput::new());
        let controller = controller_with_input(args, &input);
        Self { controller, input }
    }

    pub fn input(&self) -> &Rc<RefCell<TextInput>> {
        &self.input
    }
}

impl Field for EmailField {
    fn controller(&self) -> &FieldController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FieldController {
        &mut self.controller
    }

    fn get_value(&self) -> Result<String, FieldError> {
        Ok(self.controller.get_value()?.trim().to_string())
    }
}

#[derive(Debug)]
pub struct PasswordField {
    controller: FieldController,
    input: Rc<RefCell<TextInput>>,
}

impl PasswordField {
    pub fn new(args: FieldArgs) -> Self {
        let input = shared(TextInput::masked());
        let controller = controller_with_input(args, &input);
        Self { controller, input }
    }

    pub fn input(&self) -> &Rc<RefCell<TextInput>> {
        &self.input
    }
}

impl Field for PasswordField {
    fn controller(&self) -> &FieldController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FieldController {
        &mut self.controller
    }
}
