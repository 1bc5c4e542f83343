use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::host::{Form, FormDefinition};

use super::{options::FormOptions, runtime::App};

/// Runs a [`Form`] interactively in the terminal.
#[derive(Debug)]
pub struct FormUI {
    form: Form,
    options: FormOptions,
    initial_focus: Option<String>,
}

impl FormUI {
    pub fn new(form: Form) -> Self {
        Self {
            form,
            options: FormOptions::default(),
            initial_focus: None,
        }
    }

    pub fn from_definition(definition: FormDefinition) -> Result<Self> {
        let form = Form::from_definition(definition).context("failed to build form fields")?;
        Ok(Self::new(form))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_title(title);
        self
    }

    pub fn with_options(mut self, options: FormOptions) -> Self {
        self.options = options;
        self
    }

    /// Row to tap before the first frame is drawn.
    pub fn with_initial_focus(mut self, name: impl Into<String>) -> Self {
        self.initial_focus = Some(name.into());
        self
    }

    /// Returns the collected values once the form validates and is saved,
    /// or `None` when the user quits.
    pub fn run(self) -> Result<Option<Map<String, Value>>> {
        let FormUI {
            form,
            options,
            initial_focus,
        } = self;

        let mut form = match &options.title {
            Some(title) => form.with_title(title.clone()),
            None => form,
        };
        if let Some(name) = initial_focus {
            form.tap(&name)
                .with_context(|| format!("cannot focus row '{name}'"))?;
        }

        let mut app = App::new(form, options);
        app.run()
    }
}
