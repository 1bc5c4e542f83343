#![deny(rust_2018_idioms)]

mod app;
pub mod field;
mod host;
mod io;
pub mod input;
mod presentation;
pub mod shell;

pub use app::{FormOptions, FormUI, KeyCommand, StatusLine, classify};
pub use field::{
    EmailField, Field, FieldArgs, FieldController, FieldError, LabelSpec, PasswordField,
    TextField, Validator, Validity, VisualState,
};
pub use host::{
    FieldDefinition, FieldIssue, FieldKind, Form, FormDefinition, FormReport, ValidatorSpec,
};
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, emit, load_form_definition,
    parse_document_str, parse_form_definition,
};
pub use presentation::{Theme, UiContext, draw, render_rows, row_lines};

pub mod prelude {
    pub use super::{Field, FieldArgs, FieldController, Form, FormUI, Validity};
}
