mod form_ui;
mod input;
mod options;
mod runtime;
mod status;
mod terminal;

pub use form_ui::FormUI;
pub use input::{KeyCommand, classify};
pub use options::FormOptions;
pub use status::StatusLine;
