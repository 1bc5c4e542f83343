mod format;
mod input;
mod output;

pub use format::DocumentFormat;
pub use input::{load_form_definition, parse_document_str, parse_form_definition};
pub use output::{OutputDestination, OutputOptions, emit};
