#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// An operation needed the canonical input before `set_input` ran.
    InputMissing { name: String },
    UnknownField { name: String },
    InvalidPattern { pattern: String, message: String },
    InvalidSchema { message: String },
}

impl FieldError {
    pub fn input_missing(name: impl Into<String>) -> Self {
        FieldError::InputMissing { name: name.into() }
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        FieldError::UnknownField { name: name.into() }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::InputMissing { name } => {
                write!(f, "{name}: no input view attached yet")
            }
            FieldError::UnknownField { name } => write!(f, "{name}: no such field"),
            FieldError::InvalidPattern { pattern, message } => {
                write!(f, "invalid pattern '{pattern}': {message}")
            }
            FieldError::InvalidSchema { message } => write!(f, "invalid schema: {message}"),
        }
    }
}

impl std::error::Error for FieldError {}
