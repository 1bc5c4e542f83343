/// Class token added to the row view while the field shows an error.
pub const ERROR_ROW_CLASS: &str = "errorRow";
/// Class token added to the label view while the field shows an error.
pub const ERROR_LABEL_CLASS: &str = "errorLabel";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisualState {
    #[default]
    Normal,
    Error,
}

impl VisualState {
    pub fn from_error(show: bool) -> Self {
        if show {
            VisualState::Error
        } else {
            VisualState::Normal
        }
    }

    pub fn is_error(self) -> bool {
        self == VisualState::Error
    }
}
