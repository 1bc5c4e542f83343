mod footer;
mod rows;
mod theme;
mod view;

pub use rows::{render_rows, row_lines};
pub use theme::Theme;
pub use view::{UiContext, draw};
