use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::host::Form;

use super::{footer::render_footer, rows::render_rows, theme::Theme};

pub struct UiContext<'a> {
    pub form: &'a Form,
    pub theme: &'a Theme,
    pub status_message: &'a str,
    pub error_count: usize,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(frame.area());

    render_rows(frame, chunks[0], ctx.form, ctx.theme);
    render_footer(frame, chunks[1], &ctx);
}
