use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::field::Field;
use crate::host::Form;

use super::theme::Theme;

/// Projects one field row into lines: label, control area starting at the
/// wrapper's `left`, then the error message (if any) wrapped under the
/// control.
pub fn row_lines(field: &dyn Field, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let controller = field.controller();
    let shell = controller.shell();
    let left = shell.control.left as usize;

    let label_style = theme.resolve(theme.label, &shell.label.classes);
    let label = pad_to(&shell.label.text, left);

    let mut value_style = theme.resolve(theme.value, &shell.row.classes);
    if controller.is_focused() {
        value_style = value_style.patch(theme.focused);
    }
    let value = shell
        .control
        .children()
        .iter()
        .map(|input| input.borrow().display_value())
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(value, value_style),
    ])];

    if let Some(message) = controller.error_message() {
        let room = (width as usize).saturating_sub(left).max(1);
        let indent = " ".repeat(left);
        for chunk in wrap(message, room) {
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(chunk.into_owned(), theme.message),
            ]));
        }
    }
    lines
}

pub fn render_rows(frame: &mut Frame<'_>, area: Rect, form: &Form, theme: &Theme) {
    let block = Block::default()
        .title(form.title().unwrap_or("Form").to_string())
        .borders(Borders::ALL);
    let content_width = area.width.saturating_sub(2);
    let window = area.height.saturating_sub(2) as usize;

    if form.is_empty() {
        let empty = Paragraph::new(Line::from("This form has no fields")).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::new();
    let mut spans = Vec::with_capacity(form.len());
    for field in form.fields() {
        let row = row_lines(field, theme, content_width);
        spans.push((lines.len(), row.len()));
        lines.extend(row);
    }

    let offset = form
        .focused_index()
        .and_then(|index| spans.get(index).copied())
        .map(|(start, len)| scroll_offset(start, len, window))
        .unwrap_or(0);
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).block(block).scroll((offset, 0)), area);
}

/// First visible line such that the focused row `[start, start + len)` sits
/// inside a window of `window` lines. Rows taller than the window keep their
/// first line visible.
fn scroll_offset(start: usize, len: usize, window: usize) -> usize {
    if window == 0 {
        return start;
    }
    let end = start + len;
    if end <= window {
        0
    } else {
        (end - window).min(start)
    }
}

fn pad_to(text: &str, width: usize) -> String {
    let mut padded = text.to_string();
    let current = text.width();
    if current < width {
        padded.push_str(&" ".repeat(width - current));
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldArgs, PasswordField, TextField, Validity};
    use ratatui::style::{Color, Modifier};

    #[test]
    fn label_fills_up_to_the_control_column() {
        let field = TextField::new(FieldArgs::new("city").with_label("City").with_value("Delft"));
        let lines = row_lines(&field, &Theme::default(), 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "City ");
        assert_eq!(lines[0].spans[1].content, "Delft");
    }

    #[test]
    fn error_state_styles_label_and_appends_message() {
        let mut field = TextField::new(
            FieldArgs::new("code")
                .with_label("Code")
                .with_validator(|_: &str| Validity::invalid("code is not recognised")),
        );
        field.is_valid().expect("input attached");
        let lines = row_lines(&field, &Theme::default(), 14);
        let label = &lines[0].spans[0];
        assert_eq!(label.style.fg, Some(Color::Red));
        assert!(label.style.add_modifier.contains(Modifier::BOLD));
        assert!(lines.len() > 2, "message wraps into the narrow control area");
        assert_eq!(lines[1].spans[0].content, "     ");
    }

    #[test]
    fn focused_row_uses_focus_style() {
        let mut field = TextField::new(FieldArgs::new("focus").with_label("Focus"));
        field.focus().expect("input attached");
        let lines = row_lines(&field, &Theme::default(), 40);
        assert!(
            lines[0].spans[1]
                .style
                .add_modifier
                .contains(Modifier::UNDERLINED)
        );
    }

    #[test]
    fn password_rows_show_masked_value() {
        let field = PasswordField::new(FieldArgs::new("pw").with_label("PIN").with_value("1234"));
        let lines = row_lines(&field, &Theme::default(), 40);
        assert_eq!(lines[0].spans[1].content, "••••");
    }

    #[test]
    fn scroll_keeps_the_focused_row_in_the_window() {
        assert_eq!(scroll_offset(3, 1, 10), 0);
        assert_eq!(scroll_offset(19, 1, 8), 12);
        assert_eq!(scroll_offset(10, 3, 8), 5);
        assert_eq!(scroll_offset(10, 12, 8), 10);
        assert_eq!(scroll_offset(4, 1, 0), 4);
    }
}
