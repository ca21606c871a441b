use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::super::constants::{CREATE_LABEL, INPUT_PLACEHOLDER};
use super::super::view::{Focus, Ui};

impl Ui {
    pub(in crate::tui) fn draw_input(&self, f: &mut Frame<'_>, area: Rect) {
        let focused = self.focus == Focus::Input;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let submit_key = self
            .keybindings
            .input
            .submit
            .first()
            .map_or("?", String::as_str);
        let block = Block::default()
            .title(format!(" {CREATE_LABEL} [{submit_key}] "))
            .title_alignment(Alignment::Right)
            .borders(Borders::ALL)
            .border_style(border_style);

        let content = if self.input.is_empty() {
            Line::from(Span::styled(
                INPUT_PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(self.input.value())
        };

        // Scroll and cursor are in display columns; wide characters take two.
        let inner = block.inner(area);
        let visible_width = usize::from(inner.width.saturating_sub(1));
        let cursor_width = Span::raw(self.input.before_cursor()).width();
        let scroll = cursor_width.saturating_sub(visible_width);
        let scroll_x = u16::try_from(scroll).unwrap_or(u16::MAX);
        f.render_widget(Paragraph::new(content).block(block).scroll((0, scroll_x)), area);

        if focused {
            let column = cursor_width - scroll;
            let x = inner
                .x
                .saturating_add(u16::try_from(column).unwrap_or(u16::MAX))
                .min(inner.right().saturating_sub(1));
            f.set_cursor_position(Position::new(x, inner.y));
        }
    }
}
