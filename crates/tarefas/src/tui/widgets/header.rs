use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::super::constants::{APP_TITLE, COMPLETED_LABEL, TOTAL_LABEL};
use super::super::view::Ui;

impl Ui {
    pub(in crate::tui) fn draw_title(f: &mut Frame<'_>, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(title, area);
    }

    /// Total on the left, "K de N" on the right.
    pub(in crate::tui) fn draw_counters(&self, f: &mut Frame<'_>, area: Rect) {
        let counters = self.app.counters();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let total = Line::from(vec![
            Span::styled(TOTAL_LABEL, label_style(Color::Blue)),
            Span::raw(" "),
            badge(counters.total.to_string()),
        ]);
        f.render_widget(Paragraph::new(total), columns[0]);

        let completed = Line::from(vec![
            Span::styled(COMPLETED_LABEL, label_style(Color::Magenta)),
            Span::raw(" "),
            badge(counters.to_string()),
        ]);
        f.render_widget(
            Paragraph::new(completed).alignment(Alignment::Right),
            columns[1],
        );
    }
}

fn label_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn badge(text: String) -> Span<'static> {
    Span::styled(
        format!(" {text} "),
        Style::default().fg(Color::White).bg(Color::DarkGray),
    )
}
