use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use tarefas_core::Task;

use super::super::constants::{DONE_MARKER, EMPTY_LIST_HINT, OPEN_MARKER, TASK_LIST_HIGHLIGHT_SYMBOL};
use super::super::view::{Focus, Ui};
use super::util::truncate_with_ellipsis;

/// Columns taken by the highlight symbol and the checkbox marker.
const ROW_DECORATION_WIDTH: usize = 4;

impl Ui {
    pub(in crate::tui) fn draw_task_list(&self, f: &mut Frame<'_>, area: Rect) {
        let border_style = if self.focus == Focus::TaskList {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let text_width = usize::from(block.inner(area).width).saturating_sub(ROW_DECORATION_WIDTH);

        let items: Vec<ListItem<'_>> = if self.app.has_tasks() {
            self.app
                .tasks()
                .iter()
                .map(|task| task_item(task, text_width))
                .collect()
        } else {
            vec![ListItem::new(Line::from(Span::styled(
                EMPTY_LIST_HINT,
                Style::default().fg(Color::DarkGray),
            )))]
        };

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(TASK_LIST_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default();
        if self.app.has_tasks() && self.focus == Focus::TaskList {
            state.select(Some(self.app.selected_index()));
        }
        f.render_stateful_widget(list, area, &mut state);
    }
}

fn task_item(task: &Task, text_width: usize) -> ListItem<'_> {
    let (marker, marker_style, text_style) = if task.is_completed() {
        (
            DONE_MARKER,
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        (
            OPEN_MARKER,
            Style::default().fg(Color::Blue),
            Style::default().fg(Color::White),
        )
    };

    ListItem::new(Line::from(vec![
        Span::styled(marker, marker_style),
        Span::raw(" "),
        Span::styled(truncate_with_ellipsis(task.text(), text_width), text_style),
    ]))
}
