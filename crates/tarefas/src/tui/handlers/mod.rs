use crossterm::event::{KeyEvent, KeyEventKind};

use super::view::{Focus, Ui};

mod input;
mod task_list;

impl Ui {
    /// Route a key press to the focused component.
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::TaskList => self.handle_task_list_key(key),
        }
    }
}
