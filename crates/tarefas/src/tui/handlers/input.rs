use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::super::view::{Focus, Ui};
use crate::config::{Action, ViewType};

impl Ui {
    pub(super) fn handle_input_key(&mut self, key: KeyEvent) {
        if self.keybindings.matches(ViewType::Input, Action::Quit, &key) {
            self.should_quit = true;
            return;
        }

        if self.keybindings.matches(ViewType::Input, Action::Submit, &key) {
            self.submit_input();
            return;
        }

        if self.keybindings.matches(ViewType::Input, Action::FocusList, &key) {
            self.set_focus(Focus::TaskList);
            return;
        }

        self.edit_input(key);
    }

    /// Hand the typed text to the store, then clear the field either way.
    pub(in crate::tui) fn submit_input(&mut self) {
        let text = self.input.take();
        self.mark_dirty();
        if let Some(id) = self.app.add_task(text.trim()) {
            debug!(%id, "task created from input");
        }
    }

    fn edit_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.insert(ch);
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => return,
        }
        self.mark_dirty();
    }
}
