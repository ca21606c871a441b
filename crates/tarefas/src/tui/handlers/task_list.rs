use crossterm::event::KeyEvent;

use super::super::view::{Focus, Ui};
use crate::config::{Action, ViewType};

impl Ui {
    pub(super) fn handle_task_list_key(&mut self, key: KeyEvent) {
        if self.keybindings.matches(ViewType::TaskList, Action::Quit, &key) {
            self.should_quit = true;
            return;
        }

        if self.keybindings.matches(ViewType::TaskList, Action::Down, &key) {
            self.app.select_next();
            self.mark_dirty();
            return;
        }

        if self.keybindings.matches(ViewType::TaskList, Action::Up, &key) {
            self.app.select_prev();
            self.mark_dirty();
            return;
        }

        if self.keybindings.matches(ViewType::TaskList, Action::Toggle, &key) {
            self.toggle_selected();
            return;
        }

        if self.keybindings.matches(ViewType::TaskList, Action::Delete, &key) {
            self.delete_selected();
            return;
        }

        if self
            .keybindings
            .matches(ViewType::TaskList, Action::FocusInput, &key)
        {
            self.set_focus(Focus::Input);
        }
    }

    fn toggle_selected(&mut self) {
        match self.app.toggle_selected() {
            Some(true) => self.info("Tarefa concluída"),
            Some(false) => self.info("Tarefa reaberta"),
            None => self.error("Nenhuma tarefa selecionada"),
        }
    }

    fn delete_selected(&mut self) {
        if self.app.remove_selected().is_some() {
            self.info("Tarefa excluída");
        } else {
            self.error("Nenhuma tarefa selecionada");
        }
    }
}
