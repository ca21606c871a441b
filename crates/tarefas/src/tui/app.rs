use std::cell::Cell;
use std::rc::Rc;

use tarefas_core::{Counters, SubscriptionId, Task, TaskId, TaskStore};
use tracing::trace;

/// Application state shared between the event loop and rendering.
///
/// Owns the task store and the list selection. The store reports every
/// effective mutation through a subscription that raises `changed`.
pub(super) struct App {
    store: TaskStore,
    /// Current selection (index into the store's list).
    selected: usize,
    changed: Rc<Cell<bool>>,
    subscription: SubscriptionId,
}

impl App {
    pub(super) fn new(mut store: TaskStore) -> Self {
        let changed = Rc::new(Cell::new(true));
        let flag = Rc::clone(&changed);
        let subscription = store.subscribe(move |change| {
            trace!(?change, "store changed");
            flag.set(true);
        });
        Self {
            store,
            selected: 0,
            changed,
            subscription,
        }
    }

    pub(super) fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub(super) fn counters(&self) -> Counters {
        self.store.counters()
    }

    pub(super) const fn has_tasks(&self) -> bool {
        !self.store.is_empty()
    }

    pub(super) const fn selected_index(&self) -> usize {
        self.selected
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.selected)
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(Task::id)
    }

    pub(super) const fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
    }

    pub(super) const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Create a task; blank text is ignored by the store.
    pub(super) fn add_task(&mut self, text: &str) -> Option<TaskId> {
        self.store.add(text)
    }

    /// Flip the selected task. Returns its new completion flag.
    pub(super) fn toggle_selected(&mut self) -> Option<bool> {
        let id = self.selected_task_id()?;
        self.store.toggle(id);
        self.store.get(id).map(Task::is_completed)
    }

    /// Remove the selected task and keep the selection in bounds.
    pub(super) fn remove_selected(&mut self) -> Option<TaskId> {
        let id = self.selected_task_id()?;
        self.store.remove(id);
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
        Some(id)
    }

    /// Consume the change flag raised by the store subscription.
    pub(super) fn take_changed(&self) -> bool {
        self.changed.replace(false)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}
