use std::fmt;

use tracing::debug;

use crate::id::TaskId;
use crate::task::{Task, TaskText};

/// Effective mutation reported to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskChange {
    /// A task was appended at `index`.
    Added {
        /// New task.
        id: TaskId,
        /// Position in the list.
        index: usize,
    },
    /// A task's completion flag was flipped.
    Toggled {
        /// Affected task.
        id: TaskId,
        /// Flag value after the flip.
        completed: bool,
    },
    /// A task was removed from `index`.
    Removed {
        /// Removed task.
        id: TaskId,
        /// Position it occupied before removal.
        index: usize,
    },
}

/// Handle returned by [`TaskStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Derived counters shown next to the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Number of tasks in the list.
    pub total: usize,
    /// Number of tasks marked done.
    pub completed: usize,
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} de {}", self.completed, self.total)
    }
}

type Listener = Box<dyn FnMut(&TaskChange)>;

/// Sole owner of the ordered task list.
///
/// Every effective mutation bumps [`revision`](Self::revision) once and is
/// reported to subscribers in registration order. Calls that change nothing
/// (blank text, unknown id) are silent.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TaskStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task built from `text`.
    ///
    /// Returns `None` without touching the list when `text` is blank.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = match TaskText::parse(text) {
            Ok(text) => text,
            Err(err) => {
                debug!(%err, "ignoring task text");
                return None;
            }
        };

        let id = self.fresh_id();
        let index = self.tasks.len();
        self.tasks.push(Task::new(id, text));
        debug!(%id, index, "task added");
        self.publish(&TaskChange::Added { id, index });
        Some(id)
    }

    /// Flip the completion flag of the task with `id`.
    ///
    /// Returns `false` when no such task exists.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            return false;
        };
        task.flip();
        let completed = task.is_completed();
        debug!(%id, completed, "task toggled");
        self.publish(&TaskChange::Toggled { id, completed });
        true
    }

    /// Drop the task with `id`.
    ///
    /// Returns `false` when no such task exists.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tasks.remove(index);
        debug!(%id, index, "task removed");
        self.publish(&TaskChange::Removed { id, index });
        true
    }

    /// Current tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Index of the task with `id`.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks marked done.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Total and completed counts.
    #[must_use]
    pub fn counters(&self) -> Counters {
        Counters {
            total: self.len(),
            completed: self.completed_count(),
        }
    }

    /// Number of effective mutations so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a listener called after each effective mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&TaskChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::new();
            if self.get(id).is_none() {
                return id;
            }
        }
    }

    fn publish(&mut self, change: &TaskChange) {
        self.revision += 1;
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }
}
