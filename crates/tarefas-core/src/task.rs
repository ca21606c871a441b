use std::fmt;

use thiserror::Error;

use crate::id::TaskId;

/// Reasons a piece of text cannot become a task.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTextError {
    /// Nothing is left once surrounding whitespace is trimmed.
    #[error("task text is empty")]
    Empty,
}

/// Trimmed, non-empty display text of a task.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TaskText(String);

impl TaskText {
    /// Trim `raw` and accept it when something remains.
    ///
    /// # Errors
    /// Returns [`TaskTextError::Empty`] for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, TaskTextError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskTextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single entry of the task list.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    completed: bool,
}

impl Task {
    pub(crate) const fn new(id: TaskId, text: TaskText) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Identifier assigned when the task was added.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Display text, fixed at creation.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Whether the task has been marked done.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) const fn flip(&mut self) {
        self.completed = !self.completed;
    }
}
