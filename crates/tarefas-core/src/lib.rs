//! In-memory task list model for tarefas.
//!
//! [`TaskStore`] owns the ordered list of [`Task`]s and is the only place
//! that creates, flips, or drops them. Front ends read the list through
//! shared references and learn about changes via [`TaskStore::subscribe`].

/// Identifier types.
pub mod id;
/// Task store and change notifications.
pub mod store;
/// Task entity and validated text.
pub mod task;

pub use id::TaskId;
pub use store::{Counters, SubscriptionId, TaskChange, TaskStore};
pub use task::{Task, TaskText, TaskTextError};
