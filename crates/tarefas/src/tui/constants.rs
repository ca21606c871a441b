//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 5;
/// Title shown in the header bar.
pub const APP_TITLE: &str = "Tarefas";
/// Placeholder shown while the entry field is empty.
pub const INPUT_PLACEHOLDER: &str = "Adicione uma nova tarefa aqui . . .";
/// Label of the create control.
pub const CREATE_LABEL: &str = "Criar";
/// Label of the total counter.
pub const TOTAL_LABEL: &str = "Tarefas criadas";
/// Label of the completed counter.
pub const COMPLETED_LABEL: &str = "Concluídas";
/// Hint rendered when the list is empty.
pub const EMPTY_LIST_HINT: &str = "Nenhuma tarefa criada ainda";
/// Marker for an open task.
pub const OPEN_MARKER: &str = "○";
/// Marker for a completed task.
pub const DONE_MARKER: &str = "✓";
/// Highlight symbol shown beside the selected task.
pub const TASK_LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";
