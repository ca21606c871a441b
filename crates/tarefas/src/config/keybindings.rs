//! Keybindings configuration for the TUI.

#![allow(clippy::enum_glob_use, clippy::unused_self)]

use anyhow::{Context, Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

macro_rules! vec_of_strings {
    ($($s:expr),* $(,)?) => {
        vec![$($s.to_string()),*]
    };
}

/// Top-level configuration for tarefas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// TUI configuration.
    pub tui: TuiConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Keybindings configuration.
    pub keybindings: KeyBindingsConfig,
}

/// Keybindings for every focus area of the screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyBindingsConfig {
    /// Keybindings while the task list has focus.
    pub task_list: TaskListKeyBindings,
    /// Keybindings while the text input has focus.
    pub input: InputKeyBindings,
}

/// Keybindings for the task list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListKeyBindings {
    /// Quit the application.
    pub quit: Vec<String>,
    /// Move down in the list.
    pub down: Vec<String>,
    /// Move up in the list.
    pub up: Vec<String>,
    /// Toggle completion of the selected task.
    pub toggle: Vec<String>,
    /// Delete the selected task.
    pub delete: Vec<String>,
    /// Move focus to the text input.
    pub focus_input: Vec<String>,
}

/// Keybindings for the text input.
///
/// Printable characters are always inserted into the field, so these should
/// use special keys or modifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputKeyBindings {
    /// Create a task from the typed text.
    pub submit: Vec<String>,
    /// Move focus to the task list.
    pub focus_list: Vec<String>,
    /// Quit the application.
    pub quit: Vec<String>,
}

impl Default for TaskListKeyBindings {
    fn default() -> Self {
        Self {
            quit: vec_of_strings!["q", "Q", "Ctrl+c"],
            down: vec_of_strings!["j", "J", "Down"],
            up: vec_of_strings!["k", "K", "Up"],
            toggle: vec_of_strings!["Space", "x", "X"],
            delete: vec_of_strings!["d", "D", "Delete"],
            focus_input: vec_of_strings!["i", "I", "a", "A", "Tab"],
        }
    }
}

impl Default for InputKeyBindings {
    fn default() -> Self {
        Self {
            submit: vec_of_strings!["Enter"],
            focus_list: vec_of_strings!["Tab", "Esc"],
            quit: vec_of_strings!["Ctrl+c"],
        }
    }
}

/// Returns the default configuration file path.
///
/// On Linux: `~/.config/tarefas/config.toml`
/// On macOS: `~/Library/Application Support/tarefas/config.toml`
/// On Windows: `%APPDATA%\tarefas\config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tarefas").join("config.toml"))
}

/// Generate default configuration as TOML string.
pub fn generate_default_config_toml() -> Result<String> {
    let config = Config::default();

    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    let header = r#"# tarefas configuration
#
# [tui.keybindings.task_list] / [tui.keybindings.input]
# Each action can have multiple key bindings.
#
# Supported key formats:
# - Single characters: "j", "k", "a", "1"
# - Special keys: "Enter", "Esc", "Tab", "Backspace", "Delete", "Space"
# - Arrow keys: "Up", "Down", "Left", "Right"
# - Navigation keys: "Home", "End", "PageUp", "PageDown"
# - Modified keys: "Ctrl+c", "Alt+k", "Shift+Up"
#
# Printable keys bound in the input section never reach the text field.
# When this file exists, ALL default keybindings are disabled.

"#;

    Ok(format!("{header}{toml_str}"))
}

/// Load configuration from a TOML file.
///
/// # Arguments
/// - `path`: Optional path to the config file. If `None`, uses the default path.
///
/// # Returns
/// - `Ok(Some(config))` if the file exists and was successfully parsed
/// - `Ok(None)` if the file does not exist
/// - `Err(_)` if there was an error reading or parsing the file
pub fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(None),
        },
    };

    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    Ok(Some(config))
}

/// Parse a key string into a `KeyEvent`.
///
/// # Examples
/// - "j" -> `KeyCode::Char('j')`
/// - "Space" -> `KeyCode::Char(' ')`
/// - "Ctrl+c" -> `KeyCode::Char('c')` with CONTROL modifier
pub fn parse_key(s: &str) -> Result<KeyEvent> {
    let parts: Vec<&str> = s.split('+').collect();

    let mut modifiers = KeyModifiers::NONE;
    let key_part = match parts.split_last() {
        Some((last, mods)) => {
            for &modifier in mods {
                match modifier {
                    "Ctrl" | "Control" => modifiers |= KeyModifiers::CONTROL,
                    "Alt" => modifiers |= KeyModifiers::ALT,
                    "Shift" => modifiers |= KeyModifiers::SHIFT,
                    other => bail!("Unknown modifier: {other}"),
                }
            }
            *last
        }
        None => bail!("Empty key string"),
    };

    let code = parse_key_code(key_part)?;

    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode> {
    match s {
        "Enter" => Ok(KeyCode::Enter),
        "Esc" => Ok(KeyCode::Esc),
        "Backspace" => Ok(KeyCode::Backspace),
        "Left" => Ok(KeyCode::Left),
        "Right" => Ok(KeyCode::Right),
        "Up" => Ok(KeyCode::Up),
        "Down" => Ok(KeyCode::Down),
        "Home" => Ok(KeyCode::Home),
        "End" => Ok(KeyCode::End),
        "PageUp" => Ok(KeyCode::PageUp),
        "PageDown" => Ok(KeyCode::PageDown),
        "Tab" => Ok(KeyCode::Tab),
        "Delete" => Ok(KeyCode::Delete),
        "Insert" => Ok(KeyCode::Insert),
        "Space" => Ok(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().ok_or_else(|| anyhow!("Empty char"))?;
            Ok(KeyCode::Char(ch))
        }
        other => bail!("Unknown key: {other}"),
    }
}

/// Validate the TUI configuration.
///
/// Checks for:
/// - Empty key bindings
/// - Invalid key expressions
/// - Key conflicts within each view
pub fn validate_tui_config(config: &TuiConfig) -> Result<()> {
    validate_keybindings_config(&config.keybindings)
}

/// Validate the keybindings configuration.
pub fn validate_keybindings_config(config: &KeyBindingsConfig) -> Result<()> {
    for (view, bindings) in all_bindings(config) {
        validate_view(view, &bindings)?;
    }
    Ok(())
}

/// Drop SHIFT from character keys.
///
/// Terminals report uppercase letters with SHIFT set; the character itself
/// already carries the case. Matching and conflict detection both go through
/// this so they agree on which keys are equal.
fn normalize_key(event: KeyEvent) -> KeyEvent {
    match event.code {
        KeyCode::Char(_) => KeyEvent::new(event.code, event.modifiers - KeyModifiers::SHIFT),
        _ => KeyEvent::new(event.code, event.modifiers),
    }
}

fn validate_view(view_name: &str, bindings: &[(&str, &[String])]) -> Result<()> {
    let mut key_to_actions: HashMap<KeyEvent, Vec<&str>> = HashMap::new();

    for &(action, keys) in bindings {
        if keys.is_empty() {
            bail!("{view_name}.{action} must have at least one key binding");
        }
        for key in keys {
            let parsed =
                parse_key(key).with_context(|| format!("Invalid key '{key}' in {view_name}.{action}"))?;
            key_to_actions.entry(normalize_key(parsed)).or_default().push(action);
        }
    }

    let mut conflicts: Vec<_> = key_to_actions
        .into_iter()
        .filter(|(_, actions)| actions.len() > 1)
        .map(|(_, mut actions)| {
            actions.sort_unstable();
            actions.dedup();
            actions
        })
        .filter(|actions| actions.len() > 1)
        .collect();
    conflicts.sort();
    if let Some(actions) = conflicts.first() {
        bail!("A key is bound to multiple actions in {view_name}: {actions:?}");
    }

    Ok(())
}

fn all_bindings(config: &KeyBindingsConfig) -> [(&'static str, Vec<(&'static str, &[String])>); 2] {
    let list = &config.task_list;
    let input = &config.input;
    [
        (
            "task_list",
            vec![
                ("quit", list.quit.as_slice()),
                ("down", list.down.as_slice()),
                ("up", list.up.as_slice()),
                ("toggle", list.toggle.as_slice()),
                ("delete", list.delete.as_slice()),
                ("focus_input", list.focus_input.as_slice()),
            ],
        ),
        (
            "input",
            vec![
                ("submit", input.submit.as_slice()),
                ("focus_list", input.focus_list.as_slice()),
                ("quit", input.quit.as_slice()),
            ],
        ),
    ]
}

/// Focus area used as keybinding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    /// Task list.
    TaskList,
    /// Text input.
    Input,
}

/// Action that can be performed in a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Move down.
    Down,
    /// Move up.
    Up,
    /// Toggle completion.
    Toggle,
    /// Delete task.
    Delete,
    /// Focus the text input.
    FocusInput,
    /// Create a task from the input.
    Submit,
    /// Focus the task list.
    FocusList,
}

impl KeyBindingsConfig {
    /// Generate help text for a specific view.
    pub fn generate_help_text(&self, view: ViewType) -> String {
        match view {
            ViewType::TaskList => format!(
                "{}:mover {}:concluir {}:excluir {}:nova tarefa {}:sair",
                self.format_key_pair(&self.task_list.down, &self.task_list.up),
                self.format_first_key(&self.task_list.toggle),
                self.format_first_key(&self.task_list.delete),
                self.format_first_key(&self.task_list.focus_input),
                self.format_first_key(&self.task_list.quit),
            ),
            ViewType::Input => format!(
                "{}:criar {}:lista {}:sair",
                self.format_first_key(&self.input.submit),
                self.format_first_key(&self.input.focus_list),
                self.format_first_key(&self.input.quit),
            ),
        }
    }

    fn format_first_key(&self, keys: &[String]) -> String {
        keys.first()
            .map_or_else(|| "?".to_string(), |k| self.format_key_display(k))
    }

    fn format_key_pair(&self, down: &[String], up: &[String]) -> String {
        format!("{}/{}", self.format_first_key(down), self.format_first_key(up))
    }

    fn format_key_display(&self, key: &str) -> String {
        match key {
            "Enter" => "↵".to_string(),
            "Backspace" => "BS".to_string(),
            "Delete" => "Del".to_string(),
            "Space" => "␣".to_string(),
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "PageUp" => "PgUp".to_string(),
            "PageDown" => "PgDn".to_string(),
            other if other.starts_with("Ctrl+") || other.starts_with("Alt+") => other.replace('+', "-"),
            other => other.to_string(),
        }
    }

    /// Check if a key event matches a configured action in a view.
    pub fn matches(&self, view: ViewType, action: Action, key: &KeyEvent) -> bool {
        self.get_keys(view, action)
            .iter()
            .filter_map(|key_str| parse_key(key_str).ok())
            .any(|expected| Self::key_event_matches(&expected, key))
    }

    fn key_event_matches(expected: &KeyEvent, actual: &KeyEvent) -> bool {
        let expected = normalize_key(*expected);
        let actual = normalize_key(*actual);
        expected.code == actual.code && expected.modifiers == actual.modifiers
    }

    fn get_keys(&self, view: ViewType, action: Action) -> &[String] {
        use Action::*;
        use ViewType::*;

        match (view, action) {
            (TaskList, Quit) => &self.task_list.quit,
            (TaskList, Down) => &self.task_list.down,
            (TaskList, Up) => &self.task_list.up,
            (TaskList, Toggle) => &self.task_list.toggle,
            (TaskList, Delete) => &self.task_list.delete,
            (TaskList, FocusInput) => &self.task_list.focus_input,

            (Input, Submit) => &self.input.submit,
            (Input, FocusList) => &self.input.focus_list,
            (Input, Quit) => &self.input.quit,

            _ => &[],
        }
    }
}
