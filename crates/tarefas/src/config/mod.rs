//! Configuration module for tarefas.

use anyhow::{Context, Result, anyhow};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub mod keybindings;

pub use keybindings::{Action, KeyBindingsConfig, ViewType};

/// Resolve the keybindings to use, falling back to the defaults when no file exists.
pub fn load_keybindings(path: Option<&Path>) -> Result<KeyBindingsConfig> {
    match keybindings::load_config(path)? {
        Some(config) => {
            keybindings::validate_tui_config(&config.tui)?;
            Ok(config.tui.keybindings)
        }
        None => Ok(KeyBindingsConfig::default()),
    }
}

/// Write the default configuration file.
///
/// Returns the path written to, or `None` when the user declined to overwrite.
pub fn init_config(output: Option<&Path>, force: bool) -> Result<Option<PathBuf>> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => keybindings::default_config_path()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let written = write_default_config(&output_path, force, &mut stdin.lock(), &mut stdout)?;
    Ok(written.then_some(output_path))
}

fn write_default_config<R: BufRead, W: Write>(
    path: &Path,
    force: bool,
    input: &mut R,
    prompt: &mut W,
) -> Result<bool> {
    if path.exists() && !force && !confirm_overwrite(path, input, prompt)? {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let content = keybindings::generate_default_config_toml()?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(true)
}

fn confirm_overwrite<R: BufRead, W: Write>(path: &Path, input: &mut R, prompt: &mut W) -> Result<bool> {
    write!(prompt, "O arquivo já existe: {}\nSobrescrever? [s/N]: ", path.display())?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn writes_defaults_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let written = write_default_config(&path, false, &mut Cursor::new(""), &mut Vec::<u8>::new()).unwrap();

        assert!(written);
        let keys = load_keybindings(Some(&path)).unwrap();
        assert_eq!(keys.input.submit, vec!["Enter"]);
    }

    #[test]
    fn keeps_existing_file_when_user_declines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "original").unwrap();

        let mut prompt: Vec<u8> = Vec::new();
        let written = write_default_config(&path, false, &mut Cursor::new("n\n"), &mut prompt).unwrap();

        assert!(!written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(String::from_utf8(prompt).unwrap().contains("Sobrescrever?"));
    }

    #[test]
    fn overwrites_when_user_confirms() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "original").unwrap();

        let written = write_default_config(&path, false, &mut Cursor::new("s\n"), &mut Vec::<u8>::new()).unwrap();

        assert!(written);
        assert!(fs::read_to_string(&path).unwrap().contains("[tui.keybindings.task_list]"));
    }

    #[test]
    fn force_skips_the_prompt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "original").unwrap();

        let mut prompt: Vec<u8> = Vec::new();
        let written = write_default_config(&path, true, &mut Cursor::new(""), &mut prompt).unwrap();

        assert!(written);
        assert!(prompt.is_empty());
    }

    #[test]
    fn missing_file_yields_default_keybindings() {
        let dir = TempDir::new().unwrap();
        let keys = load_keybindings(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(keys.task_list.quit, KeyBindingsConfig::default().task_list.quit);
    }

    #[test]
    fn conflicting_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = keybindings::Config::default();
        config.tui.keybindings.task_list.delete = vec!["j".to_string()];
        fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

        assert!(load_keybindings(Some(&path)).is_err());
    }
}
