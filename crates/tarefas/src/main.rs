//! CLI entry point for tarefas.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt::format::FmtSpan};

mod config;
mod tui;

/// A task list that lives for one terminal session.
#[derive(Parser, Debug)]
#[command(
    name = "tarefas",
    version,
    about = "tarefas: add, complete and delete tasks in the terminal"
)]
struct Cli {
    /// Path to the configuration file (defaults to the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (the TUI is silent otherwise).
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Launch interactive terminal UI (default).
    Tui,

    /// Write the default configuration file.
    InitConfig {
        /// Destination path (defaults to the user config directory).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Overwrite an existing file without asking.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let Cli {
        config,
        log_file,
        cmd,
    } = Cli::parse();
    let cmd = cmd.unwrap_or(Command::Tui);

    match log_target(&cmd, log_file.as_deref()) {
        LogTarget::Stderr => install_tracing(None)?,
        LogTarget::File(path) => install_tracing(Some(path))?,
        LogTarget::Off => {}
    }

    execute_command(cmd, config.as_deref())
}

fn execute_command(command: Command, config_path: Option<&Path>) -> Result<()> {
    match command {
        Command::Tui => {
            let keybindings = config::load_keybindings(config_path)?;
            tui::run(keybindings)
        }
        Command::InitConfig { output, force } => {
            let target = output.as_deref().or(config_path);
            match config::init_config(target, force)? {
                Some(path) => {
                    tracing::info!(path = %path.display(), "configuration written");
                    println!("✓ Arquivo de configuração criado: {}", path.display());
                }
                None => println!("Cancelado."),
            }
            Ok(())
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Off,
}

/// The TUI owns the terminal, so it only logs when a file is given.
const fn log_target<'a>(cmd: &Command, log_file: Option<&'a Path>) -> LogTarget<'a> {
    match (cmd, log_file) {
        (_, Some(path)) => LogTarget::File(path),
        (Command::Tui, None) => LogTarget::Off,
        (_, None) => LogTarget::Stderr,
    }
}

/// Directives from `RUST_LOG` win; INFO applies only when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn install_tracing(log_file: Option<&Path>) -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let filter = log_filter(&directives);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact();

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file: {}", path.display()))?;
            let _ = builder.with_writer(Mutex::new(file)).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_tui() {
        let cli = Cli::parse_from(["tarefas"]);
        assert_eq!(cli.cmd, None);
        assert_eq!(cli.cmd.unwrap_or(Command::Tui), Command::Tui);
    }

    #[test]
    fn parse_tui_command() {
        let cli = Cli::parse_from(["tarefas", "tui"]);
        assert_eq!(cli.cmd, Some(Command::Tui));
    }

    #[test]
    fn parse_init_config_command() {
        let cli = Cli::parse_from([
            "tarefas",
            "init-config",
            "--output",
            "/tmp/tarefas.toml",
            "--force",
        ]);

        match cli.cmd {
            Some(Command::InitConfig { output, force }) => {
                assert_eq!(output, Some(PathBuf::from("/tmp/tarefas.toml")));
                assert!(force);
            }
            other => panic!("expected init-config command, got {other:?}"),
        }
    }

    #[test]
    fn global_options_follow_subcommand() {
        let cli = Cli::parse_from(["tarefas", "tui", "--config", "keys.toml", "--log-file", "t.log"]);
        assert_eq!(cli.config, Some(PathBuf::from("keys.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("t.log")));
    }

    #[test]
    fn tui_is_silent_without_log_file() {
        assert_eq!(log_target(&Command::Tui, None), LogTarget::Off);
    }

    #[test]
    fn log_file_wins_for_every_command() {
        let path = Path::new("t.log");
        assert_eq!(log_target(&Command::Tui, Some(path)), LogTarget::File(path));
        let init = Command::InitConfig {
            output: None,
            force: false,
        };
        assert_eq!(log_target(&init, Some(path)), LogTarget::File(path));
    }

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(log_filter("").to_string(), "info");
    }

    #[test]
    fn log_filter_keeps_env_level() {
        assert_eq!(log_filter("debug").to_string(), "debug");
        assert_eq!(log_filter("tarefas_core=debug").to_string(), "tarefas_core=debug");
    }

    #[test]
    fn other_commands_log_to_stderr() {
        let init = Command::InitConfig {
            output: None,
            force: true,
        };
        assert_eq!(log_target(&init, None), LogTarget::Stderr);
    }
}
