use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};

use super::app::App;
use super::constants::UI_MESSAGE_TTL_SECS;
use super::input::InputField;
use crate::config::{KeyBindingsConfig, ViewType};

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    /// Typing into the entry field.
    Input,
    /// Moving over and acting on tasks.
    TaskList,
}

impl Focus {
    pub(super) const fn view_type(self) -> ViewType {
        match self {
            Self::Input => ViewType::Input,
            Self::TaskList => ViewType::TaskList,
        }
    }
}

pub(super) struct Ui {
    pub(super) app: App,
    pub(super) input: InputField,
    pub(super) focus: Focus,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    /// Keybindings configuration.
    pub(super) keybindings: KeyBindingsConfig,
    /// Set by UI-local state changes that the store does not see.
    needs_redraw: bool,
}

impl Ui {
    pub(super) const HEADER_HEIGHT: u16 = 3;
    pub(super) const INPUT_HEIGHT: u16 = 3;
    pub(super) const COUNTERS_HEIGHT: u16 = 1;
    pub(super) const LIST_MIN_HEIGHT: u16 = 3;
    pub(super) const INSTRUCTIONS_HEIGHT: u16 = 3;
    pub(super) const STATUS_MESSAGE_HEIGHT: u16 = 3;
    pub(super) const STATUS_FOOTER_HEIGHT: u16 = Self::INSTRUCTIONS_HEIGHT + Self::STATUS_MESSAGE_HEIGHT;

    pub(super) fn new(app: App, keybindings: KeyBindingsConfig) -> Self {
        Self {
            app,
            input: InputField::default(),
            focus: Focus::Input,
            message: None,
            should_quit: false,
            keybindings,
            needs_redraw: true,
        }
    }

    pub(super) const fn screen_constraints() -> [Constraint; 5] {
        [
            Constraint::Length(Self::HEADER_HEIGHT),
            Constraint::Length(Self::INPUT_HEIGHT),
            Constraint::Length(Self::COUNTERS_HEIGHT),
            Constraint::Min(Self::LIST_MIN_HEIGHT),
            Constraint::Length(Self::STATUS_FOOTER_HEIGHT),
        ]
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(Self::screen_constraints())
            .split(f.area());

        Self::draw_title(f, chunks[0]);
        self.draw_input(f, chunks[1]);
        self.draw_counters(f, chunks[2]);
        self.draw_task_list(f, chunks[3]);
        self.draw_status(f, chunks[4]);
    }

    /// Whether anything visible changed since the last call.
    pub(super) fn take_redraw(&mut self) -> bool {
        let store_changed = self.app.take_changed();
        let local = std::mem::replace(&mut self.needs_redraw, false);
        store_changed || local
    }

    pub(super) const fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub(super) fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.mark_dirty();
        }
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
        self.mark_dirty();
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
        self.mark_dirty();
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
            self.mark_dirty();
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    pub(super) level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
