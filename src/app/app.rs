use super::mode::AppMode;
use super::render_state::{RenderState, StatusMessage};
use super::session::Session;
use super::AppEvent;
use crate::engine::Config;
use crate::input;
use crate::ui::command::{command_to_app_event, parse_command};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Longest the event loop blocks when no tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Percentage jumped by the `[` and `]` keys.
const SEEK_STEP_PERCENT: i64 = 5;

/// Words covered by one `[`/`]` press; at least one so short documents move.
fn seek_step(length: usize) -> i64 {
    (length as i64 * SEEK_STEP_PERCENT / 100).max(1)
}

pub const HELP_TEXT: &str = "space play/pause · ←/→ ±words · ↑/↓ speed · 1-4 presets · [/] seek · 0 restart · : command · q close";

pub struct App {
    mode: AppMode,
    session: Option<Session>,
    config: Config,
    command_input: Option<String>,
    message: Option<StatusMessage>,
    show_help: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            mode: AppMode::Command,
            session: None,
            config,
            command_input: Some(String::new()),
            message: None,
            show_help: false,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::LoadFile(path) => self.open_document(&path),
            AppEvent::SetRate(rate) => {
                let rate = self.config.reading.clamp_wpm(rate);
                self.with_session(|session| session.controller_mut().set_rate(rate, now));
            }
            AppEvent::Seek(percent) => {
                self.with_session(|session| session.controller_mut().seek_to_percent(percent));
            }
            AppEvent::Close => self.close_document(),
            AppEvent::Quit => {
                if let Some(session) = self.session.take() {
                    session.close();
                }
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => {
                self.show_help = true;
                self.message = Some(StatusMessage::Info(HELP_TEXT.to_string()));
            }
            AppEvent::InvalidCommand(input) => {
                self.message = Some(StatusMessage::Error(format!("Unknown command: {input}")));
            }
        }
    }

    fn with_session(&mut self, action: impl FnOnce(&mut Session)) {
        match self.session.as_mut() {
            Some(session) => action(session),
            None => {
                self.message = Some(StatusMessage::Error("No document open".to_string()));
            }
        }
    }

    /// Loads and tokenizes `path`, replacing any open document. Failures
    /// leave the app where it was and show the reason in the command deck.
    pub fn open_document(&mut self, path: &str) {
        match input::load(path, self.config.document.max_size_bytes()) {
            Ok(document) => {
                if let Some(previous) = self.session.take() {
                    previous.close();
                }
                let rate = self.config.reading.initial_wpm();
                info!(
                    name = %document.name,
                    pages = document.pages,
                    words = document.words.len(),
                    rate,
                    "session opened"
                );
                self.session = Some(Session::new(document, rate));
                self.mode = AppMode::Reading;
                self.command_input = None;
                self.message = None;
                self.show_help = false;
            }
            Err(err) => {
                warn!(path, error = %err, "document rejected");
                self.message = Some(StatusMessage::Error(err.to_string()));
            }
        }
    }

    pub fn close_document(&mut self) {
        if let Some(session) = self.session.take() {
            session.close();
        }
        self.mode = AppMode::Command;
        self.command_input = Some(String::new());
        self.show_help = false;
    }

    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        if self.command_input.is_some() {
            self.handle_command_key(key, now);
        } else if self.mode == AppMode::Reading {
            self.handle_reading_key(key, now);
        }
    }

    fn handle_command_key(&mut self, key: KeyCode, now: Instant) {
        let Some(input) = self.command_input.as_mut() else {
            return;
        };

        match key {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => {
                if self.mode == AppMode::Reading {
                    self.command_input = None;
                } else {
                    input.clear();
                }
            }
            KeyCode::Enter => {
                let line = std::mem::take(input);
                if self.mode == AppMode::Reading {
                    self.command_input = None;
                }
                let event = command_to_app_event(parse_command(&line));
                self.handle_event(event, now);
            }
            _ => {}
        }
    }

    fn handle_reading_key(&mut self, key: KeyCode, now: Instant) {
        let reading = &self.config.reading;
        let skip = i64::from(reading.skip_words);
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let controller = session.controller_mut();

        match key {
            KeyCode::Char(' ') => controller.toggle_play(now),
            KeyCode::Left | KeyCode::Char('h') => controller.skip(-skip),
            KeyCode::Right | KeyCode::Char('l') => controller.skip(skip),
            KeyCode::Up | KeyCode::Char('k') => {
                let rate = reading.step_wpm(controller.rate(), 1);
                controller.set_rate(rate, now);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let rate = reading.step_wpm(controller.rate(), -1);
                controller.set_rate(rate, now);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(rate) = reading.preset(index) {
                    controller.set_rate(rate, now);
                }
            }
            KeyCode::Char('[') => controller.skip(-seek_step(controller.words().len())),
            KeyCode::Char(']') => controller.skip(seek_step(controller.words().len())),
            KeyCode::Char('0') => controller.seek_to_percent(0),
            KeyCode::Char(c @ (':' | '@')) => {
                self.command_input = Some(c.to_string());
                self.message = None;
            }
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Char('q') | KeyCode::Esc => self.close_document(),
            _ => {}
        }
    }

    /// Fires any pending playback tick.
    pub fn on_timer(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            session.controller_mut().on_timer(now);
        }
    }

    /// Pulls playback updates into the display state; true when a redraw is
    /// needed.
    pub fn sync_display(&mut self) -> bool {
        self.session.as_mut().is_some_and(Session::sync)
    }

    /// How long the event loop may wait for input before the next tick.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .as_ref()
            .and_then(|session| session.controller().time_until_tick(now))
            .map_or(IDLE_POLL, |remaining| remaining.min(IDLE_POLL))
    }

    pub fn get_render_state(&self) -> RenderState {
        let mut state = RenderState::empty(self.mode);
        if let Some(session) = &self.session {
            state.document_name = Some(session.name().to_string());
            state.snapshot = Some(session.latest().clone());
        }
        state.command_input = self.command_input.clone();
        state.message = self.message.clone();
        state.show_help = self.show_help;
        state.presets = self.config.reading.presets.clone();
        state
    }
}
