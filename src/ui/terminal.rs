use crate::app::{mode::AppMode, App};
use crate::ui::render::draw;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use tracing::debug;

/// Owns the terminal for the lifetime of the UI and drives the event loop.
pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    _guard: TerminalGuard,
}

impl TuiManager {
    /// Enters raw mode and the alternate screen. Both are undone when the
    /// manager is dropped.
    pub fn new(theme: Theme) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            theme,
            _guard: guard,
        })
    }

    /// Runs until the app quits. Blocks on input for at most the time left
    /// before the next playback tick, then fires whatever ticks are due and
    /// redraws if anything changed.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                debug!("event loop finished");
                return Ok(());
            }

            let mut dirty = false;
            if event::poll(app.poll_timeout(Instant::now()))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key.code, Instant::now());
                        dirty = true;
                    }
                    Event::Resize(_, _) => dirty = true,
                    _ => {}
                }
            }

            app.on_timer(Instant::now());
            dirty |= app.sync_display();

            if dirty && app.mode() != AppMode::Quit {
                self.render_frame(app)?;
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        self.terminal
            .draw(|frame| draw(frame, &render_state, &self.theme))?;
        Ok(())
    }
}
