use crate::app::mode::AppMode;
use crate::app::RenderState;
use crate::ui::reader::view::{
    render_command_deck, render_counter, render_help, render_loader, render_progress_gauge,
    render_stats, render_word_display,
};
use crate::ui::theme::Theme;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

const DECK_HEIGHT: u16 = 3;
const HELP_WIDTH: u16 = 44;
const HELP_HEIGHT: u16 = 12;

/// Draws one full frame from `state`.
pub fn draw(frame: &mut Frame, state: &RenderState, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    let [header, main, deck] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(DECK_HEIGHT),
    ])
    .areas(area);

    if let Some(name) = &state.document_name {
        let title = Paragraph::new(name.clone())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.dimmed).bg(theme.background));
        frame.render_widget(title, header);
    }

    match &state.snapshot {
        Some(snapshot) => {
            let [_, word, counter, _, gauge, stats] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(main);
            frame.render_widget(
                render_word_display(&snapshot.current_word, word.width, theme),
                word,
            );
            frame.render_widget(render_counter(snapshot, theme), counter);
            frame.render_widget(render_progress_gauge(snapshot, theme), gauge);
            frame.render_widget(render_stats(snapshot, theme), stats);
        }
        None => {
            let [_, loader, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Fill(1),
            ])
            .areas(main);
            frame.render_widget(render_loader(theme), loader);
        }
    }

    // The deck stays visible in Command mode; while reading it shows the
    // key hint line unless a command is being typed.
    if state.mode != AppMode::Quit {
        render_command_deck(
            frame,
            deck,
            state.mode,
            state.command_input.as_deref(),
            state.message.as_ref(),
            theme,
        );
    }

    if state.show_help {
        let popup = centered_rect(area, HELP_WIDTH, HELP_HEIGHT);
        frame.render_widget(Clear, popup);
        frame.render_widget(render_help(&state.presets, theme), popup);
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::StatusMessage;
    use crate::engine::{PlaybackStatus, Snapshot};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn draw_state(state: &RenderState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| draw(frame, state, &Theme::midnight()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn reading_state(position: usize, status: PlaybackStatus) -> RenderState {
        let mut state = RenderState::empty(AppMode::Reading);
        state.document_name = Some("novel.txt".to_string());
        state.snapshot = Some(Snapshot {
            current_word: "lighthouse".to_string(),
            position,
            length: 4,
            progress_percent: (position * 100 / 4) as u8,
            remaining_words: 4 - position - 1,
            estimated_minutes_remaining: 1,
            rate: 250,
            status,
        });
        state
    }

    #[test]
    fn test_loader_screen() {
        let mut state = RenderState::empty(AppMode::Command);
        state.command_input = Some("@bo".to_string());
        let text = draw_state(&state);
        assert!(text.contains("to load a document"));
        assert!(text.contains("COMMAND"));
        assert!(text.contains("@bo"));
    }

    #[test]
    fn test_reading_screen() {
        let text = draw_state(&reading_state(1, PlaybackStatus::Running));
        assert!(text.contains("novel.txt"));
        assert!(text.contains("lighthouse"));
        assert!(text.contains("2 / 4"));
        assert!(text.contains("25%"));
        assert!(text.contains("250 wpm"));
    }

    #[test]
    fn test_last_word_stays_visible_when_done() {
        let text = draw_state(&reading_state(3, PlaybackStatus::Idle));
        assert!(text.contains("lighthouse"));
        assert!(text.contains("4 / 4"));
        assert!(text.contains("Done!"));
    }

    #[test]
    fn test_error_message_in_deck() {
        let mut state = RenderState::empty(AppMode::Command);
        state.command_input = Some(String::new());
        state.message = Some(StatusMessage::Error("file is too large".to_string()));
        assert!(draw_state(&state).contains("file is too large"));
    }

    #[test]
    fn test_help_overlay() {
        let mut state = reading_state(0, PlaybackStatus::Idle);
        state.show_help = true;
        state.presets = vec![200, 300, 500, 800];
        let text = draw_state(&state);
        assert!(text.contains("help"));
        assert!(text.contains("3=500"));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(area, 44, 12), area);
        assert_eq!(centered_rect(Rect::new(0, 0, 10, 10), 4, 2), Rect::new(3, 4, 4, 2));
    }
}
