use crate::app::mode::AppMode;
use crate::app::StatusMessage;
use crate::engine::{wpm_to_milliseconds, Snapshot};
use crate::ui::theme::Theme;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Status shown once the last word has been reached and playback stopped.
pub const DONE_TEXT: &str = "Done!";

/// Columns of left padding that center `word` in `width` cells.
pub fn centered_padding(word: &str, width: u16) -> usize {
    usize::from(width).saturating_sub(word.width()) / 2
}

/// The current word, bold and horizontally centered in `width` cells.
///
/// Centering is done by display width rather than char count, so wide
/// glyphs and combining marks stay centered.
pub fn render_word_display(word: &str, width: u16, theme: &Theme) -> Paragraph<'static> {
    let padding = centered_padding(word, width);
    let spans = vec![
        Span::raw(" ".repeat(padding)),
        Span::styled(
            word.to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ];

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(Style::default().bg(theme.background))
}

/// One-based `position / length` counter shown under the word.
pub fn render_counter(snapshot: &Snapshot, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(format!("{} / {}", snapshot.position + 1, snapshot.length))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

/// Progress bar labelled with the rounded percentage.
pub fn render_progress_gauge(snapshot: &Snapshot, theme: &Theme) -> Gauge<'static> {
    let percent = snapshot.progress_percent.min(100);
    Gauge::default()
        .gauge_style(Style::default().fg(theme.accent).bg(theme.background))
        .ratio(f64::from(percent) / 100.0)
        .label(format!("{percent}%"))
}

/// Rate, per-word delay, words left, minutes left and playback status.
pub fn stats_line(snapshot: &Snapshot) -> String {
    let status = if snapshot.is_playing() {
        "▶ playing".to_string()
    } else if snapshot.is_finished() {
        format!("✓ {DONE_TEXT}")
    } else {
        "⏸ paused".to_string()
    };
    format!(
        "{} wpm ({} ms/word) · {} words left · ~{} min · {}",
        snapshot.rate,
        wpm_to_milliseconds(snapshot.rate),
        snapshot.remaining_words,
        snapshot.estimated_minutes_remaining,
        status
    )
}

pub fn render_stats(snapshot: &Snapshot, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(stats_line(snapshot))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.text).bg(theme.background))
}

/// Instructions shown while no document is open.
pub fn render_loader(theme: &Theme) -> Paragraph<'static> {
    let text = "Type @path/to/file.pdf to load a document\n.epub and .txt work too\n:q to quit";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

/// Key reference, with the configured rate presets.
pub fn render_help(presets: &[u32], theme: &Theme) -> Paragraph<'static> {
    let presets = presets
        .iter()
        .enumerate()
        .map(|(i, wpm)| format!("{}={wpm}", i + 1))
        .collect::<Vec<_>>()
        .join("  ");
    let lines = vec![
        Line::from("space      play / pause"),
        Line::from("←/h  →/l   skip words"),
        Line::from("↑/k  ↓/j   change speed"),
        Line::from(format!("presets    {presets}")),
        Line::from("[  ]       seek ∓5%"),
        Line::from("0          back to start"),
        Line::from(":wpm N     set speed"),
        Line::from(":seek P    jump to P%"),
        Line::from("@path      open another file"),
        Line::from("q  Esc     close document"),
    ];
    Paragraph::new(lines)
        .block(
            Block::default()
                .title(" help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(theme.text).bg(theme.background))
}

/// The command deck: mode badge, typed input (or the key hint) and the
/// latest status message underneath.
pub fn render_command_deck(
    frame: &mut Frame,
    area: Rect,
    mode: AppMode,
    input: Option<&str>,
    message: Option<&StatusMessage>,
    theme: &Theme,
) {
    frame.render_widget(Clear, area);

    let [accent_area, body] =
        Layout::horizontal([Constraint::Length(1), Constraint::Min(1)]).areas(area);

    let accent_bar = Paragraph::new("▌").style(Style::default().fg(theme.accent).bg(theme.background));
    frame.render_widget(accent_bar, accent_area);

    let mode_indicator = match mode {
        AppMode::Command => " COMMAND ",
        AppMode::Reading => " READING ",
        AppMode::Quit => " QUIT ",
    };

    let mut lines = Vec::with_capacity(2);
    let prompt = match input {
        Some(text) => Line::from(vec![
            Span::styled(mode_indicator, Style::default().fg(theme.background).bg(theme.accent)),
            Span::raw(" "),
            Span::styled(format!("{text}▏"), Style::default().fg(theme.text)),
        ]),
        None => Line::from(vec![
            Span::styled(mode_indicator, Style::default().fg(theme.background).bg(theme.dimmed)),
            Span::styled("  : command  ? help", Style::default().fg(theme.dimmed)),
        ]),
    };
    lines.push(prompt);

    match message {
        Some(StatusMessage::Error(text)) => {
            lines.push(Line::styled(text.clone(), Style::default().fg(theme.accent)));
        }
        Some(StatusMessage::Info(text)) => {
            lines.push(Line::styled(text.clone(), Style::default().fg(theme.dimmed)));
        }
        None => {}
    }

    let deck = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .style(Style::default().bg(theme.background));
    frame.render_widget(deck, body);
}
