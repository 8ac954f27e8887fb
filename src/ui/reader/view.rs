use crate::app::app::Status;
use crate::app::mode::AppMode;
use crate::app::RenderState;
use crate::engine::config::FONT_SIZE_RANGE;
use crate::reading::FocusSplit;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Columns of letter spacing for a font size. Cells cannot grow, so larger
/// sizes spread the letters out instead: one extra column per 20px above the
/// smallest size.
pub fn letter_spacing(font_size: u16) -> usize {
    (font_size.saturating_sub(*FONT_SIZE_RANGE.start()) / 20) as usize
}

/// Lays the split out on one line so the focus character sits on the
/// center column, letters spread by `letter_spacing(font_size)`. Returns
/// `None` when the content does not fit `width`.
pub fn focus_line(
    split: &FocusSplit,
    width: u16,
    font_size: u16,
    theme: &Theme,
) -> Option<Line<'static>> {
    let gap = letter_spacing(font_size);
    let text = Style::default().fg(theme.text);
    let anchor = Style::default()
        .fg(theme.anchor)
        .add_modifier(Modifier::BOLD);

    let mut cells: Vec<(&str, Style)> = split.before.graphemes(true).map(|g| (g, text)).collect();
    let focus_at = cells.len();
    cells.extend(split.focus.graphemes(true).map(|g| (g, anchor)));
    cells.extend(split.after.graphemes(true).map(|g| (g, text)));

    let before_width: usize = cells[..focus_at].iter().map(|(g, _)| g.width() + gap).sum();
    let total = cells.iter().map(|(g, _)| g.width()).sum::<usize>()
        + gap * cells.len().saturating_sub(1);
    let center = (width / 2) as usize;

    if before_width > center {
        return None;
    }
    let padding = center - before_width;
    if padding + total > width as usize {
        return None;
    }

    let mut spans = vec![Span::raw(" ".repeat(padding))];
    for (i, (grapheme, style)) in cells.iter().enumerate() {
        if i > 0 && gap > 0 {
            spans.push(Span::raw(" ".repeat(gap)));
        }
        spans.push(Span::styled(grapheme.to_string(), *style));
    }
    Some(Line::from(spans))
}

fn focus_spans(split: &FocusSplit, theme: &Theme) -> Vec<Span<'static>> {
    let text = Style::default().fg(theme.text);
    vec![
        Span::styled(split.before.clone(), text),
        Span::styled(
            split.focus.clone(),
            Style::default()
                .fg(theme.anchor)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(split.after.clone(), text),
    ]
}

/// The reading surface. Long multi-word or sentence content that cannot be
/// anchored on one line is wrapped and centered instead.
pub fn render_focus_word(
    split: &FocusSplit,
    width: u16,
    font_size: u16,
    theme: &Theme,
) -> Paragraph<'static> {
    let style = Style::default().bg(theme.background);
    match focus_line(split, width, font_size, theme) {
        Some(line) => Paragraph::new(line)
            .alignment(Alignment::Left)
            .style(style),
        None => Paragraph::new(Line::from(focus_spans(split, theme)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(style),
    }
}

pub fn render_progress_bar(percent: f64, width: u16, theme: &Theme) -> Line<'static> {
    let width = width as usize;
    let filled_len = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled_len = filled_len.min(width);
    let empty_len = width - filled_len;

    Line::from(vec![
        Span::styled("━".repeat(filled_len), Style::default().fg(theme.accent)),
        Span::styled("─".repeat(empty_len), Style::default().fg(theme.dimmed)),
    ])
}

/// Maps a click at (`column`, `row`) onto the progress bar drawn in `area`.
pub fn progress_fraction_at(area: Rect, column: u16, row: u16) -> Option<f64> {
    if area.width == 0
        || column < area.x
        || column >= area.x + area.width
        || row < area.y
        || row >= area.y + area.height
    {
        return None;
    }
    Some((column - area.x) as f64 / area.width as f64)
}

pub fn render_stats(state: &RenderState, theme: &Theme) -> Line<'static> {
    let (index, count) = state.position;
    let position = if count == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", index + 1, count)
    };
    Line::from(vec![
        Span::styled("Words read ", Style::default().fg(theme.dimmed)),
        Span::styled(state.words_read.to_string(), Style::default().fg(theme.text)),
        Span::styled("   Avg ", Style::default().fg(theme.dimmed)),
        Span::styled(
            format!("{} wpm", state.average_wpm),
            Style::default().fg(theme.text),
        ),
        Span::styled("   ", Style::default()),
        Span::styled(
            format!("{} ({:.0}%)", position, state.progress_percent),
            Style::default().fg(theme.dimmed),
        ),
    ])
    .alignment(Alignment::Center)
}

pub fn render_settings(state: &RenderState, theme: &Theme) -> Line<'static> {
    let playback = if state.playing { "▶" } else { "❚❚" };
    let text = format!(
        "{} {} wpm │ {} │ chunk {} │ focus {:.1} │ size {}",
        playback,
        state.wpm,
        state.display_mode,
        state.max_unit_length,
        state.focus_point,
        state.font_size
    );
    Line::styled(text, Style::default().fg(theme.dimmed)).alignment(Alignment::Center)
}

pub fn render_status(status: Option<&Status>, theme: &Theme) -> Paragraph<'static> {
    let line = match status {
        Some(Status::Info(msg)) => Line::styled(msg.clone(), Style::default().fg(theme.text)),
        Some(Status::Error(msg)) => Line::styled(
            msg.clone(),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        ),
        None => Line::default(),
    };
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.background))
}

pub fn render_placeholder(theme: &Theme) -> Paragraph<'static> {
    let text = "Press : and type some text to read it\n@file.txt, @book.epub or @paper.pdf to load a file\n@@ to read the clipboard   ? for help";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

const HELP_LINES: &[(&str, &str)] = &[
    ("space", "play / pause"),
    ("← →", "previous / next unit"),
    ("↑ ↓", "speed ±10 wpm"),
    ("click bar", "jump to position"),
    ("f / esc", "focus mode / leave focus mode"),
    ("m", "cycle single / multi / sentence"),
    ("[ ]", "move focus point"),
    ("- +", "shorter / longer chunks"),
    ("< >", "font size"),
    ("d", "toggle dark mode"),
    (":", "command deck"),
    ("q", "quit"),
];

pub fn render_help(theme: &Theme) -> Paragraph<'static> {
    let mut lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>10}  ", key),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(action.to_string(), Style::default().fg(theme.text)),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(
        "Commands: :wpm N  :font N  :focus F  :chunk N  :mode M  :dark  :q",
        Style::default().fg(theme.dimmed),
    ));

    Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .style(Style::default().bg(theme.surface))
}

pub fn render_command_deck(frame: &mut Frame, area: Rect, state: &RenderState, theme: &Theme) {
    frame.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let accent_bar =
        Paragraph::new("▌").style(Style::default().fg(theme.anchor).bg(theme.surface));
    frame.render_widget(accent_bar, layout[0]);

    let line = if state.mode == AppMode::Command {
        Line::from(vec![
            Span::styled(" : ", Style::default().fg(theme.accent)),
            Span::styled(state.command_input.clone(), Style::default().fg(theme.text)),
            Span::styled("█", Style::default().fg(theme.dimmed)),
        ])
    } else {
        Line::styled(
            " : command   space play   ? help",
            Style::default().fg(theme.dimmed),
        )
    };

    let input_widget = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .style(Style::default().bg(theme.surface));

    frame.render_widget(input_widget, layout[1]);
}
