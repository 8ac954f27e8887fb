use crate::app::{mode::AppMode, App, RenderState};
use crate::ui::reader::view::{
    progress_fraction_at, render_command_deck, render_focus_word, render_help,
    render_placeholder, render_progress_bar, render_settings, render_stats, render_status,
};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Clear, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::debug;

const RENDER_TICK: Duration = Duration::from_millis(1000 / 30);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    progress_area: Option<Rect>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            progress_area: None,
            _guard: guard,
        })
    }

    /// Runs until the app asks to quit. Waits for input no longer than the
    /// next playback deadline so ticks fire on time.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        self.render_frame(app)?;

        while !app.should_quit() {
            let now = Instant::now();
            let timeout = app
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(now).min(RENDER_TICK))
                .unwrap_or(RENDER_TICK);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key, Instant::now());
                    }
                    Event::Mouse(mouse) => {
                        seek_from_click(app, self.progress_area, mouse);
                    }
                    _ => {}
                }
            }

            app.tick(Instant::now());
            self.render_frame(app)?;
        }

        Ok(())
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();
        let theme = Theme::for_dark_mode(state.dark_mode);
        let mut progress_area = None;

        self.terminal.draw(|frame| {
            progress_area = draw(frame, &state, &theme);
        })?;

        self.progress_area = progress_area;
        Ok(())
    }
}

/// Seeks when a left click lands on the progress bar. Clicks only count on
/// the reading surface, not while the command deck or help is open.
fn seek_from_click(app: &mut App, progress_area: Option<Rect>, mouse: MouseEvent) -> bool {
    if app.mode() != AppMode::Reading || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return false;
    }
    let Some(area) = progress_area else {
        return false;
    };
    match progress_fraction_at(area, mouse.column, mouse.row) {
        Some(fraction) => {
            debug!(fraction, "seek from progress bar");
            app.seek(fraction);
            true
        }
        None => false,
    }
}

/// Draws one frame and returns where the progress bar landed.
fn draw(frame: &mut Frame, state: &RenderState, theme: &Theme) -> Option<Rect> {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    let progress_area = if state.focus_mode {
        draw_focus_mode(frame, area, state, theme)
    } else {
        draw_reader(frame, area, state, theme)
    };

    if state.mode == AppMode::Help {
        let [popup] = Layout::horizontal([Constraint::Length(60)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Length(17)])
            .flex(Flex::Center)
            .areas(popup);
        frame.render_widget(Clear, popup);
        frame.render_widget(render_help(theme), popup);
    }

    progress_area
}

/// Full-screen reading: only the word and the progress bar.
fn draw_focus_mode(frame: &mut Frame, area: Rect, state: &RenderState, theme: &Theme) -> Option<Rect> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    draw_word(frame, chunks[0], state, theme);
    let bar_area = inset(chunks[1], 2);
    frame.render_widget(
        render_progress_bar(state.progress_percent, bar_area.width, theme),
        bar_area,
    );
    Some(bar_area)
}

fn draw_reader(frame: &mut Frame, area: Rect, state: &RenderState, theme: &Theme) -> Option<Rect> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(3),    // word
            Constraint::Length(1), // progress
            Constraint::Length(1), // stats
            Constraint::Length(1), // settings
            Constraint::Length(2), // status
            Constraint::Length(2), // command deck
        ])
        .split(area);

    let title = match &state.source {
        Some(source) => format!(" rapidread · {}", source),
        None => " rapidread".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::styled(title, Style::default().fg(theme.dimmed))),
        chunks[0],
    );

    if state.has_document() {
        draw_word(frame, chunks[1], state, theme);
    } else {
        let [placeholder] = Layout::vertical([Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(chunks[1]);
        frame.render_widget(render_placeholder(theme), placeholder);
    }

    let bar_area = inset(chunks[2], 4);
    frame.render_widget(
        render_progress_bar(state.progress_percent, bar_area.width, theme),
        bar_area,
    );
    frame.render_widget(render_stats(state, theme), chunks[3]);
    frame.render_widget(render_settings(state, theme), chunks[4]);
    frame.render_widget(render_status(state.status.as_ref(), theme), chunks[5]);
    render_command_deck(frame, chunks[6], state, theme);

    state.has_document().then_some(bar_area)
}

fn draw_word(frame: &mut Frame, area: Rect, state: &RenderState, theme: &Theme) {
    let [word_area] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        render_focus_word(&state.focus, word_area.width, state.font_size, theme),
        word_area,
    );
}

fn inset(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width / 2);
    Rect {
        x: area.x + margin,
        width: area.width - margin * 2,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppEvent;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_with_ten_words() -> App {
        let mut app = App::with_defaults();
        app.handle_event(AppEvent::LoadText("a b c d e f g h i j".to_string()));
        app
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_draw_placeholder_without_document() {
        let app = App::with_defaults();
        let state = app.get_render_state();
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut bar = Some(Rect::default());
        terminal
            .draw(|frame| bar = draw(frame, &state, &theme))
            .unwrap();
        assert!(bar.is_none());
        assert!(buffer_text(&terminal).contains("@@ to read the clipboard"));
    }

    #[test]
    fn test_draw_reader_with_document() {
        let mut app = App::with_defaults();
        app.handle_event(AppEvent::LoadText("Hello brave world".to_string()));
        let state = app.get_render_state();
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut bar = None;
        terminal
            .draw(|frame| bar = draw(frame, &state, &theme))
            .unwrap();

        let bar = bar.unwrap();
        assert_eq!(bar.width, 72);
        let text = buffer_text(&terminal);
        assert!(text.contains("H e l l o"));
        assert!(text.contains("300 wpm"));
    }

    #[test]
    fn test_focus_mode_hides_panels() {
        let mut app = App::with_defaults();
        app.handle_event(AppEvent::LoadText("Hello brave world".to_string()));
        app.reader.focus_mode = true;
        let state = app.get_render_state();
        let theme = Theme::for_dark_mode(true);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut bar = None;
        terminal
            .draw(|frame| bar = draw(frame, &state, &theme))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("H e l l o"));
        assert!(!text.contains("wpm"));
        assert_eq!(bar.map(|area| area.y), Some(23));
    }

    #[test]
    fn test_click_on_progress_bar_seeks() {
        let mut app = app_with_ten_words();
        let bar = Some(Rect::new(0, 10, 100, 1));
        assert!(seek_from_click(&mut app, bar, left_click(50, 10)));
        assert_eq!(app.reader.current_index, 5);

        // Off the bar, or without a bar, nothing moves
        assert!(!seek_from_click(&mut app, bar, left_click(50, 11)));
        assert!(!seek_from_click(&mut app, None, left_click(10, 10)));
        assert_eq!(app.reader.current_index, 5);
    }

    #[test]
    fn test_click_ignored_outside_reading_mode() {
        let mut app = app_with_ten_words();
        let bar = Some(Rect::new(0, 10, 100, 1));

        app.handle_event(AppEvent::Help);
        assert!(!seek_from_click(&mut app, bar, left_click(50, 10)));
        assert_eq!(app.reader.current_index, 0);

        let now = Instant::now();
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), now);
        app.handle_key(KeyEvent::new(KeyCode::Char(':'), KeyModifiers::NONE), now);
        assert_eq!(app.mode(), AppMode::Command);
        assert!(!seek_from_click(&mut app, bar, left_click(50, 10)));
        assert_eq!(app.reader.current_index, 0);
    }

    #[test]
    fn test_right_click_does_not_seek() {
        let mut app = app_with_ten_words();
        let mut click = left_click(50, 10);
        click.kind = MouseEventKind::Down(MouseButton::Right);
        assert!(!seek_from_click(&mut app, Some(Rect::new(0, 10, 100, 1)), click));
    }

    #[test]
    fn test_inset_small_area() {
        let area = Rect::new(0, 0, 3, 1);
        assert_eq!(inset(area, 4).width, 1);
        assert_eq!(inset(Rect::new(0, 0, 20, 1), 4), Rect::new(4, 0, 12, 1));
    }
}
