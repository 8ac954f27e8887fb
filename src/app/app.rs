use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::config::{ReaderSettings, TimingConfig, FOCUS_POINT_STEP};
use crate::engine::Pacer;
use crate::input::{self, LoadError, LoadedDocument};
use crate::reading::ReaderState;
use crate::storage::PreferenceStore;
use crate::ui::command::{command_to_app_event, parse_command};

/// One-line message shown under the reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct App {
    mode: AppMode,
    pub reader: ReaderState,
    pacer: Pacer,
    preferences: PreferenceStore,
    command_input: String,
    status: Option<Status>,
    source: Option<String>,
}

impl App {
    pub fn new(config: TimingConfig, settings: ReaderSettings, preferences: PreferenceStore) -> Self {
        Self {
            mode: AppMode::Reading,
            reader: ReaderState::new(config, settings),
            pacer: Pacer::new(),
            preferences,
            command_input: String::new(),
            status: None,
            source: None,
        }
    }

    /// Default settings and preferences that are never written to disk.
    pub fn with_defaults() -> Self {
        Self::new(
            TimingConfig::default(),
            ReaderSettings::default(),
            PreferenceStore::in_memory(),
        )
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.mode == AppMode::Quit
    }

    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    pub fn is_playing(&self) -> bool {
        self.pacer.is_running()
    }

    pub fn dark_mode(&self) -> bool {
        self.preferences.dark_mode()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pacer.next_deadline()
    }

    /// Fires any due playback tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.pacer.poll(now, &mut self.reader)
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.mode = AppMode::Quit;
            return;
        }

        match self.mode {
            AppMode::Reading => self.handle_reading_key(key.code, now),
            AppMode::Command => self.handle_command_key(key.code),
            AppMode::Help => self.mode = AppMode::Reading,
            AppMode::Quit => {}
        }
    }

    fn handle_reading_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Char(' ') => self.toggle_play(now),
            KeyCode::Left => {
                self.reader.retreat();
            }
            KeyCode::Right => {
                self.reader.advance(now);
            }
            KeyCode::Up => self.adjust_speed(self.reader.config().speed_step as i32),
            KeyCode::Down => self.adjust_speed(-(self.reader.config().speed_step as i32)),
            KeyCode::Char('f') => self.reader.focus_mode = !self.reader.focus_mode,
            KeyCode::Esc => {
                if self.reader.focus_mode {
                    self.reader.focus_mode = false;
                }
            }
            KeyCode::Char(':') => {
                self.command_input.clear();
                self.mode = AppMode::Command;
            }
            KeyCode::Char('m') => {
                self.reader.settings.display_mode = self.reader.settings.display_mode.next();
            }
            KeyCode::Char('d') => self.toggle_dark_mode(),
            KeyCode::Char('[') => self.nudge_focus_point(-FOCUS_POINT_STEP),
            KeyCode::Char(']') => self.nudge_focus_point(FOCUS_POINT_STEP),
            KeyCode::Char('-') => {
                let length = self.reader.settings.max_unit_length() as i64 - 1;
                self.reader.set_max_unit_length(length);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let length = self.reader.settings.max_unit_length() as i64 + 1;
                self.reader.set_max_unit_length(length);
            }
            KeyCode::Char('<') => {
                let size = self.reader.settings.font_size() as i64 - 1;
                self.reader.settings.set_font_size(size);
            }
            KeyCode::Char('>') => {
                let size = self.reader.settings.font_size() as i64 + 1;
                self.reader.settings.set_font_size(size);
            }
            KeyCode::Char('?') => self.mode = AppMode::Help,
            KeyCode::Char('q') => self.mode = AppMode::Quit,
            _ => {}
        }
    }

    fn handle_command_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.command_input.push(c),
            KeyCode::Backspace => {
                self.command_input.pop();
            }
            KeyCode::Esc => {
                self.command_input.clear();
                self.mode = AppMode::Reading;
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.command_input);
                self.mode = AppMode::Reading;
                let event = command_to_app_event(parse_command(&input));
                self.handle_event(event);
            }
            _ => {}
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        debug!(?event, "handling app event");
        match event {
            AppEvent::LoadFile(path) => {
                let result = input::load_path(&path);
                self.load_document(result);
            }
            AppEvent::LoadClipboard => self.load_document(input::clipboard::load()),
            AppEvent::LoadText(text) => self.load_document(input::from_typed(&text)),
            AppEvent::SetWpm(wpm) => {
                self.reader.set_wpm(wpm);
                self.pacer.speed_changed(self.reader.wpm);
            }
            AppEvent::SetFontSize(size) => self.reader.settings.set_font_size(size),
            AppEvent::SetFocusPoint(point) => self.reader.settings.set_focus_point(point),
            AppEvent::SetMaxUnitLength(length) => self.reader.set_max_unit_length(length),
            AppEvent::SetDisplayMode(mode) => self.reader.settings.display_mode = mode,
            AppEvent::ToggleDarkMode => self.toggle_dark_mode(),
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.mode = AppMode::Help,
            AppEvent::InvalidCommand(input) => {
                self.status = Some(Status::Error(format!("Unknown command: {}", input)));
            }
        }
        // A document must exist for playback to continue
        if self.reader.is_empty() {
            self.pacer.pause();
        }
    }

    /// Installs a loaded document, or clears the reader and reports the failure.
    pub fn load_document(&mut self, result: Result<LoadedDocument, LoadError>) {
        self.pacer.pause();
        match result {
            Ok(doc) => {
                self.reader.load_text(&doc.text);
                info!(source = %doc.source, units = self.reader.len(), "document loaded");
                self.status = Some(Status::Info(format!(
                    "Loaded {} ({} words). Press space to start.",
                    doc.source,
                    self.reader.len()
                )));
                self.source = Some(doc.source);
            }
            Err(err) => {
                warn!(error = %err, "failed to load document");
                self.reader.clear();
                self.source = None;
                self.status = Some(Status::Error(format!(
                    "An error occurred while processing the file: {}. Please try again with a different file.",
                    err
                )));
            }
        }
    }

    pub fn toggle_play(&mut self, now: Instant) {
        if self.reader.is_empty() {
            self.status = Some(Status::Info(
                "Nothing to read yet. Press : then type text or @file".to_string(),
            ));
            return;
        }
        self.pacer.toggle(now, &mut self.reader);
    }

    pub fn adjust_speed(&mut self, delta: i32) {
        self.reader.adjust_wpm(delta);
        self.pacer.speed_changed(self.reader.wpm);
    }

    /// Scrubs to a fraction of the document, as from a progress-bar click.
    pub fn seek(&mut self, fraction: f64) {
        self.reader.seek(fraction);
    }

    fn nudge_focus_point(&mut self, delta: f64) {
        let point = self.reader.settings.focus_point() + delta;
        self.reader.settings.set_focus_point(point);
    }

    fn toggle_dark_mode(&mut self) {
        let dark_mode = !self.preferences.dark_mode();
        if let Err(err) = self.preferences.set_dark_mode(dark_mode) {
            warn!(error = %err, "failed to persist dark mode preference");
            self.status = Some(Status::Error(format!(
                "Could not save preference: {}",
                err
            )));
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            focus: self.reader.focus_split(),
            display_mode: self.reader.settings.display_mode,
            wpm: self.reader.wpm,
            font_size: self.reader.settings.font_size(),
            focus_point: self.reader.settings.focus_point(),
            max_unit_length: self.reader.settings.max_unit_length(),
            position: (self.reader.current_index, self.reader.len()),
            progress_percent: self.reader.progress_percent(),
            words_read: self.reader.stats.words_read(),
            average_wpm: self.reader.stats.average_wpm(),
            playing: self.pacer.is_running(),
            focus_mode: self.reader.focus_mode,
            dark_mode: self.preferences.dark_mode(),
            source: self.source.clone(),
            status: self.status.clone(),
            command_input: self.command_input.clone(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_defaults()
    }
}
