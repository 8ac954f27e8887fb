use std::time::Instant;

use crate::engine::config::{ReaderSettings, TimingConfig};
use crate::reading::format::{split_focus, FocusSplit};
use crate::reading::stats::{progress_percent, SessionStats};
use crate::reading::{tokenize_text, Unit};

/// Mutable reading session: the unit sequence, the position in it and the
/// presentation settings.
pub struct ReaderState {
    source_text: String,
    units: Vec<Unit>,
    pub current_index: usize,
    pub wpm: u32,
    pub settings: ReaderSettings,
    pub focus_mode: bool,
    pub stats: SessionStats,
    config: TimingConfig,
}

impl ReaderState {
    pub fn new(config: TimingConfig, settings: ReaderSettings) -> Self {
        Self {
            source_text: String::new(),
            units: Vec::new(),
            current_index: 0,
            wpm: config.clamp_wpm(config.wpm as i64),
            settings,
            focus_mode: false,
            stats: SessionStats::new(),
            config,
        }
    }

    pub fn new_with_default_config() -> Self {
        Self::new(TimingConfig::default(), ReaderSettings::default())
    }

    pub fn from_text(text: &str) -> Self {
        let mut state = Self::new_with_default_config();
        state.load_text(text);
        state
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn current_unit(&self) -> Option<&Unit> {
        self.units.get(self.current_index)
    }

    /// Replaces the document, starting again from the first unit.
    pub fn load_text(&mut self, text: &str) {
        self.source_text = text.to_string();
        self.current_index = 0;
        self.stats.reset();
        self.retokenize();
    }

    /// Drops the document and everything derived from it.
    pub fn clear(&mut self) {
        self.load_text("");
    }

    pub fn set_max_unit_length(&mut self, length: i64) {
        if self.settings.set_max_unit_length(length) {
            self.retokenize();
        }
    }

    fn retokenize(&mut self) {
        self.units = tokenize_text(&self.source_text, self.settings.max_unit_length());
        self.clamp_index();
    }

    fn clamp_index(&mut self) {
        self.current_index = self.current_index.min(self.units.len().saturating_sub(1));
    }

    /// Moves forward one unit, wrapping to the start, and counts one word read.
    ///
    /// Returns false when there is nothing to advance through.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.units.is_empty() {
            return false;
        }
        self.current_index = (self.current_index + 1) % self.units.len();
        self.stats.record_advance(now);
        true
    }

    /// Moves back one unit, wrapping to the end. Counters are untouched.
    pub fn retreat(&mut self) -> bool {
        if self.units.is_empty() {
            return false;
        }
        let len = self.units.len();
        self.current_index = (self.current_index + len - 1) % len;
        true
    }

    /// Jumps to `floor(fraction * len)` and sets the words-read counter to the
    /// new position.
    pub fn seek(&mut self, fraction: f64) {
        if self.units.is_empty() || fraction.is_nan() {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        let target = (fraction * self.units.len() as f64).floor() as usize;
        self.current_index = target.min(self.units.len() - 1);
        self.stats.set_words_read(self.current_index);
    }

    pub fn adjust_wpm(&mut self, delta: i32) {
        self.set_wpm(self.wpm as i64 + delta as i64);
    }

    pub fn set_wpm(&mut self, wpm: i64) {
        self.wpm = self.config.clamp_wpm(wpm);
    }

    pub fn content(&self) -> String {
        self.settings.display_mode.format(&self.units, self.current_index)
    }

    pub fn focus_split(&self) -> FocusSplit {
        split_focus(&self.content(), self.settings.focus_point())
    }

    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current_index, self.units.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::DisplayMode;

    fn state_with(text: &str) -> ReaderState {
        ReaderState::from_text(text)
    }

    fn ten_units() -> ReaderState {
        state_with("a b c d e f g h i j")
    }

    #[test]
    fn test_readerstate_initialization() {
        let state = ReaderState::new_with_default_config();
        assert_eq!(state.current_index, 0);
        assert_eq!(state.wpm, 300);
        assert!(state.is_empty());
        assert!(state.current_unit().is_none());
    }

    #[test]
    fn test_current_unit() {
        let state = state_with("hello world");
        assert_eq!(state.current_unit().map(Unit::text), Some("hello"));
    }

    #[test]
    fn test_advance() {
        let mut state = state_with("hello world");
        assert!(state.advance(Instant::now()));
        assert_eq!(state.current_index, 1);
        assert_eq!(state.stats.words_read(), 1);
    }

    #[test]
    fn test_advance_wraps_to_start() {
        let mut state = state_with("hello world");
        state.current_index = 1;
        state.advance(Instant::now());
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn test_advance_n_times_returns_to_start() {
        let now = Instant::now();
        for n in 1..=7 {
            let words: Vec<String> = (0..n).map(|i| format!("w{}", i)).collect();
            let mut state = state_with(&words.join(" "));
            state.current_index = n / 2;
            let start = state.current_index;
            for _ in 0..n {
                state.advance(now);
            }
            assert_eq!(state.current_index, start);
        }
    }

    #[test]
    fn test_advance_on_empty_is_noop() {
        let mut state = ReaderState::new_with_default_config();
        assert!(!state.advance(Instant::now()));
        assert_eq!(state.current_index, 0);
        assert_eq!(state.stats.words_read(), 0);
    }

    #[test]
    fn test_retreat_wraps_to_end() {
        let mut state = state_with("one two three");
        assert!(state.retreat());
        assert_eq!(state.current_index, 2);
    }

    #[test]
    fn test_retreat_does_not_count_words() {
        let mut state = state_with("one two three");
        state.current_index = 2;
        state.retreat();
        assert_eq!(state.current_index, 1);
        assert_eq!(state.stats.words_read(), 0);
    }

    #[test]
    fn test_retreat_then_advance_restores_index() {
        let mut state = state_with("one two three");
        state.current_index = 1;
        state.retreat();
        state.advance(Instant::now());
        assert_eq!(state.current_index, 1);
    }

    #[test]
    fn test_retreat_on_empty_is_noop() {
        let mut state = ReaderState::new_with_default_config();
        assert!(!state.retreat());
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn test_seek_half_of_ten() {
        let mut state = ten_units();
        state.seek(0.5);
        assert_eq!(state.current_index, 5);
        assert_eq!(state.stats.words_read(), 5);
    }

    #[test]
    fn test_seek_clamps_to_last_unit() {
        let mut state = ten_units();
        state.seek(1.0);
        assert_eq!(state.current_index, 9);
        state.seek(7.5);
        assert_eq!(state.current_index, 9);
    }

    #[test]
    fn test_seek_negative_goes_to_start() {
        let mut state = ten_units();
        state.current_index = 4;
        state.seek(-0.3);
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn test_seek_on_empty_is_noop() {
        let mut state = ReaderState::new_with_default_config();
        state.seek(0.5);
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn test_adjust_wpm_increase() {
        let mut state = ReaderState::new_with_default_config();
        state.adjust_wpm(10);
        assert_eq!(state.wpm, 310);
    }

    #[test]
    fn test_adjust_wpm_clamp_min() {
        let mut state = ReaderState::new_with_default_config();
        state.set_wpm(70);
        state.adjust_wpm(-50);
        assert_eq!(state.wpm, 60);
    }

    #[test]
    fn test_adjust_wpm_clamp_max() {
        let mut state = ReaderState::new_with_default_config();
        state.set_wpm(995);
        state.adjust_wpm(10);
        assert_eq!(state.wpm, 1000);
    }

    #[test]
    fn test_load_text_resets_position_and_stats() {
        let mut state = ten_units();
        state.current_index = 7;
        state.advance(Instant::now());
        state.load_text("fresh text");
        assert_eq!(state.current_index, 0);
        assert_eq!(state.len(), 2);
        assert_eq!(state.stats.words_read(), 0);
    }

    #[test]
    fn test_rechunking_clamps_index() {
        // 20 chars -> 4 units at length 5, 1 unit at length 20
        let mut state = ReaderState::new_with_default_config();
        state.set_max_unit_length(5);
        state.load_text("abcdefghijklmnopqrst");
        assert_eq!(state.len(), 4);
        state.current_index = 3;
        state.set_max_unit_length(20);
        assert_eq!(state.len(), 1);
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn test_rechunking_keeps_index_when_in_range() {
        let mut state = state_with("one two three four");
        state.current_index = 2;
        state.set_max_unit_length(5);
        assert_eq!(state.current_index, 2);
    }

    #[test]
    fn test_clear_empties_document() {
        let mut state = state_with("one two");
        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.content(), "");
        assert_eq!(state.progress_percent(), 0.0);
    }

    #[test]
    fn test_content_follows_display_mode() {
        let mut state = state_with("Hello world. Next one");
        assert_eq!(state.content(), "Hello");
        state.settings.display_mode = DisplayMode::Multi;
        assert_eq!(state.content(), "Hello world. Next");
        state.settings.display_mode = DisplayMode::Sentence;
        assert_eq!(state.content(), "Hello world.");
    }

    #[test]
    fn test_focus_split_uses_focus_point() {
        let mut state = state_with("reading");
        state.settings.set_focus_point(0.5);
        let split = state.focus_split();
        assert_eq!(split.before, "rea");
        assert_eq!(split.focus, "d");
        assert_eq!(split.after, "ing");
    }

    #[test]
    fn test_progress_percent() {
        let mut state = ten_units();
        state.seek(0.3);
        assert!((state.progress_percent() - 30.0).abs() < 1e-9);
    }
}
