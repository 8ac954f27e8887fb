// Configuration for the rapidread pacing engine and reader settings
// Every runtime-adjustable value is clamped into its range on write

use std::ops::RangeInclusive;

use crate::reading::DisplayMode;

pub const WPM_RANGE: RangeInclusive<u32> = 60..=1000;
pub const FONT_SIZE_RANGE: RangeInclusive<u16> = 12..=72;
pub const FOCUS_POINT_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const MAX_UNIT_LENGTH_RANGE: RangeInclusive<usize> = 5..=20;

/// Granularity of the focus point setting.
pub const FOCUS_POINT_STEP: f64 = 0.1;

/// Pacing configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Words per minute at startup (default 300)
    pub wpm: u32,

    /// Minimum and maximum allowed WPM
    pub wpm_range: RangeInclusive<u32>,

    /// WPM change per Up/Down key press (default 10)
    pub speed_step: u32,

    /// Delay multiplier after `. ! ?` (default 2.0x)
    pub sentence_multiplier: f64,

    /// Delay multiplier after `, ; :` (default 1.5x)
    pub clause_multiplier: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            wpm_range: WPM_RANGE,
            speed_step: 10,
            sentence_multiplier: 2.0,
            clause_multiplier: 1.5,
        }
    }
}

impl TimingConfig {
    pub fn clamp_wpm(&self, wpm: i64) -> u32 {
        wpm.clamp(
            *self.wpm_range.start() as i64,
            *self.wpm_range.end() as i64,
        ) as u32
    }
}

/// Presentation settings adjustable while reading.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderSettings {
    font_size: u16,
    focus_point: f64,
    max_unit_length: usize,
    pub display_mode: DisplayMode,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            font_size: 48,
            focus_point: 0.5,
            max_unit_length: 10,
            display_mode: DisplayMode::Single,
        }
    }
}

impl ReaderSettings {
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: i64) {
        self.font_size = size.clamp(
            *FONT_SIZE_RANGE.start() as i64,
            *FONT_SIZE_RANGE.end() as i64,
        ) as u16;
    }

    pub fn focus_point(&self) -> f64 {
        self.focus_point
    }

    /// Clamps into `[0.0, 1.0]` and snaps to the nearest 0.1.
    pub fn set_focus_point(&mut self, point: f64) {
        if point.is_nan() {
            return;
        }
        let clamped = point.clamp(*FOCUS_POINT_RANGE.start(), *FOCUS_POINT_RANGE.end());
        self.focus_point = (clamped / FOCUS_POINT_STEP).round() * FOCUS_POINT_STEP;
    }

    pub fn max_unit_length(&self) -> usize {
        self.max_unit_length
    }

    /// Returns true when the stored value changed.
    pub fn set_max_unit_length(&mut self, length: i64) -> bool {
        let clamped = length.clamp(
            *MAX_UNIT_LENGTH_RANGE.start() as i64,
            *MAX_UNIT_LENGTH_RANGE.end() as i64,
        ) as usize;
        let changed = clamped != self.max_unit_length;
        self.max_unit_length = clamped;
        changed
    }
}
