//! Content formatting for the reading zone
//!
//! Derives the visible string from the unit sequence, the current index and
//! the display mode, then splits it around the focus character (the
//! optimal recognition point) for highlighted rendering.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::reading::timing::is_sentence_terminator;
use crate::reading::Unit;

/// Number of units shown together in `DisplayMode::Multi`.
pub const MULTI_WORD_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// One unit at a time
    #[default]
    Single,
    /// A window of `MULTI_WORD_WINDOW` units
    Multi,
    /// From the current unit through the end of its sentence
    Sentence,
}

impl DisplayMode {
    pub fn format(self, units: &[Unit], index: usize) -> String {
        match self {
            DisplayMode::Single => format_single(units, index),
            DisplayMode::Multi => format_multi(units, index),
            DisplayMode::Sentence => format_sentence(units, index),
        }
    }

    /// Next mode in the cycle single -> multi -> sentence -> single.
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Single => DisplayMode::Multi,
            DisplayMode::Multi => DisplayMode::Sentence,
            DisplayMode::Sentence => DisplayMode::Single,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Single => "single",
            DisplayMode::Multi => "multi",
            DisplayMode::Sentence => "sentence",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown display mode '{0}' (expected single, multi or sentence)")]
pub struct ParseDisplayModeError(String);

impl FromStr for DisplayMode {
    type Err = ParseDisplayModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(DisplayMode::Single),
            "multi" => Ok(DisplayMode::Multi),
            "sentence" => Ok(DisplayMode::Sentence),
            other => Err(ParseDisplayModeError(other.to_string())),
        }
    }
}

fn format_single(units: &[Unit], index: usize) -> String {
    units
        .get(index)
        .map(|unit| unit.text().to_string())
        .unwrap_or_default()
}

fn format_multi(units: &[Unit], index: usize) -> String {
    units
        .iter()
        .skip(index)
        .take(MULTI_WORD_WINDOW)
        .map(Unit::text)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_sentence(units: &[Unit], index: usize) -> String {
    let mut sentence = Vec::new();
    for unit in units.iter().skip(index) {
        sentence.push(unit.text());
        if unit.last_char().is_some_and(is_sentence_terminator) {
            break;
        }
    }
    sentence.join(" ")
}

/// Content split around its focus character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusSplit {
    pub before: String,
    pub focus: String,
    pub after: String,
}

impl FocusSplit {
    pub fn is_empty(&self) -> bool {
        self.before.is_empty() && self.focus.is_empty() && self.after.is_empty()
    }
}

/// Splits `content` at `floor(len * focus_point)`, counting grapheme clusters.
///
/// `focus` is empty when the index falls past the end (focus point 1.0).
pub fn split_focus(content: &str, focus_point: f64) -> FocusSplit {
    let graphemes: Vec<&str> = content.graphemes(true).collect();
    let focus_point = focus_point.clamp(0.0, 1.0);
    let focus_index = (graphemes.len() as f64 * focus_point).floor() as usize;

    if focus_index >= graphemes.len() {
        return FocusSplit {
            before: graphemes.concat(),
            focus: String::new(),
            after: String::new(),
        };
    }

    FocusSplit {
        before: graphemes[..focus_index].concat(),
        focus: graphemes[focus_index].to_string(),
        after: graphemes[focus_index + 1..].concat(),
    }
}
