// Timing maths for the pacing engine: base interval and punctuation pauses

use crate::engine::config::TimingConfig;
use crate::reading::Unit;

/// Pause extension earned by the unit just passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseKind {
    None,
    /// Unit ends with `,` `;` or `:`
    Clause,
    /// Unit ends with `.` `!` or `?`
    Sentence,
}

impl PauseKind {
    pub fn of(unit: &Unit) -> Self {
        match unit.last_char() {
            Some(c) if is_sentence_terminator(c) => PauseKind::Sentence,
            Some(c) if is_clause_separator(c) => PauseKind::Clause,
            _ => PauseKind::None,
        }
    }

    pub fn multiplier(self, config: &TimingConfig) -> f64 {
        match self {
            PauseKind::None => 1.0,
            PauseKind::Clause => config.clause_multiplier,
            PauseKind::Sentence => config.sentence_multiplier,
        }
    }
}

pub fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

pub fn is_clause_separator(c: char) -> bool {
    matches!(c, ',' | ';' | ':')
}

/// Base interval between units: 60000 / wpm milliseconds.
pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    (60_000.0 / wpm.max(1) as f64).round() as u64
}

/// Delay before the unit following `passed` is shown.
pub fn delay_after(passed: PauseKind, wpm: u32, config: &TimingConfig) -> u64 {
    scaled_delay(wpm, passed.multiplier(config))
}

pub fn scaled_delay(wpm: u32, multiplier: f64) -> u64 {
    (wpm_to_milliseconds(wpm) as f64 * multiplier).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpm_to_milliseconds_300() {
        // 60,000 / 300 = 200
        assert_eq!(wpm_to_milliseconds(300), 200);
    }

    #[test]
    fn test_wpm_to_milliseconds_600() {
        assert_eq!(wpm_to_milliseconds(600), 100);
    }

    #[test]
    fn test_wpm_to_milliseconds_rounds() {
        // 60,000 / 350 = 171.428...
        assert_eq!(wpm_to_milliseconds(350), 171);
        // 60,000 / 165 = 363.636...
        assert_eq!(wpm_to_milliseconds(165), 364);
    }

    #[test]
    fn test_wpm_to_milliseconds_zero_guarded() {
        assert_eq!(wpm_to_milliseconds(0), 60_000);
    }

    #[test]
    fn test_pause_kind_sentence_terminators() {
        for word in ["end.", "really!", "why?"] {
            assert_eq!(PauseKind::of(&Unit::from(word)), PauseKind::Sentence);
        }
    }

    #[test]
    fn test_pause_kind_clause_separators() {
        for word in ["first,", "second;", "list:"] {
            assert_eq!(PauseKind::of(&Unit::from(word)), PauseKind::Clause);
        }
    }

    #[test]
    fn test_pause_kind_only_last_char_counts() {
        assert_eq!(PauseKind::of(&Unit::from("e.g")), PauseKind::None);
        assert_eq!(PauseKind::of(&Unit::from("\"quoted.\"")), PauseKind::None);
    }

    #[test]
    fn test_delay_after_sentence_doubles_base() {
        let config = TimingConfig::default();
        assert_eq!(delay_after(PauseKind::Sentence, 600, &config), 200);
    }

    #[test]
    fn test_delay_after_clause_is_one_and_a_half() {
        let config = TimingConfig::default();
        assert_eq!(delay_after(PauseKind::Clause, 600, &config), 150);
    }

    #[test]
    fn test_delay_after_plain_word_is_base() {
        let config = TimingConfig::default();
        assert_eq!(delay_after(PauseKind::None, 600, &config), 100);
    }
}
