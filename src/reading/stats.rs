use std::time::Instant;

/// Reading statistics for the current playback session.
///
/// `words_read` is the counter shown to the reader; scrubbing overwrites it
/// with the new position. `session_words` only counts advancements since the
/// last `start` and drives the average speed.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    started_at: Option<Instant>,
    words_read: usize,
    session_words: usize,
    average_wpm: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new session; the words-read counter carries over.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.session_words = 0;
    }

    pub fn record_advance(&mut self, now: Instant) {
        self.words_read += 1;
        self.session_words += 1;
        self.average_wpm = self
            .started_at
            .map(|start| average_wpm(self.session_words, start, now))
            .unwrap_or(0);
    }

    pub fn set_words_read(&mut self, words: usize) {
        self.words_read = words;
    }

    /// Clears everything, used when a new document replaces the old one.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn words_read(&self) -> usize {
        self.words_read
    }

    pub fn session_words(&self) -> usize {
        self.session_words
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Average speed as of the last advancement.
    pub fn average_wpm(&self) -> u32 {
        self.average_wpm
    }
}

/// `round(words / elapsed_minutes)`, or 0 when either side is zero.
pub fn average_wpm(words: usize, start: Instant, now: Instant) -> u32 {
    let elapsed_minutes = now.saturating_duration_since(start).as_secs_f64() / 60.0;
    if words == 0 || elapsed_minutes <= 0.0 {
        return 0;
    }
    (words as f64 / elapsed_minutes).round() as u32
}

/// Position through the document as a percentage.
pub fn progress_percent(index: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        index as f64 / count as f64 * 100.0
    }
}
