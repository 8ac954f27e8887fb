use unicode_segmentation::UnicodeSegmentation;

/// A single displayable token: a word, or a fixed-size chunk of an overlong word.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Unit {
    text: String,
}

impl Unit {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last_char(&self) -> Option<char> {
        self.text.chars().last()
    }

    /// Length in grapheme clusters, the unit the chunking limit is measured in.
    pub fn len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for Unit {
    fn from(text: &str) -> Self {
        Unit::new(text)
    }
}

/// Splits text on whitespace runs and chunks every word longer than `max_len`.
///
/// Chunks keep the original grapheme order and the last chunk may be shorter.
/// Text with no words yields an empty sequence rather than a single empty unit.
pub fn tokenize_text(text: &str, max_len: usize) -> Vec<Unit> {
    let max_len = max_len.max(1);
    let mut units = Vec::new();

    for word in text.split_whitespace() {
        let graphemes: Vec<&str> = word.graphemes(true).collect();
        if graphemes.len() <= max_len {
            units.push(Unit::new(word));
            continue;
        }

        for chunk in graphemes.chunks(max_len) {
            units.push(Unit::new(chunk.concat()));
        }
    }

    units
}
