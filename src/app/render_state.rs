use crate::app::app::Status;
use crate::app::mode::AppMode;
use crate::reading::{DisplayMode, FocusSplit};

/// Snapshot of everything the UI draws for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub focus: FocusSplit,
    pub display_mode: DisplayMode,
    pub wpm: u32,
    pub font_size: u16,
    pub focus_point: f64,
    pub max_unit_length: usize,
    /// (current index, unit count)
    pub position: (usize, usize),
    pub progress_percent: f64,
    pub words_read: usize,
    pub average_wpm: u32,
    pub playing: bool,
    pub focus_mode: bool,
    pub dark_mode: bool,
    pub source: Option<String>,
    pub status: Option<Status>,
    pub command_input: String,
}

impl RenderState {
    pub fn has_document(&self) -> bool {
        self.position.1 > 0
    }
}
