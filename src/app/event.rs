use crate::reading::DisplayMode;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    LoadText(String),
    SetWpm(i64),
    SetFontSize(i64),
    SetFocusPoint(f64),
    SetMaxUnitLength(i64),
    SetDisplayMode(DisplayMode),
    ToggleDarkMode,
    Quit,
    Help,
    InvalidCommand(String),
}
