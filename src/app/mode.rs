/// Which surface currently receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Reader controls: playback, navigation, settings keys
    Reading,
    /// Typing into the command deck
    Command,
    /// Key reference overlay; any key dismisses it
    Help,
    Quit,
}
