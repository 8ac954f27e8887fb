pub mod format;
pub mod state;
pub mod stats;
pub mod timing;
pub mod token;

pub use format::{split_focus, DisplayMode, FocusSplit};
pub use state::ReaderState;
pub use stats::SessionStats;
pub use timing::{wpm_to_milliseconds, PauseKind};
pub use token::{tokenize_text, Unit};
