pub mod command;
pub mod reader;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use command::{command_to_app_event, parse_command, Command};
pub use reader::view::{progress_fraction_at, render_focus_word, render_progress_bar};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;
