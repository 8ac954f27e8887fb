//! Command parsing for TUI command deck
//!
//! Parses user input in Command mode, supporting:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `@filename.pdf`, `@filename.epub`, `@notes.txt` → Load file command
//! - `@@` → Load clipboard
//! - `:wpm N`, `:font N`, `:focus F`, `:chunk N` → adjust a setting
//! - `:mode single|multi|sentence` → change display mode
//! - `:dark` → toggle dark mode
//! - anything else not starting with `:` → read it as typed text

use crate::app::AppEvent;
use crate::reading::DisplayMode;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    ReadText(String),
    SetWpm(i64),
    SetFontSize(i64),
    SetFocusPoint(f64),
    SetMaxUnitLength(i64),
    SetDisplayMode(DisplayMode),
    ToggleDarkMode,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        parse_system_command(input, cmd)
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::ReadText(input.to_string())
    }
}

fn parse_system_command(input: &str, cmd: &str) -> Command {
    let mut parts = cmd.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    let unknown = || Command::Unknown(input.to_string());

    match (name, arg) {
        ("q" | "quit", None) => Command::Quit,
        ("h" | "help", None) => Command::Help,
        ("dark", None) => Command::ToggleDarkMode,
        ("wpm", Some(value)) => value.parse().map(Command::SetWpm).unwrap_or_else(|_| unknown()),
        ("font", Some(value)) => value
            .parse()
            .map(Command::SetFontSize)
            .unwrap_or_else(|_| unknown()),
        ("focus", Some(value)) => value
            .parse()
            .map(Command::SetFocusPoint)
            .unwrap_or_else(|_| unknown()),
        ("chunk", Some(value)) => value
            .parse()
            .map(Command::SetMaxUnitLength)
            .unwrap_or_else(|_| unknown()),
        ("mode", Some(value)) => value
            .parse()
            .map(Command::SetDisplayMode)
            .unwrap_or_else(|_| unknown()),
        _ => unknown(),
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::ReadText(text) => AppEvent::LoadText(text),
        Command::SetWpm(wpm) => AppEvent::SetWpm(wpm),
        Command::SetFontSize(size) => AppEvent::SetFontSize(size),
        Command::SetFocusPoint(point) => AppEvent::SetFocusPoint(point),
        Command::SetMaxUnitLength(length) => AppEvent::SetMaxUnitLength(length),
        Command::SetDisplayMode(mode) => AppEvent::SetDisplayMode(mode),
        Command::ToggleDarkMode => AppEvent::ToggleDarkMode,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
