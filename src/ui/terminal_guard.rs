use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use std::io;
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw mode, alternate screen and mouse capture for as long as it lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(terminal::EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;

        set_panic_hook();

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(terminal::LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            restore_terminal();
            tracing::error!(%panic_info, "panic");
            eprintln!("Panic: {}", panic_info);
            std::process::exit(1);
        }));
    });
}
