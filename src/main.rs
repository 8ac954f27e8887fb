use clap::Parser;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rapidread::app::{App, AppEvent, Status};
use rapidread::engine::{ReaderSettings, TimingConfig};
use rapidread::reading::DisplayMode;
use rapidread::storage::{PreferenceStore, Preferences};
use rapidread::ui::TuiManager;

#[derive(Parser)]
#[command(name = "rapidread")]
#[command(about = "A terminal RSVP speed reader")]
struct Cli {
    /// Document to open (.txt, .md, .epub or .pdf)
    file: Option<PathBuf>,

    /// Read this text instead of a file
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Starting speed in words per minute (60-1000)
    #[arg(long)]
    wpm: Option<i64>,

    /// Display mode: single, multi or sentence
    #[arg(long)]
    mode: Option<DisplayMode>,

    /// Longest unit before a word is split (5-20 characters)
    #[arg(long)]
    chunk: Option<i64>,

    /// Where to write the log (defaults to the user cache directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("rapidread")
        .join("rapidread.log")
}

/// The terminal belongs to the UI, so logs go to a file. Filtered by
/// `RUST_LOG`, `info` when unset.
fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(err) = init_logging(&log_path) {
        eprintln!("Logging disabled ({}): {}", log_path.display(), err);
    }

    let mut config = TimingConfig::default();
    if let Some(wpm) = cli.wpm {
        config.wpm = config.clamp_wpm(wpm);
    }
    let mut settings = ReaderSettings::default();
    if let Some(chunk) = cli.chunk {
        settings.set_max_unit_length(chunk);
    }
    if let Some(mode) = cli.mode {
        settings.display_mode = mode;
    }

    let (preferences, prefs_error) = PreferenceStore::open(Preferences::default_path());
    let mut app = App::new(config, settings, preferences);
    info!(wpm = app.reader.wpm, "starting rapidread");

    if let Some(err) = prefs_error {
        warn!(error = %err, "could not read preferences");
        app.set_status(Status::Error(format!("Could not read preferences: {}", err)));
    }

    if let Some(text) = cli.text {
        app.handle_event(AppEvent::LoadText(text));
    } else if let Some(path) = cli.file {
        app.handle_event(AppEvent::LoadFile(path.display().to_string()));
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    info!("exiting");
    Ok(())
}
