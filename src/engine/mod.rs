pub mod config;
pub mod pacer;
pub mod timer;

pub use config::{ReaderSettings, TimingConfig};
pub use pacer::{Pacer, PlaybackState};
pub use timer::{CancellableTimer, TimerHandle};
