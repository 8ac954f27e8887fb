use rapidread::app::{App, AppEvent};
use rapidread::engine::{Pacer, ReaderSettings, TimingConfig};
use rapidread::input::{self, LoadError};
use rapidread::reading::{tokenize_text, DisplayMode, ReaderState};
use std::fs;
use std::time::{Duration, Instant};

#[test]
fn end_to_end_reading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("story.txt");
    fs::write(&path, "Hi, there. Go").unwrap();

    let doc = input::load_path(&path).expect("Should load file successfully");
    let units = tokenize_text(&doc.text, 10);
    assert_eq!(units.len(), 3);
    assert_eq!(units[0].text(), "Hi,");

    let config = TimingConfig {
        wpm: 600,
        ..TimingConfig::default()
    };
    let mut reader = ReaderState::new(config, ReaderSettings::default());
    reader.load_text(&doc.text);

    let mut pacer = Pacer::new();
    let t0 = Instant::now();
    assert!(pacer.play(t0, &mut reader));
    assert_eq!(pacer.next_deadline(), Some(t0 + Duration::from_millis(100)));

    // "Hi," ends a clause: the next interval is 1.5x
    let t1 = t0 + Duration::from_millis(100);
    assert!(pacer.poll(t1, &mut reader));
    assert_eq!(reader.content(), "there.");
    assert_eq!(pacer.next_deadline(), Some(t1 + Duration::from_millis(150)));

    // "there." ends a sentence: 2x
    let t2 = t1 + Duration::from_millis(150);
    assert!(pacer.poll(t2, &mut reader));
    assert_eq!(reader.content(), "Go");
    assert_eq!(pacer.next_deadline(), Some(t2 + Duration::from_millis(200)));

    // Wraps back to the start
    let t3 = t2 + Duration::from_millis(200);
    assert!(pacer.poll(t3, &mut reader));
    assert_eq!(reader.current_index, 0);

    assert_eq!(reader.stats.words_read(), 3);
    assert_eq!(reader.stats.average_wpm(), 400);
}

#[test]
fn pause_prevents_pending_tick() {
    let mut reader = ReaderState::from_text("one two three");
    let mut pacer = Pacer::new();
    let t0 = Instant::now();

    pacer.play(t0, &mut reader);
    pacer.pause();
    assert!(!pacer.poll(t0 + Duration::from_secs(5), &mut reader));
    assert_eq!(reader.current_index, 0);
}

#[test]
fn long_words_are_chunked_and_rechunked() {
    let mut reader = ReaderState::from_text("internationalization");
    assert_eq!(reader.len(), 2);

    reader.set_max_unit_length(5);
    assert_eq!(reader.len(), 4);
    assert_eq!(reader.content(), "inter");
}

#[test]
fn display_modes_render_context() {
    let mut reader = ReaderState::from_text("One two three four. Five six.");
    reader.settings.display_mode = DisplayMode::Multi;
    assert_eq!(reader.content(), "One two three");

    reader.settings.display_mode = DisplayMode::Sentence;
    reader.current_index = 1;
    assert_eq!(reader.content(), "two three four.");
}

#[test]
fn missing_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let result = input::load_path(dir.path().join("absent.epub"));
    assert!(matches!(result, Err(LoadError::FileNotFound(_))));
}

#[test]
fn app_drives_playback_from_typed_text() {
    let mut app = App::with_defaults();
    app.handle_event(AppEvent::LoadText("Ready steady go".to_string()));
    app.handle_event(AppEvent::SetWpm(600));

    let t0 = Instant::now();
    app.toggle_play(t0);
    assert!(app.is_playing());

    let mut now = t0;
    for _ in 0..2 {
        now = app.next_deadline().unwrap();
        assert!(app.tick(now));
    }
    assert_eq!(app.reader.content(), "go");
    assert!(now >= t0 + Duration::from_millis(200));

    let state = app.get_render_state();
    assert_eq!(state.words_read, 2);
    assert!(state.playing);
}
