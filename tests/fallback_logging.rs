// Word-list fallbacks are shown to the player as a notice, so the log must
// not repeat them at a level the default `warn` filter lets through.
// Kept in its own test binary because it installs the global logger.

use hangman::{Language, WordSource};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs;
use std::sync::Mutex;

struct Capture(Mutex<Vec<(Level, String)>>);

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.0
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

#[test]
fn test_fallbacks_log_below_warn() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let empty = tempfile::tempdir().unwrap();
    let missing =
        WordSource::new(vec![empty.path().to_path_buf()]).load_words(Language::English);
    assert!(missing.fallback().is_some());

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("words_rus.txt"), "да\nнет\n").unwrap();
    fs::write(dir.path().join("words_eng.txt"), b"\xff\xfe\n").unwrap();
    let source = WordSource::new(vec![dir.path().to_path_buf()]);
    assert!(source.load_words(Language::Russian).fallback().is_some());
    assert!(source.load_words(Language::English).fallback().is_some());

    let records = CAPTURE.0.lock().unwrap();
    assert!(
        records.iter().all(|(level, _)| *level > Level::Warn),
        "records: {records:?}"
    );
    let fallbacks = records
        .iter()
        .filter(|(level, msg)| *level == Level::Info && msg.contains("built-in words"))
        .count();
    assert_eq!(fallbacks, 3, "records: {records:?}");
}
