//! High-score file persistence tests

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use blockfall::core::HighScores;
use blockfall::store::{HighScoreError, HighScoreStore};

static COUNTER: AtomicU32 = AtomicU32::new(0);

fn temp_path(name: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "blockfall-{}-{}-{}.txt",
        name,
        std::process::id(),
        n
    ))
}

#[test]
fn test_missing_file_loads_zeros() {
    let store = HighScoreStore::new(temp_path("missing"));
    let ledger = store.load().unwrap();
    assert_eq!(ledger.scores(), &[0, 0, 0, 0, 0]);
}

#[test]
fn test_record_and_persist() {
    let path = temp_path("persist");
    fs::write(&path, "100\n80\n50\n20\n0\n").unwrap();
    let store = HighScoreStore::new(&path);

    let mut ledger = store.load().unwrap();
    assert!(ledger.record(90));
    store.save(&ledger).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "100\n90\n80\n50\n20\n");
    assert_eq!(store.load().unwrap().scores(), &[100, 90, 80, 50, 20]);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_short_file_is_padded() {
    let path = temp_path("short");
    fs::write(&path, "42\n\n7\n").unwrap();

    let ledger = HighScoreStore::new(&path).load().unwrap();
    assert_eq!(ledger.scores(), &[42, 7, 0, 0, 0]);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_low_score_does_not_enter_full_ledger() {
    let mut ledger = HighScores::from_scores([50, 40, 30, 20, 10]);
    assert!(!ledger.record(5));
    assert!(!ledger.qualifies(10));
    assert_eq!(ledger.scores(), &[50, 40, 30, 20, 10]);
}

#[test]
fn test_corrupt_file_reports_line() {
    let path = temp_path("corrupt");
    fs::write(&path, "100\nlots\n").unwrap();

    match HighScoreStore::new(&path).load() {
        Err(HighScoreError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected parse error, got {other:?}"),
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = temp_path("dir");
    let path = dir.join("scores.txt");
    let store = HighScoreStore::new(&path);

    store.save(&HighScores::from_scores([3, 2, 1])).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "3\n2\n1\n0\n0\n");

    fs::remove_dir_all(&dir).unwrap();
}
