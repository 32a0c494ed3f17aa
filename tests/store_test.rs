use std::fs;

use snake_arcade::core::ScoreRecord;
use snake_arcade::types::MAX_HISTORY;
use snake_arcade::ScoreStore;

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("snake_scores.txt"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_sorts_caps_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("snake_scores.txt"));

    let records: Vec<ScoreRecord> = (0..30u32)
        .map(|i| ScoreRecord::new(format!("p{}", i), i, "2024-01-01 10:00:00 AM"))
        .collect();
    store.save(&records).unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert_eq!(text.lines().count(), MAX_HISTORY);
    assert_eq!(text.lines().next(), Some("p29|29|2024-01-01 10:00:00 AM"));

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), MAX_HISTORY);
    assert_eq!(loaded[0].score, 29);
    assert_eq!(loaded[MAX_HISTORY - 1].score, 5);
}

#[test]
fn save_creates_parent_directories_and_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("scores.txt");
    let store = ScoreStore::new(&path);
    store.save(&[ScoreRecord::new("Ann", 70, "t")]).unwrap();

    assert!(path.exists());
    let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn malformed_file_is_an_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.txt");
    fs::write(&path, "Ann|70|t\nbroken line\n").unwrap();

    let err = ScoreStore::new(&path).load().unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("scores.txt"), "{}", message);
    assert!(message.contains("line 2"), "{}", message);
}

#[test]
fn blank_lines_are_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.txt");
    fs::write(&path, "Ann|70|t\n\nBob|40|t\n\n").unwrap();
    assert_eq!(ScoreStore::new(&path).load().unwrap().len(), 2);
}
