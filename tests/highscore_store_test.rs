use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use snake_tetris::core::HighScoreStore;
use snake_tetris::JsonFileStore;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> (JsonFileStore, PathBuf) {
    let path = dir.path().join("highscore.json");
    (JsonFileStore::new(&path), path)
}

#[test]
fn missing_file_loads_zero() -> Result<()> {
    let dir = TempDir::new()?;
    let (mut store, _) = store_in(&dir);
    assert_eq!(store.read()?, 0);
    assert_eq!(store.load(), 0);
    Ok(())
}

#[test]
fn save_then_load_round_trips_and_creates_parent() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("nested").join("highscore.json");
    let mut store = JsonFileStore::new(&path);
    store.save(4321);

    assert!(path.exists());
    assert_eq!(JsonFileStore::new(&path).load(), 4321);
    assert_eq!(fs::read_to_string(&path)?, r#"{"high_score":4321}"#);
    Ok(())
}

#[test]
fn later_save_replaces_value() -> Result<()> {
    let dir = TempDir::new()?;
    let (mut store, path) = store_in(&dir);
    store.save(10);
    store.save(25);
    assert_eq!(store.load(), 25);
    assert!(!path.with_extension("json.tmp").exists());
    Ok(())
}

#[test]
fn corrupt_file_reads_as_error_and_loads_zero() -> Result<()> {
    let dir = TempDir::new()?;
    let (mut store, path) = store_in(&dir);
    fs::write(&path, "not json")?;

    assert!(store.read().is_err());
    assert_eq!(store.load(), 0);

    // The next record overwrites the bad file.
    store.save(7);
    assert_eq!(store.load(), 7);
    Ok(())
}
