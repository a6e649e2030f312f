#![cfg(feature = "file")]

use folio_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn directory_output_writes_a_prefixed_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("folio-file-test")
        .console(false)
        .directory(&dir)
        .level(LevelFilter::INFO)
        .init()?;
    assert!(logger.writes_file());

    tracing::info!(section = "github", "repositories loaded");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("a log file is created");

    assert!(log_file.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with("folio-file-test")));
    assert!(fs::read_to_string(&log_file)?.contains("repositories loaded"));
    Ok(())
}
