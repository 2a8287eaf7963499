//! Capture writers: interleaving, clones, and rotation awareness

use logtee::{FileSinkOptions, Level, Logger};
use std::fs;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use tempfile::tempdir;

#[test]
fn test_captured_bytes_interleave_with_records_in_append_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logs/app.log");

    let mut logger = Logger::new();
    logger.configure(&path, Level::Info);
    let mut writer = logger.capture_writer().expect("file sink attached");

    logger.info("first record");
    writeln!(writer, "captured between").unwrap();
    logger.info("second record");
    logger.flush();

    let contents = fs::read_to_string(&path).unwrap();
    let first = contents.find("first record").unwrap();
    let between = contents.find("captured between").unwrap();
    let second = contents.find("second record").unwrap();
    assert!(first < between && between < second);
}

#[test]
fn test_capture_writer_follows_the_file_across_rotation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");

    let mut logger = Logger::new();
    let mut writer = logger
        .configure_file_only(FileSinkOptions {
            path: path.clone(),
            max_bytes: 100,
            backup_count: 1,
            threshold: Level::Info,
        })
        .unwrap();

    writer.write_all(&[b'a'; 60]).unwrap();
    writer.write_all(&[b'b'; 60]).unwrap();

    // The second write rotated; the writer moved to the fresh file rather
    // than chasing the renamed one.
    assert_eq!(fs::read(&path).unwrap(), vec![b'b'; 60]);
    assert_eq!(
        fs::read(dir.path().join("app.log.1")).unwrap(),
        vec![b'a'; 60]
    );
}

#[test]
fn test_concurrent_writers_never_tear_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.log");

    let mut logger = Logger::new();
    let writer = logger
        .configure_file_only(FileSinkOptions {
            path: path.clone(),
            max_bytes: 0,
            ..FileSinkOptions::default()
        })
        .unwrap();
    let logger = Arc::new(logger);

    let mut handles = Vec::new();
    for t in 0..4 {
        let logger = Arc::clone(&logger);
        let mut writer = writer.clone();
        handles.push(thread::spawn(move || {
            for i in 0..25 {
                logger.info(format!("thread {t} record {i}"));
                writeln!(writer, "thread {t} capture {i}").unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    logger.flush();

    let contents = fs::read_to_string(&path).unwrap();
    let line_re = regex::Regex::new(
        r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3} INFO: thread \d record \d+|thread \d capture \d+)$",
    )
    .unwrap();

    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 200);
    for line in &lines {
        assert!(line_re.is_match(line), "torn line: {line:?}");
    }
}
