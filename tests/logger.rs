/*============================================================
  Synavera Project: Syn-Log
  Module: tests::logger
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Exercise the logger end to end against real files: writes,
    filtering, reporting, fatal handling and tail reads.

  Revision History:
    2025-11-02 COD  Authored logger integration tests.
============================================================*/

use std::fmt;
use std::sync::{Arc, Mutex};

use synlog_core::{FatalHandler, Level, Logger, MemorySink, Rank};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct RecordingFatal {
    calls: Arc<Mutex<Vec<String>>>,
}

impl FatalHandler for RecordingFatal {
    fn terminate(&self, message: &str) {
        self.calls.lock().unwrap().push(message.to_string());
    }
}

#[derive(Debug)]
struct DiskFull;

impl fmt::Display for DiskFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("disk full")
    }
}

impl std::error::Error for DiskFull {}

fn fresh_logger() -> (TempDir, Logger) {
    let temp_dir = TempDir::new().unwrap();
    let logger = Logger::new(temp_dir.path().join("test.log"), "TEST", 3, 0).unwrap();
    (temp_dir, logger)
}

#[test]
fn construction_writes_initialising_entry() {
    let (_dir, logger) = fresh_logger();
    let content = std::fs::read_to_string(logger.path()).unwrap();
    assert!(!content.is_empty());
    let entries = logger.get_log(1).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].ends_with("[TEST.INFO] initialising log"));
}

#[test]
fn construction_creates_missing_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logs/app/test.log");
    let logger = Logger::new(&path, "TEST", 3, 0).unwrap();
    assert_eq!(logger.path(), path.as_path());
    assert!(path.exists());
}

#[test]
fn write_then_tail_one() {
    let (_dir, logger) = fresh_logger();
    for level in ["ERROR", "WARNING", "INFO", "DEBUG", "SUCCESS"] {
        logger.write("test write", level).unwrap();
        let entries = logger.get_log(1).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains(&format!("[TEST.{level}] test write")));
    }
}

#[test]
fn convenience_wrappers_tag_levels() {
    let (_dir, logger) = fresh_logger();
    let checks: [(Option<String>, &str); 5] = [
        (logger.success("success").unwrap(), "[TEST.SUCCESS] success"),
        (logger.debug("debug").unwrap(), "[TEST.DEBUG] debug"),
        (logger.error("error").unwrap(), "[TEST.ERROR] error"),
        (logger.warning("warning").unwrap(), "[TEST.WARNING] warning"),
        (logger.info("info").unwrap(), "[TEST.INFO] info"),
    ];
    for (entry, expected) in checks {
        assert!(entry.unwrap().ends_with(expected));
    }
    let newest = logger.get_log(1).unwrap();
    assert!(newest[0].ends_with("[TEST.INFO] info"));
}

#[test]
fn formatted_wrappers_interpolate() {
    let (_dir, logger) = fresh_logger();
    let entry = logger
        .warning_fmt(format_args!("{} of {} disks", 3, 4))
        .unwrap()
        .unwrap();
    assert!(entry.ends_with("[TEST.WARNING] 3 of 4 disks"));
    logger.info_fmt(format_args!("user={}", "ada")).unwrap();
    logger.error_fmt(format_args!("code={:03}", 7)).unwrap();
    logger.debug_fmt(format_args!("{:?}", [1, 2])).unwrap();
    logger.success_fmt(format_args!("done in {}s", 2)).unwrap();
    let entries = logger.get_log(4).unwrap();
    assert!(entries[0].ends_with("[TEST.SUCCESS] done in 2s"));
    assert!(entries[1].ends_with("[TEST.DEBUG] [1, 2]"));
    assert!(entries[2].ends_with("[TEST.ERROR] code=007"));
    assert!(entries[3].ends_with("[TEST.INFO] user=ada"));
}

#[test]
fn multiline_scenario_round_trips_newest_first() {
    let (_dir, logger) = fresh_logger();
    logger.info("a\nb").unwrap();
    logger.info("c").unwrap();

    let two = logger.get_log(2).unwrap();
    assert_eq!(two.len(), 2);
    assert!(two[0].ends_with("[TEST.INFO] c"));
    assert!(two[1].ends_with("[TEST.INFO] a\nb"));

    let all = logger.get_log(10).unwrap();
    assert_eq!(all.len(), 3);
    assert!(all[0].ends_with("[TEST.INFO] c"));
    assert!(all[1].ends_with("[TEST.INFO] a\nb"));
    assert!(all[2].ends_with("[TEST.INFO] initialising log"));
}

#[test]
fn multiline_messages_survive_long_logs() {
    let (_dir, logger) = fresh_logger();
    for i in 0..200 {
        logger.info(format!("filler entry {i}")).unwrap();
    }
    let first = "test write for get log one\nwith a few\nnewlines";
    let second = "test write for get log two\nplus this line";
    logger.info(first).unwrap();
    logger.info(second).unwrap();

    let entries = logger.get_log(2).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].contains(second));
    assert!(entries[1].contains(first));

    let everything = logger.get_log(500).unwrap();
    assert_eq!(everything.len(), 203);
    assert!(everything[202].contains("initialising log"));
    assert!(everything[2].ends_with("filler entry 199"));
}

#[test]
fn write_threshold_filters_known_levels() {
    let temp_dir = TempDir::new().unwrap();
    let logger = Logger::new(
        temp_dir.path().join("test.log"),
        "TEST",
        i64::from(Rank::ERROR.value()),
        0,
    )
    .unwrap();
    // The initialising entry is INFO and therefore filtered too.
    assert!(logger.get_log(5).unwrap().is_empty());

    logger.error("kept").unwrap();
    for level in ["DEBUG", "INFO", "WARNING"] {
        assert_eq!(logger.write("dropped", level).unwrap(), None);
        let newest = logger.get_log(1).unwrap();
        assert!(newest[0].ends_with("[TEST.ERROR] kept"));
    }
    assert_eq!(logger.get_log(10).unwrap().len(), 1);
}

#[test]
fn custom_levels_always_persist() {
    let temp_dir = TempDir::new().unwrap();
    let logger = Logger::new(temp_dir.path().join("test.log"), "TEST", 0, 0).unwrap();
    assert!(logger.write("skipped", "ERROR").unwrap().is_none());
    let entry = logger.write("kept", "AUDIT").unwrap();
    assert!(entry.unwrap().ends_with("[TEST.AUDIT] kept"));
    logger.success("also kept").unwrap();
    let entries = logger.get_log(10).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].ends_with("[TEST.SUCCESS] also kept"));
}

#[test]
fn reporting_disabled_at_none() {
    let temp_dir = TempDir::new().unwrap();
    let sink = MemorySink::new();
    let logger = Logger::builder(temp_dir.path().join("test.log"), "TEST")
        .write_level(0)
        .report_level(0)
        .report_sink(sink.clone())
        .build()
        .unwrap();
    logger.error("e").unwrap();
    logger.write("custom", "AUDIT").unwrap();
    assert!(sink.entries().is_empty());
}

#[test]
fn reporting_is_independent_of_persistence() {
    let temp_dir = TempDir::new().unwrap();
    let sink = MemorySink::new();
    let logger = Logger::builder(temp_dir.path().join("test.log"), "TEST")
        .write_level(i64::from(Rank::ERROR.value()))
        .report_level(i64::from(Rank::HIGHEST.value()))
        .report_sink(sink.clone())
        .build()
        .unwrap();

    assert_eq!(logger.debug("mirrored only").unwrap(), None);
    let reported = sink.entries();
    assert!(reported
        .last()
        .unwrap()
        .ends_with("[TEST.DEBUG] mirrored only"));
    assert!(logger
        .get_log(10)
        .unwrap()
        .iter()
        .all(|entry| !entry.contains("mirrored only")));
}

#[test]
fn written_without_being_reported() {
    let temp_dir = TempDir::new().unwrap();
    let sink = MemorySink::new();
    let logger = Logger::builder(temp_dir.path().join("test.log"), "TEST")
        .report_level(i64::from(Rank::ERROR.value()))
        .report_sink(sink.clone())
        .build()
        .unwrap();
    logger.info("file only").unwrap();
    logger.error("both").unwrap();
    assert_eq!(sink.entries().len(), 1);
    assert!(sink.entries()[0].ends_with("[TEST.ERROR] both"));
    assert_eq!(logger.get_log(10).unwrap().len(), 3);
}

#[test]
fn log_error_non_fatal_returns_entry() {
    let (_dir, logger) = fresh_logger();
    let entry = logger.log_error(&DiskFull, false);
    assert!(entry.ends_with("[TEST.ERROR] disk full"));
    let newest = logger.get_log(1).unwrap();
    assert_eq!(newest[0], entry);
}

#[test]
fn log_error_fatal_writes_then_terminates() {
    let temp_dir = TempDir::new().unwrap();
    let fatal = RecordingFatal::default();
    let logger = Logger::builder(temp_dir.path().join("test.log"), "TEST")
        .fatal_handler(fatal.clone())
        .build()
        .unwrap();
    let err: Box<dyn std::error::Error> = Box::new(DiskFull);
    let entry = logger.log_error(err.as_ref(), true);
    assert!(entry.ends_with("[TEST.FATAL] disk full"));
    assert_eq!(*fatal.calls.lock().unwrap(), vec!["disk full".to_string()]);
    assert!(logger.get_log(1).unwrap()[0].ends_with("[TEST.FATAL] disk full"));
}

#[test]
fn tail_recreates_deleted_file_as_empty() {
    let (_dir, logger) = fresh_logger();
    std::fs::remove_file(logger.path()).unwrap();
    assert!(logger.get_log(3).unwrap().is_empty());
    assert!(logger.path().exists());
    logger.write("after", Level::Info.as_str()).unwrap();
    assert_eq!(logger.get_log(3).unwrap().len(), 1);
}

#[test]
fn on_disk_format_is_grep_compatible() {
    let (_dir, logger) = fresh_logger();
    logger.write("disk full", "ERROR").unwrap();
    let content = std::fs::read_to_string(logger.path()).unwrap();
    let last = content.lines().last().unwrap();
    assert!(last.starts_with('['));
    assert_eq!(&last[21..23], "] ");
    assert!(last.ends_with("] [TEST.ERROR] disk full"));
    assert!(content.ends_with('\n'));
}
