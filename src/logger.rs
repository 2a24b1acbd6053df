/*============================================================
  Synavera Project: Syn-Log
  Module: synlog_core::logger
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Provide leveled, append-only, environment-tagged logging to
    a flat text file, plus read-back of the newest entries.

  Security / Safety Notes:
    Messages are persisted verbatim. File handles are opened
    per call and released before returning.

  Dependencies:
    std::fs::File via file_access, chrono via format, tracing
    for internal diagnostics.

  Operational Scope:
    Owned by the embedding application and passed to its
    collaborators; never a process-wide singleton.

  Revision History:
    2025-11-02 COD  Reworked logger for Syn-Log file semantics.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Append-only logging with UTC timestamps
    - Deterministic formatting for auditability
    - Graceful error propagation on I/O failures
============================================================*/

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Result, SynlogError};
use crate::fatal::{FatalHandler, ProcessExit};
use crate::file_access::{open_for_append, open_for_read};
use crate::format::format_entry;
use crate::level::{Level, Rank, FATAL, SUCCESS};
use crate::report::{ReportSink, StderrSink};
use crate::tail::{read_tail, TailOptions};

const INIT_MESSAGE: &str = "initialising log";

/// Leveled logger backed by a single append-only file.
pub struct Logger {
    path: PathBuf,
    env: String,
    write_threshold: Rank,
    report_threshold: Rank,
    tail: TailOptions,
    sink: Box<dyn ReportSink>,
    fatal: Box<dyn FatalHandler>,
}

/// Configures and constructs a [`Logger`].
pub struct LoggerBuilder {
    path: PathBuf,
    env: String,
    write_level: i64,
    report_level: i64,
    tail: TailOptions,
    sink: Box<dyn ReportSink>,
    fatal: Box<dyn FatalHandler>,
}

impl LoggerBuilder {
    /// Write threshold as a configured rank; clamped on build.
    pub fn write_level(mut self, level: i64) -> Self {
        self.write_level = level;
        self
    }

    /// Report threshold as a configured rank; clamped on build.
    pub fn report_level(mut self, level: i64) -> Self {
        self.report_level = level;
        self
    }

    pub fn tail_options(mut self, options: TailOptions) -> Self {
        self.tail = options;
        self
    }

    pub fn report_sink(mut self, sink: impl ReportSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn fatal_handler(mut self, handler: impl FatalHandler + 'static) -> Self {
        self.fatal = Box::new(handler);
        self
    }

    /// Build the logger and write the initialising entry.
    pub fn build(self) -> Result<Logger> {
        let logger = Logger {
            path: self.path,
            env: self.env,
            write_threshold: Rank::from_configured(self.write_level),
            report_threshold: Rank::from_configured(self.report_level),
            tail: self.tail,
            sink: self.sink,
            fatal: self.fatal,
        };
        let (_, outcome) = logger.dispatch(INIT_MESSAGE, Level::Info.as_str());
        outcome?;
        Ok(logger)
    }
}

impl Logger {
    /// Build a logger with default sinks and write the initialising entry.
    pub fn new(
        path: impl Into<PathBuf>,
        env: impl Into<String>,
        write_level: i64,
        report_level: i64,
    ) -> Result<Self> {
        Self::builder(path, env)
            .write_level(write_level)
            .report_level(report_level)
            .build()
    }

    /// Start configuring a logger. Thresholds default to the most
    /// sensitive write rank and no reporting.
    pub fn builder(path: impl Into<PathBuf>, env: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            path: path.into(),
            env: env.into(),
            write_level: i64::from(Rank::HIGHEST.value()),
            report_level: i64::from(Rank::NONE.value()),
            tail: TailOptions::default(),
            sink: Box::new(StderrSink),
            fatal: Box::new(ProcessExit),
        }
    }

    /// Write `message` tagged with `level` (used verbatim).
    ///
    /// Returns the formatted entry when it was persisted and `None` when the
    /// write threshold filtered it out. Reporting is decided independently.
    pub fn write<S: AsRef<str>>(&self, message: S, level: &str) -> Result<Option<String>> {
        let (entry, outcome) = self.dispatch(message.as_ref(), level);
        Ok(outcome?.then_some(entry))
    }

    pub fn error<S: AsRef<str>>(&self, message: S) -> Result<Option<String>> {
        self.write(message, Level::Error.as_str())
    }

    pub fn warning<S: AsRef<str>>(&self, message: S) -> Result<Option<String>> {
        self.write(message, Level::Warning.as_str())
    }

    pub fn info<S: AsRef<str>>(&self, message: S) -> Result<Option<String>> {
        self.write(message, Level::Info.as_str())
    }

    pub fn debug<S: AsRef<str>>(&self, message: S) -> Result<Option<String>> {
        self.write(message, Level::Debug.as_str())
    }

    pub fn success<S: AsRef<str>>(&self, message: S) -> Result<Option<String>> {
        self.write(message, SUCCESS)
    }

    pub fn error_fmt(&self, args: fmt::Arguments<'_>) -> Result<Option<String>> {
        self.error(args.to_string())
    }

    pub fn warning_fmt(&self, args: fmt::Arguments<'_>) -> Result<Option<String>> {
        self.warning(args.to_string())
    }

    pub fn info_fmt(&self, args: fmt::Arguments<'_>) -> Result<Option<String>> {
        self.info(args.to_string())
    }

    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) -> Result<Option<String>> {
        self.debug(args.to_string())
    }

    pub fn success_fmt(&self, args: fmt::Arguments<'_>) -> Result<Option<String>> {
        self.success(args.to_string())
    }

    /// Log `err` at `ERROR`, or at `FATAL` followed by the fatal handler.
    ///
    /// Returns the formatted entry that was written or attempted. Write
    /// failures are logged through `tracing` and otherwise swallowed.
    pub fn log_error<E: fmt::Display + ?Sized>(&self, err: &E, fatal: bool) -> String {
        let message = err.to_string();
        let level = if fatal { FATAL } else { Level::Error.as_str() };
        let (entry, outcome) = self.dispatch(&message, level);
        if let Err(write_err) = outcome {
            warn!(path = %self.path.display(), error = %write_err, "Failed to persist error entry");
        }
        if fatal {
            self.fatal.terminate(&message);
        }
        entry
    }

    /// Return the newest `count` entries, newest first. Logs too small to
    /// window are scanned whole and returned in full.
    pub fn get_log(&self, count: usize) -> Result<Vec<String>> {
        let mut file = open_for_read(&self.path)?;
        let size = file
            .metadata()
            .map_err(|err| {
                SynlogError::Filesystem(format!(
                    "Failed to stat log {}: {err}",
                    self.path.display()
                ))
            })?
            .len();
        read_tail(&mut file, size, count, &self.tail)
    }

    /// Return the path backing this logger.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    pub fn write_threshold(&self) -> Rank {
        self.write_threshold
    }

    pub fn report_threshold(&self) -> Rank {
        self.report_threshold
    }

    /// Whether an entry at `level` is persisted. Custom tags always are.
    pub fn should_persist(&self, level: &str) -> bool {
        Level::lookup(level).map_or(true, |known| known.rank() <= self.write_threshold)
    }

    /// Whether an entry at `level` is mirrored to the report sink.
    pub fn should_report(&self, level: &str) -> bool {
        if self.report_threshold <= Rank::NONE {
            return false;
        }
        Level::lookup(level).map_or(true, |known| known.rank() <= self.report_threshold)
    }

    /// Format, report and (when allowed) persist one entry. The entry is
    /// returned without its line terminator alongside whether it was written.
    fn dispatch(&self, message: &str, level: &str) -> (String, Result<bool>) {
        let formatted = format_entry(&self.env, level, message);
        let entry = formatted
            .strip_suffix('\n')
            .unwrap_or(&formatted)
            .to_string();
        if self.should_report(level) {
            self.sink.report(&entry);
        }
        if !self.should_persist(level) {
            return (entry, Ok(false));
        }
        let outcome = self.append(&formatted).map(|()| true);
        (entry, outcome)
    }

    fn append(&self, formatted: &str) -> Result<()> {
        let mut file = open_for_append(&self.path)?;
        file.write_all(formatted.as_bytes()).map_err(|err| {
            SynlogError::Filesystem(format!(
                "Failed to write to log file {}: {err}",
                self.path.display()
            ))
        })
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("path", &self.path)
            .field("env", &self.env)
            .field("write_threshold", &self.write_threshold)
            .field("report_threshold", &self.report_threshold)
            .field("tail", &self.tail)
            .finish_non_exhaustive()
    }
}
