/*============================================================
  Synavera Project: Syn-Log
  Module: synlog_core
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Leveled, file-backed logging with environment tags,
    severity filtering, secondary reporting, and newest-first
    read-back of multi-line entries.

  Security / Safety Notes:
    Single flat append-only text file; no locking beyond the
    operating system's append semantics.

  Dependencies:
    chrono, serde, toml, dirs, thiserror, tracing.

  Operational Scope:
    Embedded by Synavera services and driven by the synlog
    operator binary.

  Revision History:
    2025-11-02 COD  Established Syn-Log library surface.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Explicit handles over global state
    - Result-first error handling
============================================================*/

pub mod config;
pub mod error;
pub mod fatal;
pub mod file_access;
pub mod format;
pub mod level;
pub mod logger;
pub mod report;
pub mod tail;

pub use config::SynlogConfig;
pub use error::{Result, SynlogError};
pub use fatal::{FatalHandler, ProcessExit};
pub use level::{rank_of, Level, Rank};
pub use logger::{Logger, LoggerBuilder};
pub use report::{MemorySink, ReportSink, StderrSink};
pub use tail::TailOptions;
