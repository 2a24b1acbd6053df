/*============================================================
  Synavera Project: Syn-Log
  Module: synlog_core::report
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Secondary sinks that mirror selected entries to an
    operational stream, independent of file persistence.

  Security / Safety Notes:
    Sinks receive the fully formatted entry, including the
    environment tag.

  Dependencies:
    None beyond std.

  Operational Scope:
    Injected into the logger at construction.

  Revision History:
    2025-11-02 COD  Authored report sinks.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Collaborators injected, never hardwired
============================================================*/

use std::sync::{Arc, Mutex, PoisonError};

/// Receives mirrored entries.
pub trait ReportSink: Send + Sync {
    fn report(&self, entry: &str);
}

/// Mirrors entries to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl ReportSink for StderrSink {
    fn report(&self, entry: &str) {
        eprintln!("{entry}");
    }
}

/// Captures mirrored entries in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ReportSink for MemorySink {
    fn report(&self, entry: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.to_string());
    }
}
