/*============================================================
  Synavera Project: Syn-Log
  Module: synlog_core::fatal
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Isolate process termination behind a handler so embedding
    applications and tests can substitute their own.

  Security / Safety Notes:
    The default handler ends the process; it is reached only
    through the explicit fatal error helper.

  Dependencies:
    None beyond std.

  Operational Scope:
    Invoked by Logger::log_error after the fatal entry has been
    written (or the write attempted).

  Revision History:
    2025-11-02 COD  Authored fatal handler seam.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Termination is an explicit, documented contract
============================================================*/

/// Called once a fatal entry has been handled by the logger.
pub trait FatalHandler: Send + Sync {
    /// `message` is the underlying error text.
    fn terminate(&self, message: &str);
}

/// Prints the error to stderr and exits with status 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl FatalHandler for ProcessExit {
    fn terminate(&self, message: &str) {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
