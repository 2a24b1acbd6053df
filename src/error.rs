/*============================================================
  Synavera Project: Syn-Log
  Module: synlog_core::error
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Centralise Syn-Log error types so writers, tail readers and
    the operator binary share one diagnostic vocabulary.

  Security / Safety Notes:
    Error contexts expose log paths only; message bodies are
    never echoed into error values.

  Dependencies:
    thiserror for ergonomic error definitions.

  Operational Scope:
    Returned by every fallible Syn-Log operation and mapped to
    exit codes by the binary entry point.

  Revision History:
    2025-11-02 COD  Established shared error definitions.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Explicit error taxonomy with actionable context
    - No silent failure paths
    - Stable exit codes for operational tooling
============================================================*/

use std::process::ExitCode;

use thiserror::Error;

/// Result alias for Syn-Log operations.
pub type Result<T> = std::result::Result<T, SynlogError>;

/// Enumerates high-level error domains surfaced by Syn-Log.
#[derive(Debug, Error)]
pub enum SynlogError {
    #[error("Filesystem: {0}")]
    Filesystem(String),
    #[error("Tail read did not converge after {attempts} attempts")]
    TailTimeout { attempts: u32 },
    #[error("Configuration: {0}")]
    Config(String),
    #[error("Serialization: {0}")]
    Serialization(String),
}

impl SynlogError {
    /// Map error category to a deterministic exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SynlogError::Config(_) => ExitCode::from(20),
            SynlogError::Serialization(_) => ExitCode::from(31),
            SynlogError::Filesystem(_) => ExitCode::from(40),
            SynlogError::TailTimeout { .. } => ExitCode::from(50),
        }
    }
}
