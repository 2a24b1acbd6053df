/*============================================================
  Synavera Project: Syn-Log
  Module: synlog_core::format
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Render log entries in the Syn-Log on-disk format and
    recognise entry header lines when reading back.

  Security / Safety Notes:
    Messages are written verbatim; no escaping is applied, so
    a message line shaped like a header splits the entry on
    read-back.

  Dependencies:
    chrono for RFC-3339 UTC timestamps.

  Operational Scope:
    Shared by the writer and the tail reader.

  Revision History:
    2025-11-02 COD  Authored entry formatter.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Deterministic formatting for auditability
    - Grep-compatible single-line headers
============================================================*/

use chrono::{DateTime, SecondsFormat, Utc};

/// Render one entry stamped with the current time.
pub fn format_entry(env: &str, level: &str, message: &str) -> String {
    format_entry_at(Utc::now(), env, level, message)
}

/// Render one entry: `[<timestamp>] [<env>.<level>] <message>\n`.
pub fn format_entry_at(timestamp: DateTime<Utc>, env: &str, level: &str, message: &str) -> String {
    format!(
        "[{}] [{env}.{level}] {message}\n",
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// True when the line opens with `[YYYY-MM-DD`.
pub fn is_header(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() < 11 {
        return false;
    }
    let digits = |range: &[u8]| range.iter().all(u8::is_ascii_digit);
    bytes[0] == b'['
        && digits(&bytes[1..5])
        && bytes[5] == b'-'
        && digits(&bytes[6..8])
        && bytes[8] == b'-'
        && digits(&bytes[9..11])
}
