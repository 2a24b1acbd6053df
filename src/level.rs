/*============================================================
  Synavera Project: Syn-Log
  Module: synlog_core::level
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Resolve severity names to ordered ranks and clamp operator
    supplied threshold values.

  Security / Safety Notes:
    Pure lookups; no I/O.

  Dependencies:
    None beyond std.

  Operational Scope:
    Consulted by the logger on every write to decide
    persistence and reporting.

  Revision History:
    2025-11-02 COD  Authored level table.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Unknown inputs resolve to the most sensitive rank
    - No error paths for free-text level names
============================================================*/

use std::fmt;

/// Tag used by the `success` convenience wrapper. Not part of the rank table.
pub const SUCCESS: &str = "SUCCESS";
/// Tag used by the fatal error helper. Not part of the rank table.
pub const FATAL: &str = "FATAL";

/// Position of a level in ascending sensitivity order.
///
/// `NONE` is the lowest rank; `INFO` and `DEBUG` share the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const NONE: Rank = Rank(0);
    pub const ERROR: Rank = Rank(1);
    pub const WARNING: Rank = Rank(2);
    pub const HIGHEST: Rank = Rank(3);

    /// Clamp a configured integer into the valid rank range.
    pub fn from_configured(value: i64) -> Rank {
        if value <= 0 {
            Rank::NONE
        } else if value >= i64::from(Rank::HIGHEST.0) {
            Rank::HIGHEST
        } else {
            Rank(value as u8)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity levels known to the rank table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    None,
    Error,
    Warning,
    Info,
    Debug,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::None => "NONE",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    pub fn rank(self) -> Rank {
        match self {
            Level::None => Rank::NONE,
            Level::Error => Rank::ERROR,
            Level::Warning => Rank::WARNING,
            Level::Info | Level::Debug => Rank::HIGHEST,
        }
    }

    /// Case-insensitive lookup; `None` for custom tags such as `SUCCESS`.
    pub fn lookup(name: &str) -> Option<Level> {
        match name.to_ascii_uppercase().as_str() {
            "NONE" => Some(Level::None),
            "ERROR" => Some(Level::Error),
            "WARNING" => Some(Level::Warning),
            "INFO" => Some(Level::Info),
            "DEBUG" => Some(Level::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a free-text level name to its rank. Unknown names map to
/// [`Rank::HIGHEST`].
pub fn rank_of(name: &str) -> Rank {
    Level::lookup(name)
        .map(Level::rank)
        .unwrap_or(Rank::HIGHEST)
}
