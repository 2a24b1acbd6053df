/*============================================================
  Synavera Project: Syn-Log
  Module: synlog_core::config
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Load Syn-Log settings from TOML and turn them into a
    configured Logger.

  Security / Safety Notes:
    Only reads the configuration file; never writes it.

  Dependencies:
    serde + toml for parsing, dirs for platform locations.

  Operational Scope:
    Used by the synlog binary and by embedding applications
    that prefer file-driven configuration.

  Revision History:
    2025-11-02 COD  Authored configuration loader.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Defaults for every field
    - Validation before use
============================================================*/

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynlogError};
use crate::level::{rank_of, Rank};
use crate::logger::Logger;
use crate::tail::TailOptions;

const APP_DIR: &str = "synlog";

/// Root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynlogConfig {
    pub log: LogSection,
    pub tail: TailOptions,
}

/// `[log]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub path: Option<PathBuf>,
    pub env: String,
    pub level: String,
    pub report_level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            path: None,
            env: "PRODUCTION".to_string(),
            level: "INFO".to_string(),
            report_level: "NONE".to_string(),
        }
    }
}

impl SynlogConfig {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields defaults; a missing explicit file is
    /// an error.
    pub fn load_from_optional_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => Self::load(explicit),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            SynlogError::Config(format!("Failed to read config {}: {err}", path.display()))
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: SynlogConfig = toml::from_str(raw)
            .map_err(|err| SynlogError::Serialization(format!("Invalid config TOML: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tail.chunk_size == 0 {
            return Err(SynlogError::Config("tail.chunk_size must be positive".into()));
        }
        if self.tail.max_attempts == 0 {
            return Err(SynlogError::Config("tail.max_attempts must be positive".into()));
        }
        Ok(())
    }

    /// `<config dir>/synlog/config.toml`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Configured log path, else `<data dir>/synlog/synlog.log`.
    pub fn log_path(&self) -> PathBuf {
        self.log.path.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join("synlog.log")
        })
    }

    pub fn write_rank(&self) -> Rank {
        rank_of(&self.log.level)
    }

    pub fn report_rank(&self) -> Rank {
        rank_of(&self.log.report_level)
    }

    /// Build a logger from these settings.
    pub fn open_logger(&self) -> Result<Logger> {
        Logger::builder(self.log_path(), self.log.env.clone())
            .write_level(i64::from(self.write_rank().value()))
            .report_level(i64::from(self.report_rank().value()))
            .tail_options(self.tail)
            .build()
    }
}
