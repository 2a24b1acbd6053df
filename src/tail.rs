/*============================================================
  Synavera Project: Syn-Log
  Module: synlog_core::tail
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Return the newest N logical entries of a log file using
    backward-growing windowed reads, with a whole-file scan
    when the window would reach past the start of the file.

  Security / Safety Notes:
    Reads are bounded by the file size observed at open time.
    Invalid UTF-8 is replaced rather than rejected.

  Dependencies:
    std::io::{Read, Seek}; serde for tunables; tracing for
    diagnostics.

  Operational Scope:
    Backs Logger::get_log. Generic over any seekable reader.

  Revision History:
    2025-11-02 COD  Authored windowed tail reader.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Bounded retries with an explicit timeout failure
    - Newest-first ordering on every path
============================================================*/

use std::io::{Read, Seek, SeekFrom};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SynlogError};
use crate::format::is_header;

/// Per-entry byte estimate used to size the first window.
pub const CHUNK_SIZE: u64 = 50;
/// Number of windowed reads attempted before giving up.
pub const MAX_ATTEMPTS: u32 = 2000;

/// Tunables for the windowed tail reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailOptions {
    pub chunk_size: u64,
    pub max_attempts: u32,
}

impl Default for TailOptions {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

/// Read-window state carried between attempts.
///
/// Attempt `k` covers the last `chunk_size * count * k` bytes of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    size: u64,
    attempt: u32,
}

impl Window {
    fn first(count: u64, chunk_size: u64) -> Self {
        Self {
            size: chunk_size.saturating_mul(count),
            attempt: 1,
        }
    }

    /// Start offset of the window, or `None` when it would begin before byte 0.
    fn offset(self, file_size: u64) -> Option<u64> {
        file_size.checked_sub(self.size)
    }

    fn grow(self, count: u64, chunk_size: u64) -> Self {
        let attempt = self.attempt + 1;
        Self {
            size: chunk_size
                .saturating_mul(count)
                .saturating_mul(u64::from(attempt)),
            attempt,
        }
    }
}

/// Outcome of one windowed attempt.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Done(Vec<String>),
    Grow,
    WholeFile,
}

/// Return the newest `count` entries of `reader`, newest first.
///
/// `file_size` is the byte length observed when the reader was opened.
/// When the window would start before byte 0 the whole file is scanned and
/// every entry in it is returned, even past `count`. An empty file or a
/// zero `count` yields no entries.
pub fn read_tail<R: Read + Seek>(
    reader: &mut R,
    file_size: u64,
    count: usize,
    options: &TailOptions,
) -> Result<Vec<String>> {
    if count == 0 || file_size == 0 {
        return Ok(Vec::new());
    }
    let wanted = count as u64;
    let chunk_size = options.chunk_size.max(1);
    let mut window = Window::first(wanted, chunk_size);

    loop {
        match step(reader, file_size, count, window)? {
            Step::Done(entries) => return Ok(entries),
            Step::WholeFile => {
                debug!(
                    file_size,
                    window = window.size,
                    "Tail window exceeds file; scanning whole file"
                );
                return read_whole(reader, file_size);
            }
            Step::Grow if window.attempt >= options.max_attempts => {
                return Err(SynlogError::TailTimeout {
                    attempts: window.attempt,
                });
            }
            Step::Grow => {
                window = window.grow(wanted, chunk_size);
                debug!(
                    attempt = window.attempt,
                    window = window.size,
                    "Growing tail window"
                );
            }
        }
    }
}

fn step<R: Read + Seek>(
    reader: &mut R,
    file_size: u64,
    count: usize,
    window: Window,
) -> Result<Step> {
    let Some(offset) = window.offset(file_size) else {
        return Ok(Step::WholeFile);
    };
    let bytes = read_range(reader, offset, window.size)?;
    let mut entries = entries_backward(&String::from_utf8_lossy(&bytes));
    if entries.len() >= count {
        entries.truncate(count);
        return Ok(Step::Done(entries));
    }
    Ok(Step::Grow)
}

fn read_whole<R: Read + Seek>(reader: &mut R, file_size: u64) -> Result<Vec<String>> {
    let bytes = read_range(reader, 0, file_size)?;
    let mut entries = entries_forward(&String::from_utf8_lossy(&bytes));
    entries.reverse();
    Ok(entries)
}

fn read_range<R: Read + Seek>(reader: &mut R, offset: u64, len: u64) -> Result<Vec<u8>> {
    let len = usize::try_from(len).map_err(|_| {
        SynlogError::Filesystem(format!("Tail window of {len} bytes exceeds addressable memory"))
    })?;
    reader.seek(SeekFrom::Start(offset)).map_err(|err| {
        SynlogError::Filesystem(format!("Failed to seek log to offset {offset}: {err}"))
    })?;
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).map_err(|err| {
        SynlogError::Filesystem(format!(
            "Failed to read {len} bytes of log at offset {offset}: {err}"
        ))
    })?;
    Ok(buf)
}

/// Reconstruct complete entries from a window, newest first.
///
/// The first physical line may be cut mid-way by the window start and is
/// ignored, as are lines above the topmost header (their header lies
/// outside the window).
fn entries_backward(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut entries = Vec::new();
    let mut body: Vec<&str> = Vec::new();
    for &line in lines.iter().skip(1).rev() {
        if is_header(line) {
            entries.push(render(std::iter::once(line).chain(body.drain(..).rev())));
        } else {
            body.push(line);
        }
    }
    entries
}

/// Group every line of `text` into entries, oldest first. Lines before the
/// first header form an entry of their own.
fn entries_forward(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut node: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        if is_header(line) && !node.is_empty() {
            push_rendered(&mut entries, render(node.drain(..)));
        }
        node.push(line);
    }
    push_rendered(&mut entries, render(node.drain(..)));
    entries
}

fn push_rendered(entries: &mut Vec<String>, entry: String) {
    if !entry.is_empty() {
        entries.push(entry);
    }
}

fn render<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
