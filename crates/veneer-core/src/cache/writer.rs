//! Generate-once-if-absent artifact persistence.
//!
//! One process-wide mutex serializes every existence-check-and-write across
//! all entities and paths. Coarse on purpose: the requirement is "at most one
//! write per path, ever", and a single lock makes that trivially true. An
//! existing file is never touched, whatever the caller supplies, so
//! hand-edits to a generated artifact survive until the entity's timestamp
//! (and with it the path) moves on.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use crate::cache::key::TEMPLATE_EXT;
use crate::error::{RenderError, RenderResult};
use crate::header::{wrap_body, AUTOGENERATED_TAG};

/// What the writer found at the resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// The artifact already existed; nothing was written.
    Hit,
    /// The artifact was missing and has been written.
    Written,
}

fn generation_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Ensures an artifact exists at `absolute`, writing header + body on a miss.
///
/// Creates the containing directory on demand. If `body` already carries the
/// sentinel marker it is written unchanged; otherwise the header block and a
/// two-blank-line separator are prepended. The whole check-then-write runs
/// under the process-wide generation lock.
pub fn ensure_artifact(
    absolute: &Path,
    header: &[String],
    body: &str,
) -> RenderResult<CacheOutcome> {
    let _guard = generation_lock()
        .lock()
        .map_err(|_| RenderError::LockPoisoned)?;

    if let Some(dir) = absolute.parent() {
        fs::create_dir_all(dir)?;
    }

    if absolute.exists() {
        tracing::debug!(path = %absolute.display(), "artifact cache hit");
        return Ok(CacheOutcome::Hit);
    }

    if body.contains(AUTOGENERATED_TAG) {
        fs::write(absolute, body)?;
    } else {
        fs::write(absolute, wrap_body(header, body))?;
    }
    tracing::info!(path = %absolute.display(), "artifact written");

    Ok(CacheOutcome::Written)
}

/// Removes artifact files under `dir` (and its immediate field
/// subdirectories) whose `{millis}.tera` stem is strictly older than
/// `current_millis`. Returns the number of files removed. A missing
/// directory removes nothing.
pub(crate) fn sweep_stale_entity(dir: &Path, current_millis: i64) -> RenderResult<usize> {
    let _guard = generation_lock()
        .lock()
        .map_err(|_| RenderError::LockPoisoned)?;

    let mut removed = sweep_dir(dir, current_millis)?;
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(removed);
    };
    for entry in entries.flatten() {
        if entry.path().is_dir() {
            removed += sweep_dir(&entry.path(), current_millis)?;
        }
    }
    Ok(removed)
}

fn sweep_dir(dir: &Path, current_millis: i64) -> RenderResult<usize> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(0);
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().map(|e| e == TEMPLATE_EXT).unwrap_or(false) {
            continue;
        }
        let stamp = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse::<i64>().ok());
        if let Some(stamp) = stamp {
            if stamp < current_millis {
                fs::remove_file(&path)?;
                removed += 1;
                tracing::debug!(path = %path.display(), "stale artifact removed");
            }
        }
    }
    Ok(removed)
}
