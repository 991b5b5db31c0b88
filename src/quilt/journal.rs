//! Calendar-date journal resolution.
//!
//! Every calendar day maps to one file under the notebook's journal
//! directory, named after the day. The public API takes [`NaiveDate`], so
//! day granularity is enforced by the type: time of day and timezone are
//! truncated away wherever a timestamp is turned into a `NaiveDate`, and two
//! timestamps on the same calendar day cannot reach different files.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{QuiltError, Result};
use crate::model::Note;
use crate::note::{self, Decoded};
use crate::notebook::Notebook;

pub const ENTRY_EXT: &str = ".md";

/// How a range query reacts to a note that fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidNotePolicy {
    /// Drop the note, record a warning, keep going.
    #[default]
    SkipAndWarn,
    /// Propagate the decode error.
    Fail,
}

#[derive(Debug, Default)]
pub struct RangeOutcome {
    pub notes: Vec<Note>,
    pub warnings: Vec<String>,
}

pub fn entry_path(notebook: &Notebook, day: NaiveDate) -> PathBuf {
    notebook
        .journal_dir()
        .join(format!("{}{ENTRY_EXT}", day.format("%Y-%m-%d")))
}

pub fn entry_title(day: NaiveDate) -> String {
    day.format("%a, %b %-d %Y").to_string()
}

/// Returns the entry path for `day`, writing a placeholder note if none
/// exists.
///
/// Safe to call repeatedly: an existing file is returned untouched, without
/// even being read. The exists-then-write window is not guarded against a
/// concurrent caller creating the same day, so the last writer wins.
pub fn ensure_entry(notebook: &Notebook, day: NaiveDate) -> Result<PathBuf> {
    let path = entry_path(notebook, day);
    if !path.exists() {
        let id = new_note_id();
        let content = note::placeholder(&id, &entry_title(day), day);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
    }
    Ok(path)
}

/// Loads the entry for `day`. A missing journal day is `None`, not an error.
pub fn load_entry(notebook: &Notebook, day: NaiveDate) -> Result<Option<Decoded>> {
    let path = entry_path(notebook, day);
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(&path)?;
    let mut decoded = note::decode(&path, &raw)?;
    decoded.note.created_at = Some(day);
    Ok(Some(decoded))
}

/// Collects the entries for every day from `start` through `end`, both
/// inclusive, in ascending order.
///
/// Rejects `start > end` before touching the filesystem. Days are stepped by
/// calendar-day succession, so month lengths and DST transitions cannot skew
/// the walk. Decode failures follow `policy`; I/O errors always propagate.
pub fn entries_in_range(
    notebook: &Notebook,
    start: NaiveDate,
    end: NaiveDate,
    policy: InvalidNotePolicy,
) -> Result<RangeOutcome> {
    if start > end {
        return Err(QuiltError::InvalidRange { start, end });
    }

    let mut outcome = RangeOutcome::default();
    let mut day = start;
    loop {
        match load_entry(notebook, day) {
            Ok(Some(decoded)) => {
                outcome.warnings.extend(decoded.warnings);
                outcome.notes.push(decoded.note);
            }
            Ok(None) => {}
            Err(err) => {
                let recoverable = matches!(
                    err,
                    QuiltError::InvalidNote { .. } | QuiltError::MalformedFrontMatter(_)
                );
                if recoverable && policy == InvalidNotePolicy::SkipAndWarn {
                    outcome.warnings.push(err.to_string());
                } else {
                    return Err(err);
                }
            }
        }

        if day == end {
            break;
        }
        let Some(next) = day.succ_opt() else {
            break;
        };
        day = next;
    }

    Ok(outcome)
}

fn new_note_id() -> String {
    format!("note_{}", Uuid::new_v4().simple())
}
