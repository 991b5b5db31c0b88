//! External editor integration for journal entries.

use std::env;
use std::path::Path;
use std::process::Command;

use crate::error::{QuiltError, Result};

/// Picks the editor command: `$EDITOR`, then `$VISUAL`, then common
/// fallbacks found on `PATH`.
pub fn resolve_editor() -> Result<String> {
    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(editor) = env::var("VISUAL") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(QuiltError::Editor(
        "no editor found; set $EDITOR".to_string(),
    ))
}

/// Opens `path` in the user's editor and waits for it to close. Journal
/// entries are edited in place, so there is nothing to read back.
pub fn open_in_editor(path: &Path) -> Result<()> {
    let editor = resolve_editor()?;

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| QuiltError::Editor(format!("failed to launch '{editor}': {e}")))?;

    if !status.success() {
        return Err(QuiltError::Editor(format!(
            "'{editor}' exited with non-zero status"
        )));
    }
    Ok(())
}
