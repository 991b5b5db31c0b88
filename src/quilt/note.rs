//! Encoding and decoding of note files.
//!
//! Decoding turns raw file text into a [`Note`]; the only write path is the
//! placeholder template for a brand-new journal entry. Existing files are
//! never re-serialized.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::{QuiltError, Result};
use crate::frontmatter::{self, Document, Value};
use crate::model::{Note, Todo};
use crate::parser;

/// A decoded note plus the warnings collected while decoding it. One bad todo
/// entry never loses the rest of the note.
#[derive(Debug)]
pub struct Decoded {
    pub note: Note,
    pub warnings: Vec<String>,
}

/// Decodes raw note text.
///
/// The `id` and `title` front-matter keys are required; each entry of the
/// `todo` list is parsed as a todo literal, and entries that fail to parse
/// are skipped with a warning. `created_at` is left unset, the journal layer
/// stamps it from the slot date.
pub fn decode(path: &Path, raw: &str) -> Result<Decoded> {
    let document = frontmatter::parse_document(raw)?;

    let id = require_scalar(&document, "id", path)?;
    let title = require_scalar(&document, "title", path)?;

    let mut todos = Vec::new();
    let mut warnings = Vec::new();
    if let Some(Value::List(entries)) = document.front_matter.get("todo") {
        for entry in entries {
            match parser::parse_todo_literal(entry) {
                Ok(literal) => todos.push(Todo {
                    id: String::new(),
                    title: literal.text,
                    tags: literal.tags,
                    notes: None,
                    repeat: None,
                }),
                Err(err) => warnings.push(format!(
                    "skipping todo {entry:?} in {}: {err}",
                    path.display()
                )),
            }
        }
    }

    Ok(Decoded {
        note: Note {
            id,
            title,
            created_at: None,
            content: raw.to_string(),
            todos,
        },
        warnings,
    })
}

/// Renders the on-disk template for a brand-new journal note. Decoding the
/// result reproduces `id` and `title` with an empty todo list.
pub fn placeholder(id: &str, title: &str, date: NaiveDate) -> String {
    format!(
        "---\nid: {id}\ntitle: {title}\ndate: {}\ntodo:\n    # - this is an example todo\n---\n\n",
        date.format("%Y-%m-%d")
    )
}

fn require_scalar(document: &Document, key: &str, path: &Path) -> Result<String> {
    match document.front_matter.get(key) {
        Some(Value::Scalar(value)) => Ok(value.clone()),
        Some(Value::List(_)) => Err(QuiltError::InvalidNote {
            path: path.to_path_buf(),
            reason: format!("front-matter key `{key}` must be a scalar"),
        }),
        None => Err(QuiltError::InvalidNote {
            path: path.to_path_buf(),
            reason: format!("missing front-matter key `{key}`"),
        }),
    }
}
