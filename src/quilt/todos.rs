//! The notebook-level todo index, `.quilt/todos.json`.

use std::fs;

use serde::Deserialize;

use crate::error::Result;
use crate::model::Todo;
use crate::notebook::Notebook;

/// On-disk shape of the index. Historical notebooks carry the list under
/// either a `todos` or a `todo` top-level key; the reader accepts both, and
/// anything that writes the file emits `todos`.
#[derive(Debug, Default, Deserialize)]
struct RawIndex {
    #[serde(default, alias = "todo")]
    todos: Vec<serde_json::Value>,
}

#[derive(Debug, Default)]
pub struct TodoIndex {
    pub todos: Vec<Todo>,
    pub warnings: Vec<String>,
}

/// Loads the index, skipping entries that fail to deserialize so one bad
/// entry never hides the rest.
pub fn load_index(notebook: &Notebook) -> Result<TodoIndex> {
    let raw = fs::read_to_string(notebook.todo_index_path())?;
    let parsed: RawIndex = serde_json::from_str(&raw)?;

    let mut index = TodoIndex::default();
    for entry in parsed.todos {
        match serde_json::from_value::<Todo>(entry.clone()) {
            Ok(todo) => index.todos.push(todo),
            Err(err) => index
                .warnings
                .push(format!("skipping invalid todo entry {entry}: {err}")),
        }
    }
    Ok(index)
}
