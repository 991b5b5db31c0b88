use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named label attached to a todo. Pure value type: identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Empty for todos parsed out of a note file; the file format stores no
    /// per-todo identifiers.
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    // Derived from the journal slot at load time, never written back to the file.
    pub created_at: Option<NaiveDate>,
    /// The raw file text, front matter included.
    pub content: String,
    pub todos: Vec<Todo>,
}
