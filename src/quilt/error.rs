use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The directories examined while looking for a notebook, in search order.
#[derive(Debug, Clone, Default)]
pub struct SearchedPaths(pub Vec<PathBuf>);

impl fmt::Display for SearchedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", path.display())?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum QuiltError {
    #[error("no quilt notebook found (searched: {0})")]
    NotebookNotFound(SearchedPaths),

    #[error("invalid note {path}: {reason}")]
    InvalidNote { path: PathBuf, reason: String },

    #[error("malformed front matter: {0:?}")]
    MalformedFrontMatter(String),

    #[error("unterminated text literal")]
    UnterminatedLiteral,

    #[error("end date {end} cannot be before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    #[error("editor error: {0}")]
    Editor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuiltError>;
