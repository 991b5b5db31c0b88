//! Notebook discovery and initialization.
//!
//! A directory is a notebook when it contains the `.quilt/` marker
//! subdirectory. Resolution checks `$QUILT_NOTEBOOK` first (an invalid value
//! is a warning, not an error), then walks upward from the starting directory
//! to the filesystem root, then falls back to `$QUILT_DEFAULT_NOTEBOOK`,
//! which must be valid when set.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{QuiltError, Result, SearchedPaths};

pub const MARKER_DIR: &str = ".quilt";
pub const JOURNAL_DIR: &str = "journal";
pub const TODO_INDEX_FILE: &str = "todos.json";

pub const NOTEBOOK_VAR: &str = "QUILT_NOTEBOOK";
pub const DEFAULT_NOTEBOOK_VAR: &str = "QUILT_DEFAULT_NOTEBOOK";

/// The environment overrides consulted during resolution, captured as plain
/// data so resolution itself never reads process state.
#[derive(Debug, Clone, Default)]
pub struct NotebookEnv {
    pub notebook: Option<PathBuf>,
    pub default_notebook: Option<PathBuf>,
}

impl NotebookEnv {
    pub fn from_process() -> Self {
        Self {
            notebook: env::var_os(NOTEBOOK_VAR).map(PathBuf::from),
            default_notebook: env::var_os(DEFAULT_NOTEBOOK_VAR).map(PathBuf::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    root: PathBuf,
}

/// A resolved notebook plus any warnings raised along the way (currently only
/// an invalid `$QUILT_NOTEBOOK` override).
#[derive(Debug)]
pub struct Resolution {
    pub notebook: Notebook,
    pub warnings: Vec<String>,
}

impl Notebook {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn quilt_dir(&self) -> PathBuf {
        self.root.join(MARKER_DIR)
    }

    pub fn journal_dir(&self) -> PathBuf {
        self.quilt_dir().join(JOURNAL_DIR)
    }

    pub fn todo_index_path(&self) -> PathBuf {
        self.quilt_dir().join(TODO_INDEX_FILE)
    }

    /// Whether `dir` is recognizable as a notebook root.
    pub fn is_notebook(dir: &Path) -> bool {
        dir.join(MARKER_DIR).is_dir()
    }

    /// Finds the notebook governing `start_dir`.
    pub fn resolve(start_dir: &Path, env: &NotebookEnv) -> Result<Resolution> {
        let mut warnings = Vec::new();

        if let Some(dir) = &env.notebook {
            if Self::is_notebook(dir) {
                return Ok(Resolution {
                    notebook: Notebook { root: dir.clone() },
                    warnings,
                });
            }
            warnings.push(format!(
                "${NOTEBOOK_VAR} is not a valid quilt notebook: {}",
                dir.display()
            ));
        }

        let mut searched = Vec::new();
        let mut current = start_dir.to_path_buf();
        loop {
            if Self::is_notebook(&current) {
                return Ok(Resolution {
                    notebook: Notebook { root: current },
                    warnings,
                });
            }
            searched.push(current.clone());
            match current.parent() {
                Some(parent) if parent != current => current = parent.to_path_buf(),
                // Filesystem root reached.
                _ => break,
            }
        }

        if let Some(dir) = &env.default_notebook {
            if Self::is_notebook(dir) {
                return Ok(Resolution {
                    notebook: Notebook { root: dir.clone() },
                    warnings,
                });
            }
            searched.push(dir.clone());
        }

        Err(QuiltError::NotebookNotFound(SearchedPaths(searched)))
    }

    /// Creates the notebook structure under `dir`.
    ///
    /// Idempotent: `.quilt/`, the todo index, and `journal/` are each created
    /// only if missing, and existing content is never overwritten.
    pub fn init(dir: &Path) -> Result<Notebook> {
        let notebook = Notebook {
            root: dir.to_path_buf(),
        };

        let quilt_dir = notebook.quilt_dir();
        if !quilt_dir.exists() {
            fs::create_dir_all(&quilt_dir)?;
        }

        let index = notebook.todo_index_path();
        if !index.exists() {
            let empty = serde_json::json!({ "todos": [] });
            fs::write(&index, serde_json::to_string_pretty(&empty)?)?;
        }

        let journal = notebook.journal_dir();
        if !journal.exists() {
            fs::create_dir_all(&journal)?;
        }

        // TODO: validate that an existing .quilt/ has the structure we expect
        // instead of trusting it.
        Ok(notebook)
    }
}
