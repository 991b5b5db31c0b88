//! # Quilt Architecture
//!
//! Quilt is a **UI-agnostic journaling library**: a notebook of dated notes
//! and inline todos living in a directory on disk. The CLI in `main.rs` is
//! just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs + args.rs)                                     │
//! │  - Parses arguments, styles output, handles exit codes       │
//! │  - The ONLY place that prints or reads the terminal          │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Resolution layer (notebook, journal, todos)                 │
//! │  - Finds the governing notebook for a working directory      │
//! │  - Maps calendar dates to note files, creates placeholders   │
//! │  - Aggregates notes across date ranges                       │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Parsing layer (frontmatter, parser, note)                   │
//! │  - Fenced front-matter extraction                            │
//! │  - The todo-literal micro-syntax                             │
//! │  - Decoding raw text into Note/Todo entities                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key principles
//!
//! - **No I/O assumptions in the library.** Functions take arguments and
//!   return `Result` values; nothing below `main.rs` writes to stdout or
//!   reads process environment (the two exceptions are explicit constructors:
//!   [`notebook::NotebookEnv::from_process`] and [`editor::resolve_editor`]).
//! - **Warnings are data.** Operations that tolerate partial failure (a bad
//!   todo entry, an invalid note inside a range) return their warnings in the
//!   result struct instead of logging. The caller decides what to surface.
//! - **Day granularity by type.** The journal API takes `NaiveDate`, so two
//!   timestamps on the same calendar day cannot resolve to different files.
//!
//! ## Module overview
//!
//! - [`notebook`]: notebook discovery (env overrides + upward walk) and init
//! - [`journal`]: date to file mapping, idempotent entry creation, ranges
//! - [`note`]: decoding note files, the placeholder template
//! - [`frontmatter`]: the fenced key/value block at the top of a note
//! - [`parser`]: the `"text" +tag` todo-literal syntax
//! - [`todos`]: the notebook-level todo index file
//! - [`model`]: core data types (`Note`, `Todo`, `Tag`)
//! - [`dates`]: CLI date arguments (`today`, `yesterday`, ISO dates)
//! - [`editor`]: external `$EDITOR` integration
//! - [`error`]: error types

pub mod dates;
pub mod editor;
pub mod error;
pub mod frontmatter;
pub mod journal;
pub mod model;
pub mod note;
pub mod notebook;
pub mod parser;
pub mod todos;
