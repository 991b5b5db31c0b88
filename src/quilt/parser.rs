//! The todo-literal micro-syntax: an optional quoted text segment plus any
//! number of `+tag` tokens, e.g. `"ship the release" +work +urgent`.
//!
//! Todo entry is forgiving free text, so the parser degrades instead of
//! failing wherever it can. The single hard error is a quote that never
//! closes.

use crate::error::{QuiltError, Result};
use crate::model::Tag;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoLiteral {
    pub text: String,
    pub tags: Vec<Tag>,
}

enum State {
    Scanning,
    InQuotedText,
    InTag,
}

/// Parses a todo literal in a single left-to-right pass.
///
/// - `"` opens a text segment taken verbatim up to the closing `"`; when
///   several appear, the last one wins.
/// - `+` opens a tag ending at the next space or end of input. Names are kept
///   literally: no trimming, no case folding, no de-duplication.
/// - Anything else outside a segment is skipped, leaving room for future
///   syntax.
///
/// Empty or all-whitespace input yields an empty literal. End of input inside
/// a quoted segment fails with [`QuiltError::UnterminatedLiteral`].
pub fn parse_todo_literal(input: &str) -> Result<TodoLiteral> {
    let mut todo = TodoLiteral::default();
    let mut state = State::Scanning;
    let mut segment = String::new();

    for ch in input.chars() {
        match state {
            State::Scanning => match ch {
                '"' => {
                    segment.clear();
                    state = State::InQuotedText;
                }
                '+' => {
                    segment.clear();
                    state = State::InTag;
                }
                _ => {}
            },
            State::InQuotedText => {
                if ch == '"' {
                    todo.text = std::mem::take(&mut segment);
                    state = State::Scanning;
                } else {
                    segment.push(ch);
                }
            }
            State::InTag => {
                if ch == ' ' {
                    todo.tags.push(Tag::new(std::mem::take(&mut segment)));
                    state = State::Scanning;
                } else {
                    segment.push(ch);
                }
            }
        }
    }

    match state {
        State::InQuotedText => Err(QuiltError::UnterminatedLiteral),
        State::InTag => {
            todo.tags.push(Tag::new(segment));
            Ok(todo)
        }
        State::Scanning => Ok(todo),
    }
}
