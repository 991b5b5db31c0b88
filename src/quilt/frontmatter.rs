//! Fenced front-matter extraction.
//!
//! A note file may begin with a `---` fence on its very first line, followed
//! by a flat key/value block, a closing `---` line, and the free-text body.
//! The block grammar is a minimal YAML subset: string scalars and lists of
//! strings, with `#` comments and blank lines allowed.
//!
//! This is hand-rolled rather than delegated to a YAML crate: the subset is
//! tiny, and diagnostics must carry the exact offending line so a bad note
//! can be reported without losing the rest of a range query.

use std::collections::HashMap;

use crate::error::{QuiltError, Result};

const FENCE: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(value) => Some(value),
            Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Scalar(_) => None,
            Value::List(items) => Some(items),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub front_matter: HashMap<String, Value>,
    /// The text after the closing fence, or the whole input when no
    /// front-matter block is present.
    pub body: String,
}

/// Splits a document into front matter and body.
///
/// A block is recognized only when the first line is exactly the fence. No
/// opening fence, or an opening fence that never closes, means the whole
/// input is body. Unparseable block content fails with
/// [`QuiltError::MalformedFrontMatter`] carrying the offending line.
pub fn parse_document(input: &str) -> Result<Document> {
    let Some(block) = split_fenced_block(input) else {
        return Ok(Document {
            front_matter: HashMap::new(),
            body: input.to_string(),
        });
    };

    Ok(Document {
        front_matter: parse_block(block.content)?,
        body: block.body.to_string(),
    })
}

struct FencedBlock<'a> {
    content: &'a str,
    body: &'a str,
}

fn split_fenced_block(input: &str) -> Option<FencedBlock<'_>> {
    let first_line_end = input.find('\n')?;
    if input[..first_line_end].trim_end_matches('\r') != FENCE {
        return None;
    }

    let after_open = &input[first_line_end + 1..];
    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return Some(FencedBlock {
                content: &after_open[..offset],
                body: &after_open[offset + line.len()..],
            });
        }
        offset += line.len();
    }
    None
}

fn parse_block(content: &str) -> Result<HashMap<String, Value>> {
    let mut map = HashMap::new();
    // Key of the list currently accepting `- item` lines, if any.
    let mut open_list: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('-') {
            let Some(key) = &open_list else {
                return Err(QuiltError::MalformedFrontMatter(line.to_string()));
            };
            if let Some(Value::List(items)) = map.get_mut(key.as_str()) {
                items.push(unquote(rest.trim()));
            }
            continue;
        }

        if let Some((key, value)) = trimmed.split_once(':') {
            let key = key.trim().to_string();
            let value = value.trim();
            if value.is_empty() {
                map.insert(key.clone(), Value::List(Vec::new()));
                open_list = Some(key);
            } else {
                map.insert(key, Value::Scalar(unquote(value)));
                open_list = None;
            }
            continue;
        }

        return Err(QuiltError::MalformedFrontMatter(line.to_string()));
    }

    Ok(map)
}

/// Strips one pair of surrounding single or double quotes. Partial quoting is
/// left alone, so a raw todo literal like `"buy milk" +errand` survives as an
/// unquoted list item and keeps its inner quotes.
fn unquote(s: &str) -> String {
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_without_fence_is_all_body() {
        let doc = parse_document("just some text\nwith lines\n").unwrap();
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, "just some text\nwith lines\n");
    }

    #[test]
    fn test_fence_must_be_first_line() {
        let doc = parse_document("\n---\nid: x\n---\n").unwrap();
        assert!(doc.front_matter.is_empty());
    }

    #[test]
    fn test_parses_scalars_and_body() {
        let doc = parse_document("---\nid: note_1\ntitle: Hello\n---\n\nbody text\n").unwrap();
        assert_eq!(
            doc.front_matter.get("id"),
            Some(&Value::Scalar("note_1".to_string()))
        );
        assert_eq!(
            doc.front_matter.get("title"),
            Some(&Value::Scalar("Hello".to_string()))
        );
        assert_eq!(doc.body, "\nbody text\n");
    }

    #[test]
    fn test_scalar_values_are_unquoted() {
        let doc = parse_document("---\ntitle: \"Quoted Title\"\n---\n").unwrap();
        assert_eq!(
            doc.front_matter.get("title"),
            Some(&Value::Scalar("Quoted Title".to_string()))
        );
    }

    #[test]
    fn test_parses_list_items() {
        let doc = parse_document("---\ntodo:\n    - first\n    - second\n---\n").unwrap();
        let items = doc.front_matter.get("todo").unwrap().as_list().unwrap();
        assert_eq!(items, ["first", "second"]);
    }

    #[test]
    fn test_list_items_keep_partial_quotes() {
        let doc = parse_document("---\ntodo:\n    - \"call home\" +family\n---\n").unwrap();
        let items = doc.front_matter.get("todo").unwrap().as_list().unwrap();
        assert_eq!(items, ["\"call home\" +family"]);
    }

    #[test]
    fn test_fully_quoted_list_items_are_unquoted() {
        let doc = parse_document("---\ntodo:\n    - '\"call home\" +family'\n---\n").unwrap();
        let items = doc.front_matter.get("todo").unwrap().as_list().unwrap();
        assert_eq!(items, ["\"call home\" +family"]);
    }

    #[test]
    fn test_empty_list_and_comments() {
        let doc = parse_document("---\ntodo:\n    # - an example\n---\n").unwrap();
        assert_eq!(
            doc.front_matter.get("todo"),
            Some(&Value::List(Vec::new()))
        );
    }

    #[test]
    fn test_unclosed_fence_is_all_body() {
        let input = "---\nid: x\nno closing fence\n";
        let doc = parse_document(input).unwrap();
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, input);
    }

    #[test]
    fn test_list_item_without_open_list_fails() {
        let err = parse_document("---\n- stray item\n---\n").unwrap_err();
        match err {
            QuiltError::MalformedFrontMatter(raw) => assert!(raw.contains("stray item")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_line_without_colon_fails() {
        let err = parse_document("---\nnot a mapping line\n---\n").unwrap_err();
        assert!(matches!(err, QuiltError::MalformedFrontMatter(_)));
    }

    #[test]
    fn test_scalar_closes_open_list() {
        let doc = parse_document("---\ntodo:\n    - one\nid: x\n---\n").unwrap();
        let items = doc.front_matter.get("todo").unwrap().as_list().unwrap();
        assert_eq!(items, ["one"]);
        assert_eq!(doc.front_matter.get("id"), Some(&Value::Scalar("x".into())));
    }
}
