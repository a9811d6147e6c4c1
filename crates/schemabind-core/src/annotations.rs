//! Documentation extraction from schema annotations.
//!
//! Schema components carry `annotation` blocks holding any number of
//! `documentation` entries. Generated classes and members embed that text as
//! block comments, so it has to be flattened onto one line and made safe for a
//! `/* ... */` context first.

use serde::{Deserialize, Serialize};

/// One `documentation` entry of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Documentation {
    /// Textual content; absent when the entry only carries markup.
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub source: Option<String>,
}

impl Documentation {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            source: None,
        }
    }
}

/// One `annotation` block attached to a schema component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub documentation: Vec<Documentation>,
}

impl Annotation {
    pub fn new(documentation: Vec<Documentation>) -> Self {
        Self { documentation }
    }
}

/// A model node that can carry annotations.
pub trait Annotated {
    fn annotations(&self) -> &[Annotation];
}

/// Concatenate the documentation text of every annotation on `node`.
///
/// Returns `None` when the node has no annotation at all, and an empty string
/// when annotations exist but carry no text. The result is [`normalize`]d.
pub fn extract_comments<A: Annotated + ?Sized>(node: &A) -> Option<String> {
    let annotations = node.annotations();
    if annotations.is_empty() {
        return None;
    }

    let mut comment = String::new();
    for doc in annotations.iter().flat_map(|a| a.documentation.iter()) {
        if let Some(content) = &doc.content {
            comment.push_str(content);
        }
    }

    normalize(Some(&comment))
}

/// Flatten `text` for embedding in a generated block comment.
///
/// Runs of whitespace (newlines and tabs included) collapse to one space,
/// leading and trailing whitespace is dropped, and every `*/` becomes `*\/`.
pub fn normalize(text: Option<&str>) -> Option<String> {
    let text = text?;

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    Some(collapsed.replace("*/", "*\\/"))
}
