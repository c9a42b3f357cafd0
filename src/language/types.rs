//! Types representing the syntax tree handed to the formatter
//!
//! The tree is produced by an external parser and arrives as a JSON
//! document. It is read-only input; the formatter never mutates it.

use serde::Deserialize;

use crate::language::NodeKind;

/// One node of the syntax tree. Terminal (token) nodes carry `value` and no
/// children; non-terminal nodes carry `children` and no value. Comments are
/// attached to the node they were nearest to in the original source,
/// independent of the children relationship.
#[derive(Eq, Debug, Clone, PartialEq, Deserialize)]
pub struct SyntaxNode {
    pub name: String,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub children: Vec<SyntaxNode>,

    #[serde(default, rename = "leadingComments")]
    pub leading_comments: Vec<CommentInfo>,

    #[serde(default, rename = "trailingComments")]
    pub trailing_comments: Vec<CommentInfo>,
}

/// A comment as recorded by the parser. The `original_token_index` is the
/// index of the lexical token the comment was attached to and is the sole
/// identity used for deduplication: the same comment may be reachable as the
/// trailing comment of one token and the leading comment of the next.
#[derive(Eq, Debug, Clone, PartialEq, Deserialize)]
pub struct CommentInfo {
    pub text: String,

    pub kind: CommentKind,

    #[serde(rename = "originalTokenIndex")]
    pub original_token_index: usize,
}

#[derive(Eq, Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    Line,
    Block,
}

impl SyntaxNode {
    /// A terminal token node, as opposed to an interior construct node.
    pub fn is_token(&self) -> bool {
        self.value
            .is_some()
    }

    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::from_name(&self.name)
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind() == Some(kind)
    }

    /// The lexeme of a token node, or "" for interior nodes.
    pub fn token_text(&self) -> &str {
        self.value
            .as_deref()
            .unwrap_or("")
    }

    /// A keyword token with the given lexeme?
    pub fn is_keyword(&self, word: &str) -> bool {
        self.is(NodeKind::Keyword) && self.token_text() == word
    }

    pub fn find_child(&self, kind: NodeKind) -> Option<&SyntaxNode> {
        self.children
            .iter()
            .find(|child| child.is(kind))
    }

    pub fn children_of(&self, kind: NodeKind) -> impl Iterator<Item = &SyntaxNode> {
        self.children
            .iter()
            .filter(move |child| child.is(kind))
    }

    /// Find the first child whose keyword lexeme is one of the given words.
    pub fn find_keyword(&self, words: &[&str]) -> Option<&SyntaxNode> {
        self.children
            .iter()
            .find(|child| {
                child.is(NodeKind::Keyword)
                    && words.contains(&child.token_text())
            })
    }

    /// The last identifier token in this subtree, in source order. Trailing
    /// comments of declarations attach here.
    pub fn last_identifier(&self) -> Option<&SyntaxNode> {
        if self.is(NodeKind::Identifier) {
            return Some(self);
        }
        self.children
            .iter()
            .rev()
            .find_map(|child| child.last_identifier())
    }
}
