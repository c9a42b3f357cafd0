//! Comment ledger
//!
//! The parser attaches the same comment to more than one tree position (as
//! the trailing comment of one token and the leading comment of the next),
//! so every emission passes through this ledger. A comment's
//! `original_token_index` is marked the first time it is written; any later
//! sighting is skipped silently. One ledger lives for exactly one format
//! call and is never shared between calls.

use std::collections::HashSet;

use crate::language::{CommentInfo, CommentKind};

pub struct CommentLedger {
    seen: HashSet<usize>,
}

impl CommentLedger {
    pub fn new() -> CommentLedger {
        CommentLedger {
            seen: HashSet::new(),
        }
    }

    /// Mark a comment as emitted. Returns false if it had already been.
    pub fn consume(&mut self, comment: &CommentInfo) -> bool {
        self.seen
            .insert(comment.original_token_index)
    }

    /// Emit comments each on their own line under the given indent prefix.
    /// Used for leading comments and for block comments that start a line.
    pub fn emit(&mut self, comments: &[CommentInfo], indent: &str) -> String {
        let mut output = String::new();
        for comment in comments {
            if self.consume(comment) {
                output.push_str(indent);
                output.push_str(&comment.text);
                output.push('\n');
            }
        }
        output
    }

    /// Emit comments inline, each preceded by a single space and with no
    /// newline. Used for trailing comments placed on the token's own line.
    pub fn emit_inline(&mut self, comments: &[CommentInfo]) -> String {
        let mut output = String::new();
        for comment in comments {
            if self.consume(comment) {
                output.push(' ');
                output.push_str(&comment.text);
            }
        }
        output
    }

    /// Emit trailing comments after already-rendered content: line comments
    /// inline on the same line, block comments on a fresh line under the
    /// indent prefix. The caller's trailing newline, if any, is preserved
    /// after the inline part.
    pub fn emit_trailing(
        &mut self,
        comments: &[CommentInfo],
        content: String,
        indent: &str,
    ) -> String {
        if comments.is_empty() {
            return content;
        }

        let ends_with_newline = content.ends_with('\n');
        let mut output = content;
        if ends_with_newline {
            output.pop();
        }

        for comment in comments {
            if !self.consume(comment) {
                continue;
            }
            match comment.kind {
                CommentKind::Line => {
                    output.push(' ');
                    output.push_str(&comment.text);
                }
                CommentKind::Block => {
                    output.push('\n');
                    output.push_str(indent);
                    output.push_str(&comment.text);
                }
            }
        }

        if ends_with_newline {
            output.push('\n');
        }
        output
    }
}
