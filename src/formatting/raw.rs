//! Raw text reconstruction
//!
//! Recovers the minimally-spaced original text of any subtree, with no
//! indentation and no newlines. This is the rendering for expressions,
//! identifiers and selects (which are never column-aligned, only spaced)
//! and the fallback for any node kind the formatter does not recognize.

use crate::language::{CommentInfo, NodeKind, SyntaxNode};

/// Reconstruct the token-level text of a subtree.
pub fn reconstruct(node: &SyntaxNode) -> String {
    reconstruct_in_context(node, false)
}

fn reconstruct_in_context(node: &SyntaxNode, in_range: bool) -> String {
    if node.is_token() {
        return token_piece(node, in_range);
    }

    // colons inside a range or select are part of the bound syntax and get
    // no leading space
    let in_range = in_range
        || matches!(
            node.kind(),
            Some(NodeKind::PackedRange) | Some(NodeKind::Select)
        );

    let mut output = String::new();
    let mut previous = String::new();
    for child in &node.children {
        let piece = reconstruct_in_context(child, in_range);
        if piece.is_empty() {
            continue;
        }
        if needs_space(&previous, &piece) {
            output.push(' ');
        }
        output.push_str(&piece);
        previous = piece;
    }
    output
}

/// A token's lexeme, decorated with the deterministic whitespace its kind
/// calls for.
fn token_piece(token: &SyntaxNode, in_range: bool) -> String {
    let value = token.token_text();
    match token.kind() {
        Some(NodeKind::Eof) => String::new(),
        Some(NodeKind::BinaryOp)
        | Some(NodeKind::AssignEq)
        | Some(NodeKind::AssignLe)
        | Some(NodeKind::Question) => {
            format!(" {} ", value)
        }
        Some(NodeKind::Colon) => {
            if in_range {
                value.to_string()
            } else {
                format!(" {}", value)
            }
        }
        _ => value.to_string(),
    }
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// The single adjacency rule: one space goes between two consecutive pieces
/// only when every condition holds. Shared by expressions, hierarchical
/// identifiers and default reconstruction.
fn needs_space(previous: &str, next: &str) -> bool {
    // (a) something word-like must already be there
    if previous.is_empty()
        || previous
            .chars()
            .all(char::is_whitespace)
    {
        return false;
    }

    // (b) the next piece must begin (ignoring whitespace) with a word
    match next
        .chars()
        .find(|c| !c.is_whitespace())
    {
        Some(c) if is_word(c) => {}
        _ => return false,
    }

    // (c) the previous piece must end with a word
    let last = match previous
        .chars()
        .last()
    {
        Some(c) => c,
        None => return false,
    };
    if !is_word(last) {
        return false;
    }

    // (d) openers and tight punctuation refuse a space before themselves
    if let Some(first) = next.chars().next() {
        if matches!(first, '(' | '[' | '{' | '.' | ',' | ';' | ':' | '`' | '~' | '!') {
            return false;
        }
    }

    // (e) nothing after an opener or a member/list separator
    if matches!(last, '(' | '[' | '{' | '.' | ',') {
        return false;
    }

    true
}

/// All comments attached to tokens strictly inside this subtree, split into
/// those that should precede the reconstructed text and those that should
/// follow it. Raw rendering flattens structure but must not drop comments.
pub fn collect_comments(node: &SyntaxNode) -> (Vec<&CommentInfo>, Vec<&CommentInfo>) {
    let mut leading = Vec::new();
    let mut trailing = Vec::new();
    for child in &node.children {
        gather(child, &mut leading, &mut trailing);
    }
    (leading, trailing)
}

fn gather<'t>(
    node: &'t SyntaxNode,
    leading: &mut Vec<&'t CommentInfo>,
    trailing: &mut Vec<&'t CommentInfo>,
) {
    for comment in &node.leading_comments {
        leading.push(comment);
    }
    for child in &node.children {
        gather(child, leading, trailing);
    }
    for comment in &node.trailing_comments {
        trailing.push(comment);
    }
}
