//! Formatting a syntax tree into aligned source text
//!
//! The pass is a pure top-down walk: `format` creates one `Formatter`
//! (carrying the configuration and a fresh comment ledger), dispatches from
//! the root and returns the finished replacement text. Nothing persists
//! between calls; two invocations never share ledger state.

mod comments;
pub mod formatter;
pub mod layout;
pub mod raw;

pub use comments::CommentLedger;
pub use formatter::Formatter;

use crate::config::Config;
use crate::language::SyntaxNode;

/// Format a tree into its aligned textual form. The result always ends
/// with exactly one newline (unless it is empty) and carries no
/// end-of-file artifacts.
pub fn format(root: &SyntaxNode, config: &Config) -> String {
    formatter::format_tree(root, config)
}
