//! Loading source text and externally generated syntax trees
//!
//! Parsing Verilog itself is not this crate's concern: an external tool
//! writes the syntax tree as a JSON document next to the source file. Here
//! we read both back in. A missing or malformed tree is not fatal; callers
//! degrade to the regex fallback aligner.

use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, NodeKind, SyntaxNode, TreeError};

/// Read a source file and return an owned String. Ownership passes back to
/// the caller so the formatted replacement can be computed against it.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Read and deserialize a syntax tree JSON document. Missing file and
/// malformed content are reported separately but handled identically by
/// callers: fall back to regex alignment.
pub fn load_tree(filename: &Path) -> Result<SyntaxNode, TreeError<'_>> {
    let content = match std::fs::read_to_string(filename) {
        Ok(content) => content,
        Err(error) => {
            debug!(?error);
            return Err(TreeError::Missing {
                filename,
                details: error
                    .kind()
                    .to_string(),
            });
        }
    };

    match serde_json::from_str::<SyntaxNode>(&content) {
        Ok(root) => {
            debug!(
                "Loaded tree with {} top-level node{}",
                root.children
                    .len(),
                if root
                    .children
                    .len()
                    == 1
                {
                    ""
                } else {
                    "s"
                }
            );
            Ok(root)
        }
        Err(error) => {
            debug!(?error);
            Err(TreeError::Malformed {
                filename,
                details: error.to_string(),
            })
        }
    }
}

/// The conventional location of the tree document for a given source file.
pub fn tree_path(filename: &Path) -> std::path::PathBuf {
    let mut name = filename
        .as_os_str()
        .to_os_string();
    name.push(".tree.json");
    std::path::PathBuf::from(name)
}

/// A quick sanity check that a loaded tree looks like a source file root.
/// Anything else is still formatted, just without root-level special cases.
pub fn is_source_root(root: &SyntaxNode) -> bool {
    root.is(NodeKind::SourceFile)
}
