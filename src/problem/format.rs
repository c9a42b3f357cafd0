use owo_colors::OwoColorize;
use veralign::language::{LoadingError, TreeError};

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

/// Format a TreeError as a single warning line; tree failures are not
/// fatal, the caller degrades to fallback alignment.
pub fn concise_tree_error<'i>(error: &TreeError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "warning".bright_yellow(),
        error
            .filename()
            .display(),
        error
            .to_string()
            .bold()
    )
}
