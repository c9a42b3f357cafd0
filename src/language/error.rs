use std::{fmt, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// Failure to obtain a usable syntax tree. Both cases are treated the same
/// way by callers: log and degrade to the regex fallback aligner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError<'i> {
    Missing {
        filename: &'i Path,
        details: String,
    },
    Malformed {
        filename: &'i Path,
        details: String,
    },
}

impl<'i> TreeError<'i> {
    pub fn filename(&self) -> &'i Path {
        match self {
            TreeError::Missing { filename, .. } => filename,
            TreeError::Malformed { filename, .. } => filename,
        }
    }
}

impl<'i> fmt::Display for TreeError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Missing { details, .. } => {
                write!(f, "Syntax tree unavailable: {}", details)
            }
            TreeError::Malformed { details, .. } => {
                write!(f, "Syntax tree malformed: {}", details)
            }
        }
    }
}
