use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that abort a melt run
#[derive(Debug, Error)]
pub enum MeltError {
    /// The input document could not be opened or read
    #[error("cannot read menu export {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not JSON, or lacks the menu.periods.categories[].items shape.
    /// `path` is `None` when the document came from an in-memory value.
    #[error("malformed menu {}: {reason}", describe_origin(.path.as_deref()))]
    MalformedInput {
        path: Option<PathBuf>,
        reason: String,
    },

    /// The CSV output could not be written
    #[error("cannot write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn describe_origin(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("export {}", path.display()),
        None => "document".to_string(),
    }
}

impl MeltError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        MeltError::MalformedInput {
            path: Some(path.into()),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_value(reason: impl Into<String>) -> Self {
        MeltError::MalformedInput {
            path: None,
            reason: reason.into(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        MeltError::WriteFailure {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MeltError>;
