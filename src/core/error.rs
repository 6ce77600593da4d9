use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors reported by every command.
///
/// The binaries print the `Display` form of this type as a single
/// `Error: ...` line on stderr and exit with code 1.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input path does not exist
    #[error("{what} not found: {}", .path.display())]
    NotFound { what: &'static str, path: PathBuf },

    /// Malformed content in an input file
    #[error("Could not parse {context}: {message}")]
    Parse { context: String, message: String },

    /// Structurally valid input that lacks a required element
    #[error("Missing key in JSON: '{0}'")]
    MissingField(String),

    /// A read or write failed part-way through
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Anything else, with the underlying cause kept as context
    #[error("An unexpected error occurred: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl PipelineError {
    pub fn not_found(what: &'static str, path: &Path) -> Self {
        Self::NotFound {
            what,
            path: path.to_path_buf(),
        }
    }

    pub fn parse(context: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Build a closure that wraps an `io::Error` with a description of the
    /// operation, for use with `map_err`.
    pub fn io(context: impl Into<String>) -> impl FnOnce(std::io::Error) -> Self {
        let context = context.into();
        move |source| Self::Io { context, source }
    }

    /// Map an error from opening or reading `path`: a missing file becomes
    /// `NotFound` and content that is not valid UTF-8 becomes `Parse`.
    pub fn from_open(what: &'static str, path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(what, path),
            std::io::ErrorKind::InvalidData => Self::parse(path.display().to_string(), err),
            _ => Self::Io {
                context: format!("reading {}", path.display()),
                source: err,
            },
        }
    }
}
