use std::path::PathBuf;

use thiserror::Error;
use wf_core::WfError;

use crate::diagnostics::Diagnostic;

/// Errors raised while loading a world from its entities and actions files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The entities file has lexical, syntactic or structural errors.
    #[error("{} error(s) in entities file", .diagnostics.iter().filter(|d| d.is_error()).count())]
    Entities {
        /// Every diagnostic produced, warnings included.
        diagnostics: Vec<Diagnostic>,
        /// The entities file text, for rendering the diagnostics.
        source_text: String,
    },

    /// The actions file is not well-formed XML.
    #[error("invalid actions file: {0}")]
    Actions(#[from] quick_xml::Error),

    /// The assembled world violates a world invariant.
    #[error("invalid world: {0}")]
    World(#[from] WfError),
}

/// Convenience alias for loader results.
pub type LoadResult<T> = Result<T, LoadError>;
