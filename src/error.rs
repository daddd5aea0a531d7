use std::path::PathBuf;
use thiserror::Error;

/// Failures loading the static reference data a translation depends on.
///
/// All of these are configuration errors: nothing recovers from them, they
/// surface at startup before any prompt is built.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("cannot read {kind} file {}: {source}", .path.display())]
    Unreadable {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid API catalog {}: {source}", .path.display())]
    InvalidCatalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ResourceError {
    pub fn unreadable(kind: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ResourceError::Unreadable {
            kind,
            path: path.into(),
            source,
        }
    }
}
