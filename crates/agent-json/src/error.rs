//! Errores del front-end JSON.

use std::path::PathBuf;

use agent_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonAppError {
    #[error("io error on {path}: {source}")]
    Io { path: PathBuf, #[source] source: std::io::Error },
    #[error("invalid json in {path}: {source}")]
    Parse { path: PathBuf, #[source] source: serde_json::Error },
    #[error("unknown input id: {0}")] UnknownInputId(String),
    #[error("input {0} has no file_path")] MissingInputPath(String),
    #[error("role {0} declared more than once without allow_multiple")] DuplicateRole(String),
    #[error("no output metadata for role {0}")] MissingRoleMetadata(String),
    #[error("wrong number of metadata entries for role {role}: either 1 or {paths}, not {entries}")]
    MetadataCountMismatch { role: String, paths: usize, entries: usize },
    #[error("role {role} has a single output path but a sequence of metadata")]
    PluralityMismatch { role: String },
    #[error(transparent)] Core(#[from] CoreError),
}

impl JsonAppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(),
                   source }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse { path: path.into(),
                      source }
    }
}
