//! Errores específicos del core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreError {
    #[error("missing role: {0}")] MissingRole(String),
    #[error("precondition failed: {0}")] Precondition(String),
    #[error("role {role}: expected {expected}, found {found}")]
    ShapeMismatch { role: String, expected: String, found: String },
    #[error("invalid configuration: {0}")] Configuration(String),
    #[error("hook {hook} failed: {reason}")] Hook { hook: String, reason: String },
    #[error("internal: {0}")] Internal(String),
}

impl CoreError {
    /// Atajo para precondiciones estructurales (conteo de roles, paridad).
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }
}
