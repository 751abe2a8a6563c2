use agent_core::errors::CoreError;
use thiserror::Error;

/// Errores de las demos de nivel superior.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("demo failed: {0}")] Core(#[from] CoreError),
    #[error("demo {0} produced no results")] NoResults(String),
}
