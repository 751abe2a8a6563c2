//! agentflow: fachada de los crates del workspace.
//!
//! - `agent_core`: modelo, contrato `Agent`, `App` y utilidades de workflow.
//! - `agent_json`: envoltorio que lee y escribe el protocolo JSON de archivos.
//! - `agent_demos`: agentes y workflows numéricos de ejemplo.
//!
//! `demos` ejecuta los dos escenarios en memoria y devuelve un resumen.

pub mod demos;
pub mod errors;

pub use agent_core;
pub use agent_demos;
pub use agent_json;
