//! Definiciones relacionadas a Agents.
//!
//! Un Agent es una unidad de trabajo con entradas y salidas de archivo
//! declaradas por rol. Este módulo define:
//! - `Agent`: contrato de construcción y ejecución.
//! - `AgentContext` / `Configuration`: estado explícito de cada instancia.
//! - `RunOutput`: resultado de un run; vacío significa fallo.

mod context;
mod definition;
mod run_output;

pub use context::{AgentContext, Configuration};
pub use definition::{Agent, AgentKind};
pub use run_output::{Intermediate, RunOutput};
