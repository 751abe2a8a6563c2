//! App: plantilla de orquestación para ejecutar un único Agent.
//!
//! `App::launch` instancia el agente con su configuración, aplica los hooks
//! pre-run en orden, ejecuta el agente y aplica los hooks post-run en orden.
//! Los hooks son pipelines explícitos (`Vec<Box<dyn ...>>`) que se aplican
//! como un composite; sin hooks cada fase es la identidad.

mod builder;
mod core;
mod hooks;

pub use builder::AppBuilder;
pub use self::core::App;
pub use hooks::{InputParityCheck, IntermediateStaging, LaunchInfo, PostRunHook, PreRunHook, StagingPolicy};
