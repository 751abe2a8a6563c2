//! agent-core: capa de convenciones Agent / Workflow / App.
//!
//! El crate no planifica ni distribuye nada por sí mismo: la ejecución real de
//! tareas se delega a un `TaskRuntime` externo (por defecto `LocalRuntime`,
//! una llamada directa y síncrona). Aquí sólo viven:
//! - `model`: `Metadata`, colecciones por rol y la metadata de salida.
//! - `agent`: el contrato `Agent` y su resultado `RunOutput`.
//! - `workflow`: utilidades para componer agentes (remap, checks, reductor).
//! - `app`: la plantilla de orquestación con hooks pre/post.
pub mod agent;
pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod progress;
pub mod runtime;
pub mod workflow;

pub use agent::{Agent, AgentContext, AgentKind, Configuration, Intermediate, RunOutput};
pub use app::{App, AppBuilder, InputParityCheck, IntermediateStaging, LaunchInfo, PostRunHook, PreRunHook, StagingPolicy};
pub use config::RuntimeConfig;
pub use errors::CoreError;
pub use model::{FileDescriptor, FileMap, Metadata, MetadataMap, MetadataTemplate, OutputMetadata, RoleMap, RoleValue};
pub use progress::{LogProgress, ProgressReporter, ProgressStatus, ProgressUpdate, RecordingProgress, SilentProgress};
pub use runtime::{Direction, LocalRuntime, ReturnKind, TaskDecl, TaskRuntime};
pub use workflow::{reduce_pairwise, InputShape, Remap, StageTracker};
