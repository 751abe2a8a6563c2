//! Reporte de progreso hacia un colaborador de observabilidad.
//!
//! Los workflows emiten `ProgressUpdate` a medida que completan etapas. El
//! formato textual sigue el del logger del VRE:
//! - `PROGRESS: msg`
//! - `PROGRESS: msg - RUNNING`
//! - `PROGRESS: msg (2/5)`

mod reporters;
mod update;

pub use reporters::{progress_by_name, LogProgress, RecordingProgress, SilentProgress};
pub use update::{ProgressStatus, ProgressUpdate};

use std::fmt::Debug;

/// Receptor de actualizaciones de progreso.
pub trait ProgressReporter: Send + Sync + Debug {
    fn report(&self, update: ProgressUpdate);
}
