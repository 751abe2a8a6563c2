use std::sync::Arc;

use crate::agent::{Intermediate, RunOutput};
use crate::model::{Metadata, RoleValue};
use crate::progress::{ProgressReporter, ProgressUpdate};

/// Acompaña a un workflow durante su run: registra las salidas intermedias
/// (para que el App decida si se descartan o se exponen) y reporta el avance.
#[derive(Debug)]
pub struct StageTracker {
    progress: Arc<dyn ProgressReporter>,
    intermediates: Vec<Intermediate>,
}

impl StageTracker {
    pub fn new(progress: Arc<dyn ProgressReporter>) -> Self {
        Self { progress,
               intermediates: Vec::new() }
    }

    /// Porcentaje completado (0..=100).
    pub fn progress(&self, percent: f64) {
        self.progress.report(ProgressUpdate::percent(percent));
    }

    pub fn add_intermediate(&mut self, role: impl Into<String>, file_path: impl Into<String>, metadata: Metadata) {
        self.intermediates.push(Intermediate { role: role.into(),
                                               file_path: file_path.into(),
                                               metadata });
    }

    /// Registra todas las salidas de una etapa como intermedias. Sólo se
    /// registran las rutas con metadata por rol asociada.
    pub fn add_stage_outputs(&mut self, stage: &RunOutput) {
        let Some(metadata) = stage.metadata_by_role() else { return };
        for (role, paths) in &stage.files {
            let Some(metas) = metadata.get(role) else { continue };
            let metas: Vec<&Metadata> = match metas {
                RoleValue::Single(m) => vec![m; paths.len()],
                RoleValue::Many(ms) => ms.iter().collect(),
            };
            for (path, meta) in paths.iter().zip(metas) {
                self.add_intermediate(role.clone(), path.clone(), meta.clone());
            }
        }
    }

    pub fn intermediates(&self) -> &[Intermediate] {
        &self.intermediates
    }

    /// Adjunta los intermedios registrados a la salida final.
    pub fn finish(self, output: RunOutput) -> RunOutput {
        output.with_intermediates(self.intermediates)
    }
}
