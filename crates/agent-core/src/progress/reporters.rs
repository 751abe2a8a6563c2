use std::sync::{Arc, Mutex};

use log::{info, warn};

use super::{ProgressReporter, ProgressUpdate};

/// Escribe cada actualización a través de `log::info!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report(&self, update: ProgressUpdate) {
        info!("{update}");
    }
}

/// Descarta las actualizaciones.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn report(&self, _update: ProgressUpdate) {}
}

/// Guarda las actualizaciones en memoria (útil en tests y para callers que
/// quieran inspeccionar el avance después del run).
#[derive(Debug, Default)]
pub struct RecordingProgress {
    updates: Mutex<Vec<ProgressUpdate>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<ProgressUpdate> {
        self.updates.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Sólo los porcentajes, en orden de emisión.
    pub fn percents(&self) -> Vec<f64> {
        self.updates().iter().filter_map(|u| u.percent).collect()
    }
}

impl ProgressReporter for RecordingProgress {
    fn report(&self, update: ProgressUpdate) {
        self.updates.lock().unwrap_or_else(|e| e.into_inner()).push(update);
    }
}

/// Resuelve un reporter por nombre (`log` | `silent`).
pub fn progress_by_name(name: &str) -> Arc<dyn ProgressReporter> {
    match name {
        "silent" => Arc::new(SilentProgress),
        "" | "log" => Arc::new(LogProgress),
        other => {
            warn!("unknown progress reporter '{other}'; using log");
            Arc::new(LogProgress)
        }
    }
}
