use std::path::Path;

use agent_core::{Agent, App, StagingPolicy};
use log::info;

use crate::config::AppConfig;
use crate::error::JsonAppError;
use crate::metadata_file::MetadataIndex;
use crate::resolve::InputResolver;
use crate::results::write_results;

/// App configurado por archivos JSON.
///
/// Envuelve un App de workflows: lee `config.json` e `input_metadata.json`,
/// resuelve las entradas por rol, delega en `App::launch` y escribe
/// `results.json`.
#[derive(Debug)]
pub struct JsonApp {
    app: App,
}

impl Default for JsonApp {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonApp {
    pub fn new() -> Self {
        Self { app: App::workflow_app(StagingPolicy::Discard) }
    }

    /// Usa un App ya configurado (runtime, progreso, hooks).
    pub fn with_app(app: App) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Ejecuta `A` con la configuración de `config_path` y las entradas de
    /// `input_metadata_path`, escribiendo el resultado en `results_path`.
    ///
    /// Devuelve si `results_path` existe tras escribirlo; `false` si la
    /// metadata de salida tenía una forma no soportada.
    pub fn launch<A>(&self, config_path: &Path, input_metadata_path: &Path, results_path: &Path)
                     -> Result<bool, JsonAppError>
        where A: Agent
    {
        info!("0) Unpack information from JSON");
        let config = AppConfig::read(config_path)?;
        let index = MetadataIndex::read(input_metadata_path)?;
        let inputs = InputResolver::new(&index).resolve(&config.input_ids)?;

        let output = self.app.launch::<A>(inputs.files.clone(),
                                          inputs.metadata.clone(),
                                          &config.output_files,
                                          config.arguments.clone(),
                                          Some(config.output_templates.clone()))?;

        info!("4) Pack information to JSON");
        write_results(&inputs, &output.files, &output.metadata, results_path)
    }
}
