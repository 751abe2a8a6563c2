//! Ejecución de las dos demos en memoria con un resumen serializable.
use std::path::Path;

use agent_core::{App, RunOutput, RuntimeConfig};
use agent_demos::scenarios;
use log::info;
use serde::Serialize;

use crate::errors::AppError;

/// Resumen de una demo: salidas por rol y su contenido.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub name: String,
    pub outputs: Vec<DemoOutput>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoOutput {
    pub role: String,
    pub file_path: String,
    pub value: Option<i64>,
    pub sources: Vec<String>,
}

impl DemoReport {
    fn from_output(name: &str, output: &RunOutput) -> Result<Self, AppError> {
        if output.is_empty() {
            return Err(AppError::NoResults(name.to_string()));
        }
        let metadata = output.metadata_by_role();
        let mut outputs = Vec::new();
        for (role, paths) in &output.files {
            let mds: Vec<_> = metadata.and_then(|m| m.get(role)).map(|v| v.iter().collect()).unwrap_or_default();
            for (i, path) in paths.iter().enumerate() {
                let md = mds.get(i).or(mds.first());
                outputs.push(DemoOutput { role: role.clone(),
                                          file_path: path.clone(),
                                          value: agent_demos::tasks::read_number(path).ok(),
                                          sources: md.and_then(|m| m.sources.clone()).unwrap_or_default() });
            }
        }
        Ok(Self { name: name.to_string(),
                  outputs })
    }
}

/// Lanza `increment_and_sum` y `cumulative` en subdirectorios de `workdir`.
pub fn run_all(app: &App, workdir: &Path) -> Result<Vec<DemoReport>, AppError> {
    info!("Demo 1: increment and sum");
    let first = scenarios::increment_and_sum(app, &workdir.join("increment_and_sum"))?;
    info!("Demo 2: cumulative");
    let second = scenarios::cumulative(app, &workdir.join("cumulative"))?;
    Ok(vec![DemoReport::from_output("increment_and_sum", &first)?,
            DemoReport::from_output("cumulative", &second)?])
}

/// Igual que `run_all` usando el App y el directorio de la configuración.
pub fn run_from_config(config: &RuntimeConfig) -> Result<Vec<DemoReport>, AppError> {
    run_all(&App::from_config(config), &config.workdir.join("agentflow"))
}
