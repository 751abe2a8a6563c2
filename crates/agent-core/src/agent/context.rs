use std::sync::Arc;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use crate::progress::{LogProgress, ProgressReporter, ProgressUpdate};
use crate::runtime::{LocalRuntime, TaskDecl, TaskRuntime};

/// Argumentos nombre -> valor usados para parametrizar un agente.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(IndexMap<String, Value>);

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Decodifica un argumento. `Ok(None)` si no existe.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CoreError> {
        self.0
            .get(key)
            .map(|v| {
                serde_json::from_value(v.clone()).map_err(|e| CoreError::Configuration(format!("argument {key}: {e}")))
            })
            .transpose()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Contexto de construcción entregado a `Agent::from_context`.
///
/// Cada instancia guarda su propia copia: la configuración no se comparte
/// entre instancias.
#[derive(Debug, Clone)]
pub struct AgentContext {
    pub configuration: Configuration,
    pub runtime: Arc<dyn TaskRuntime>,
    pub progress: Arc<dyn ProgressReporter>,
}

impl AgentContext {
    /// Contexto con runtime local y progreso vía log.
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration,
               runtime: Arc::new(LocalRuntime),
               progress: Arc::new(LogProgress) }
    }

    pub fn with_runtime(mut self, runtime: Arc<dyn TaskRuntime>) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    /// Entrega una tarea declarada al runtime.
    pub fn run_task(&self, decl: &TaskDecl, mut body: impl FnMut() -> bool) -> bool {
        self.runtime.execute(decl, &mut body)
    }

    /// Reporta un porcentaje de avance.
    pub fn progress(&self, percent: f64) {
        self.progress.report(ProgressUpdate::percent(percent));
    }
}

impl Default for AgentContext {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}
