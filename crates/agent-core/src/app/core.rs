use std::sync::Arc;

use log::{error, info};
use uuid::Uuid;

use super::{AppBuilder, InputParityCheck, IntermediateStaging, LaunchInfo, PostRunHook, PreRunHook, StagingPolicy};
use crate::agent::{Agent, AgentContext, Configuration, RunOutput};
use crate::config::RuntimeConfig;
use crate::errors::CoreError;
use crate::model::{FileMap, MetadataMap, OutputMetadata};
use crate::progress::{progress_by_name, ProgressReporter};
use crate::runtime::{runtime_by_name, TaskRuntime};

/// Entorno de ejecución de agentes.
///
/// Abstrae los detalles del entorno concreto: qué runtime ejecuta las tareas,
/// adónde va el progreso y qué operaciones se acumulan antes y después de cada
/// run. Un App es compatible con cualquier `Agent`; para combinar agentes se
/// usan workflows.
#[derive(Debug)]
pub struct App {
    pub(crate) runtime: Arc<dyn TaskRuntime>,
    pub(crate) progress: Arc<dyn ProgressReporter>,
    pub(crate) pre_hooks: Vec<Box<dyn PreRunHook>>,
    pub(crate) post_hooks: Vec<Box<dyn PostRunHook>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// App sin hooks, runtime local y progreso vía log.
    pub fn new() -> Self {
        AppBuilder::new().build()
    }

    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    /// App para workflows: valida la paridad de entradas y aplica la política
    /// de staging a los intermedios.
    pub fn workflow_app(policy: StagingPolicy) -> Self {
        Self::workflow_builder(policy).build()
    }

    pub(crate) fn workflow_builder(policy: StagingPolicy) -> AppBuilder {
        AppBuilder::new().pre_hook(InputParityCheck)
                         .post_hook(IntermediateStaging::new(policy))
    }

    /// App de workflows descrito por la configuración de entorno.
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self::workflow_builder(config.staging)
            .runtime(runtime_by_name(&config.runtime))
            .progress(progress_by_name(&config.progress))
            .build()
    }

    pub fn runtime(&self) -> &Arc<dyn TaskRuntime> {
        &self.runtime
    }

    pub fn progress(&self) -> &Arc<dyn ProgressReporter> {
        &self.progress
    }

    /// Contexto de construcción para una instancia con esta configuración.
    pub fn context(&self, configuration: Configuration) -> AgentContext {
        AgentContext::new(configuration).with_runtime(self.runtime.clone())
                                        .with_progress(self.progress.clone())
    }

    /// Ejecuta un Agent con las entradas y configuración dadas.
    ///
    /// Fases: instanciar el agente, hooks pre-run, `run_seeded` con la
    /// metadata de salida sembrada y hooks post-run. No hay recuperación: un
    /// `Err` de cualquier fase se propaga.
    pub fn launch<A>(&self,
                     input_files: FileMap,
                     input_metadata: MetadataMap,
                     output_files: &FileMap,
                     configuration: Configuration,
                     output_metadata: Option<OutputMetadata>)
                     -> Result<RunOutput, CoreError>
        where A: Agent
    {
        let execution_id = Uuid::new_v4();

        info!("[{execution_id}] 1) Instantiate and Configure Agent");
        let agent = A::from_context(&self.context(configuration))?;

        info!("[{execution_id}] 2) Run Agent {}", agent.name());
        let (input_files, input_metadata) = self.pre_run(input_files, input_metadata)?;
        let output = agent.run_seeded(&input_files, &input_metadata, output_files, output_metadata.as_ref())?;

        info!("[{execution_id}] 3) Create information");
        let launch = LaunchInfo { execution_id,
                                  agent: agent.name(),
                                  kind: agent.kind() };
        self.post_run(&launch, output)
    }

    fn pre_run(&self, mut files: FileMap, mut metadata: MetadataMap) -> Result<(FileMap, MetadataMap), CoreError> {
        for hook in &self.pre_hooks {
            (files, metadata) = hook.apply(files, metadata).inspect_err(|e| {
                                                                error!("pre-run hook {} failed: {e}", hook.name())
                                                            })?;
        }
        Ok((files, metadata))
    }

    fn post_run(&self, launch: &LaunchInfo<'_>, mut output: RunOutput) -> Result<RunOutput, CoreError> {
        for hook in &self.post_hooks {
            output = hook.apply(launch, output).inspect_err(|e| {
                                                   error!("[{}] post-run hook {} failed: {e}",
                                                          launch.execution_id,
                                                          hook.name())
                                               })?;
        }
        Ok(output)
    }
}
