use super::{AgentContext, RunOutput};
use crate::errors::CoreError;
use crate::model::{FileMap, MetadataMap, OutputMetadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    /// Ejecuta sus propias tareas.
    Tool,
    /// Compone otros agentes.
    Workflow,
}

/// Trait que define un Agent (o un Workflow, que cumple el mismo contrato).
///
/// Convención de fallo: un run que no pudo producir sus salidas devuelve
/// `Ok(RunOutput::empty())`. `Err` queda para violaciones estructurales que
/// deben abortar al llamador.
pub trait Agent {
    /// Construye la instancia con su configuración y colaboradores.
    fn from_context(ctx: &AgentContext) -> Result<Self, CoreError>
        where Self: Sized;

    /// Nombre estable para logs.
    fn name(&self) -> &str;

    /// Tipo general del agente.
    fn kind(&self) -> AgentKind {
        AgentKind::Tool
    }

    /// Lee `input_files`, escribe en `output_files` y devuelve las salidas con
    /// su metadata derivada.
    fn run(&self, input_files: &FileMap, input_metadata: &MetadataMap, output_files: &FileMap)
           -> Result<RunOutput, CoreError>;

    /// Variante con metadata de salida sembrada por el llamador. Los agentes
    /// que necesitan fusionar con metadata preexistente la sobreescriben; por
    /// defecto la semilla se ignora y la metadata se sintetiza en `run`.
    fn run_seeded(&self,
                  input_files: &FileMap,
                  input_metadata: &MetadataMap,
                  output_files: &FileMap,
                  seed: Option<&OutputMetadata>)
                  -> Result<RunOutput, CoreError> {
        let _ = seed;
        self.run(input_files, input_metadata, output_files)
    }
}
