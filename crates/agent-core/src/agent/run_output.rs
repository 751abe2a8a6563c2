use crate::model::{FileMap, Metadata, MetadataMap, OutputMetadata};

/// Salida intermedia producida entre etapas de un workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct Intermediate {
    pub role: String,
    pub file_path: String,
    pub metadata: Metadata,
}

/// Resultado de `Agent::run`.
///
/// `files` y `metadata` tienen la misma forma por rol. Un resultado vacío
/// (ambos vacíos) es la señal de fallo.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOutput {
    pub files: FileMap,
    pub metadata: OutputMetadata,
    pub intermediates: Vec<Intermediate>,
}

impl RunOutput {
    pub fn new(files: FileMap, metadata: MetadataMap) -> Self {
        Self { files,
               metadata: OutputMetadata::ByRole(metadata),
               intermediates: Vec::new() }
    }

    pub fn with_metadata(files: FileMap, metadata: OutputMetadata) -> Self {
        Self { files,
               metadata,
               intermediates: Vec::new() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.metadata.is_empty()
    }

    pub fn with_intermediates(mut self, intermediates: Vec<Intermediate>) -> Self {
        self.intermediates = intermediates;
        self
    }

    /// Metadata por rol, si el agente la devolvió en esa forma.
    pub fn metadata_by_role(&self) -> Option<&MetadataMap> {
        self.metadata.by_role()
    }
}
