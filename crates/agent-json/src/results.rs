//! Escritura de `results.json`.
//!
//! Cada artifact de salida produce un registro. La metadata de salida puede
//! llegar por rol (con difusión de una única entrada sobre una secuencia) o
//! como la lista de plantillas sembrada desde `config.json`.
use std::path::Path;

use agent_core::constants::{DEFAULT_ARTIFACT_TYPE, PROVENANCE_DATA_TYPE};
use agent_core::model::{FileDescriptor, FileMap, MetadataMap, MetadataTemplate, OutputMetadata, RoleValue};
use agent_core::Metadata;
use log::error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::JsonAppError;
use crate::resolve::ResolvedInputs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file_path: String,
    pub data_type: Option<String>,
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(default)]
    pub meta_data: Map<String, Value>,
}

impl ResultRecord {
    pub fn new(role: &str, file_path: &str, metadata: &Metadata) -> Self {
        Self { name: role.to_string(),
               kind: metadata.kind.clone(),
               file_path: file_path.to_string(),
               data_type: metadata.data_type.clone(),
               file_type: metadata.file_type.clone(),
               compressed: metadata.compressed,
               sources: metadata.sources.clone(),
               meta_data: metadata.meta_data.clone() }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ResultsFile {
    pub output_files: Vec<ResultRecord>,
}

/// Construye los registros de salida. `Ok(None)` cuando la metadata de salida
/// tiene una forma no soportada.
pub fn build_records(inputs: &ResolvedInputs,
                     output_files: &FileMap,
                     output_metadata: &OutputMetadata)
                     -> Result<Option<Vec<ResultRecord>>, JsonAppError> {
    match output_metadata {
        OutputMetadata::ByRole(map) => by_role(output_files, map).map(Some),
        OutputMetadata::Templates(templates) => from_templates(inputs, output_files, templates).map(Some),
        OutputMetadata::Unsupported(_) => Ok(None),
    }
}

fn by_role(output_files: &FileMap, metadata: &MetadataMap) -> Result<Vec<ResultRecord>, JsonAppError> {
    let mut records = Vec::new();
    for (role, paths) in output_files {
        let md = metadata.get(role)
                         .ok_or_else(|| JsonAppError::MissingRoleMetadata(role.clone()))?;
        let mds: Vec<&Metadata> = match (paths, md) {
            (_, RoleValue::Single(m)) => vec![m; paths.len()],
            (RoleValue::Many(ps), RoleValue::Many(ms)) if ps.len() == ms.len() => ms.iter().collect(),
            (RoleValue::Many(ps), RoleValue::Many(ms)) => {
                return Err(JsonAppError::MetadataCountMismatch { role: role.clone(),
                                                                 paths: ps.len(),
                                                                 entries: ms.len() })
            }
            (RoleValue::Single(_), RoleValue::Many(_)) => {
                return Err(JsonAppError::PluralityMismatch { role: role.clone() })
            }
        };
        records.extend(paths.iter().zip(mds).map(|(path, m)| ResultRecord::new(role, path, m)));
    }
    Ok(records)
}

/// Los descriptores se aplican a cada ruta del rol. Las plantillas literales
/// se emparejan con las rutas por índice, o se difunden si hay sólo una.
fn from_templates(inputs: &ResolvedInputs,
                  output_files: &FileMap,
                  templates: &[MetadataTemplate])
                  -> Result<Vec<ResultRecord>, JsonAppError> {
    let mut records = Vec::new();
    for (role, paths) in output_files {
        let literals: Vec<&Metadata> = templates.iter()
                                                .filter_map(|t| match t {
                                                    MetadataTemplate::Literal { name, metadata } if name == role => {
                                                        Some(metadata)
                                                    }
                                                    _ => None,
                                                })
                                                .collect();
        if literals.len() > 1 && literals.len() != paths.len() {
            return Err(JsonAppError::MetadataCountMismatch { role: role.clone(),
                                                             paths: paths.len(),
                                                             entries: literals.len() });
        }
        let descriptors: Vec<Metadata> = templates.iter()
                                                  .filter_map(|t| match t {
                                                      MetadataTemplate::Descriptor { name, file } if name == role => {
                                                          Some(from_descriptor(inputs, file))
                                                      }
                                                      _ => None,
                                                  })
                                                  .collect();
        for (i, path) in paths.iter().enumerate() {
            records.extend(descriptors.iter().map(|md| ResultRecord::new(role, path, md)));
            if let Some(md) = literals.get(i).or(literals.first()) {
                records.push(ResultRecord::new(role, path, md));
            }
        }
    }
    Ok(records)
}

fn from_descriptor(inputs: &ResolvedInputs, file: &FileDescriptor) -> Metadata {
    let sources = if file.data_type.as_deref() == Some(PROVENANCE_DATA_TYPE) {
        Vec::new()
    } else {
        inputs.source_paths()
    };
    let mut md = Metadata::default().with_kind(file.kind.as_deref().unwrap_or(DEFAULT_ARTIFACT_TYPE))
                                    .with_meta_data(file.meta_data.clone().unwrap_or_default())
                                    .with_sources(sources);
    md.data_type = file.data_type.clone();
    md.file_type = file.file_type.clone();
    md.compressed = file.compressed;
    md
}

/// Escribe `{"output_files": [...]}` con indentación de 2 espacios y devuelve
/// si el archivo existe. Una forma de metadata no soportada devuelve
/// `Ok(false)` sin escribir nada.
pub fn write_results(inputs: &ResolvedInputs,
                     output_files: &FileMap,
                     output_metadata: &OutputMetadata,
                     path: &Path)
                     -> Result<bool, JsonAppError> {
    let Some(records) = build_records(inputs, output_files, output_metadata)? else {
        error!("unsupported output metadata format, {} not written", path.display());
        return Ok(false);
    };
    let body = serde_json::to_string_pretty(&ResultsFile { output_files: records }).map_err(|e| JsonAppError::parse(path, e))?;
    std::fs::write(path, body).map_err(|e| JsonAppError::io(path, e))?;
    Ok(path.is_file())
}

/// Lee un `results.json` previamente escrito.
pub fn read_results(path: &Path) -> Result<ResultsFile, JsonAppError> {
    let text = std::fs::read_to_string(path).map_err(|e| JsonAppError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| JsonAppError::parse(path, e))
}
