//! Lectura de `config.json`.
//!
//! ```json
//! {"input_files":  [{"name": "number", "value": "id1", "allow_multiple": true}],
//!  "output_files": [{"name": "output", "file": {"file_path": "/x/out", "data_type": "Number"}}],
//!  "arguments":    [{"name": "offset", "value": 1}]}
//! ```
use std::path::Path;

use agent_core::model::{FileMap, OutputMetadata, RoleMap, RoleValue};
use agent_core::Configuration;
use serde::Deserialize;
use serde_json::Value;

use crate::error::JsonAppError;

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    input_files: Vec<RawInput>,
    #[serde(default)]
    output_files: Vec<Value>,
    #[serde(default)]
    arguments: Vec<RawArgument>,
}

#[derive(Debug, Deserialize)]
struct RawInput {
    name: String,
    value: String,
    #[serde(default)]
    allow_multiple: bool,
}

#[derive(Debug, Deserialize)]
struct RawArgument {
    name: String,
    value: Value,
}

/// Contenido interpretado de `config.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Rol -> id(s) de entrada. La pluralidad sigue a `allow_multiple`.
    pub input_ids: RoleMap<String>,
    /// Rol -> ruta literal de salida. Los roles sin `file_path` se omiten.
    pub output_files: FileMap,
    pub arguments: Configuration,
    /// Descriptores de salida tal cual, como semilla de la metadata de salida.
    pub output_templates: OutputMetadata,
}

impl AppConfig {
    pub fn read(path: &Path) -> Result<Self, JsonAppError> {
        let text = std::fs::read_to_string(path).map_err(|e| JsonAppError::io(path, e))?;
        let raw: RawConfig = serde_json::from_str(&text).map_err(|e| JsonAppError::parse(path, e))?;
        Self::from_raw(raw)
    }

    pub fn from_value(value: Value) -> Result<Self, JsonAppError> {
        let raw: RawConfig = serde_json::from_value(value).map_err(|e| JsonAppError::parse("<inline>", e))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, JsonAppError> {
        let mut input_ids: RoleMap<String> = RoleMap::new();
        for input in raw.input_files {
            match input_ids.get_mut(&input.name) {
                None => {
                    let value = if input.allow_multiple {
                        RoleValue::many(vec![input.value])
                    } else {
                        RoleValue::single(input.value)
                    };
                    input_ids.insert(input.name, value);
                }
                Some(RoleValue::Many(ids)) => ids.push(input.value),
                Some(RoleValue::Single(_)) => return Err(JsonAppError::DuplicateRole(input.name)),
            }
        }

        let mut output_files = FileMap::new();
        for output in &raw.output_files {
            let name = output.get("name").and_then(Value::as_str);
            let path = output.get("file").and_then(|f| f.get("file_path")).and_then(Value::as_str);
            if let (Some(name), Some(path)) = (name, path) {
                output_files.insert(name.to_string(), RoleValue::single(path.to_string()));
            }
        }

        let arguments = raw.arguments.into_iter().map(|a| (a.name, a.value)).collect();
        let output_templates = OutputMetadata::from_json(Value::Array(raw.output_files));

        Ok(Self { input_ids,
                  output_files,
                  arguments,
                  output_templates })
    }
}
