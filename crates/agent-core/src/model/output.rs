//! Metadata de salida en sus dos formas heredadas.
//!
//! Los agentes devuelven normalmente metadata por rol (`ByRole`). Cuando el
//! App siembra la metadata de salida con los descriptores de `config.json`, un
//! agente puede devolver la lista de plantillas tal cual (`Templates`). Ambas
//! formas se conservan como variantes; cualquier otra cosa es `Unsupported` y
//! el serializador de resultados la rechaza.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Metadata, MetadataMap};

/// Bloque `file` de una salida declarada en `config.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Map<String, Value>>,
    /// Claves adicionales del VRE que no interpretamos.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Entrada de la forma lista: un nombre de rol con metadata literal o con el
/// descriptor crudo de `config.json`.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataTemplate {
    Literal { name: String, metadata: Metadata },
    Descriptor { name: String, file: FileDescriptor },
}

impl MetadataTemplate {
    pub fn name(&self) -> &str {
        match self {
            Self::Literal { name, .. } | Self::Descriptor { name, .. } => name,
        }
    }

    /// Interpreta un elemento JSON de la forma lista:
    /// - `{"name", "file": {...}}` -> `Descriptor`
    /// - `{"name", "metadata": {...}}` -> `Literal`
    /// - `[name, metadata]` -> `Literal`
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Object(obj) => {
                let name = obj.get("name")?.as_str()?.to_string();
                if let Some(file) = obj.get("file") {
                    let file = serde_json::from_value(file.clone()).ok()?;
                    Some(Self::Descriptor { name, file })
                } else {
                    let metadata = serde_json::from_value(obj.get("metadata")?.clone()).ok()?;
                    Some(Self::Literal { name, metadata })
                }
            }
            Value::Array(pair) if pair.len() == 2 => {
                let name = pair[0].as_str()?.to_string();
                let metadata = serde_json::from_value(pair[1].clone()).ok()?;
                Some(Self::Literal { name, metadata })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutputMetadata {
    /// Forma "dict": metadata por rol.
    ByRole(MetadataMap),
    /// Forma "lista": plantillas con nombre de rol.
    Templates(Vec<MetadataTemplate>),
    /// Cualquier otra forma; el escritor de resultados no la acepta.
    Unsupported(Value),
}

impl Default for OutputMetadata {
    fn default() -> Self {
        Self::ByRole(MetadataMap::new())
    }
}

impl From<MetadataMap> for OutputMetadata {
    fn from(map: MetadataMap) -> Self {
        Self::ByRole(map)
    }
}

impl OutputMetadata {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::ByRole(m) => m.is_empty(),
            Self::Templates(t) => t.is_empty(),
            Self::Unsupported(_) => false,
        }
    }

    pub fn by_role(&self) -> Option<&MetadataMap> {
        match self {
            Self::ByRole(m) => Some(m),
            _ => None,
        }
    }

    /// Clasifica un valor JSON arbitrario en una de las variantes. Un objeto
    /// que no sea un mapa de metadata válido, o una lista con elementos no
    /// reconocibles, se conserva como `Unsupported`.
    pub fn from_json(value: Value) -> Self {
        match &value {
            Value::Object(_) => match serde_json::from_value::<MetadataMap>(value.clone()) {
                Ok(map) => Self::ByRole(map),
                Err(_) => Self::Unsupported(value),
            },
            Value::Array(items) => {
                let parsed: Option<Vec<MetadataTemplate>> = items.iter().map(MetadataTemplate::from_json).collect();
                match parsed {
                    Some(templates) => Self::Templates(templates),
                    None => Self::Unsupported(value),
                }
            }
            _ => Self::Unsupported(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_of_metadata_is_by_role() {
        let v = json!({"output": {"data_type": "Number", "file_type": "TXT", "file_path": "/o", "meta_data": {}}});
        let om = OutputMetadata::from_json(v);
        assert_eq!(om.by_role().map(|m| m.len()), Some(1));
    }

    #[test]
    fn list_of_descriptors_and_pairs_are_templates() {
        let v = json!([
            {"name": "output", "required": true, "file": {"file_path": "/o", "data_type": "Number"}},
            ["other", {"data_type": "Number", "file_type": "TXT", "file_path": "/p", "meta_data": {}}]
        ]);
        match OutputMetadata::from_json(v) {
            OutputMetadata::Templates(t) => {
                assert_eq!(t.len(), 2);
                assert_eq!(t[0].name(), "output");
                assert!(matches!(&t[0], MetadataTemplate::Descriptor { file, .. } if file.file_path.as_deref() == Some("/o")));
                assert!(matches!(&t[1], MetadataTemplate::Literal { name, .. } if name == "other"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn scalars_are_unsupported() {
        assert!(matches!(OutputMetadata::from_json(json!("nope")), OutputMetadata::Unsupported(_)));
        assert!(matches!(OutputMetadata::from_json(json!(42)), OutputMetadata::Unsupported(_)));
    }
}
