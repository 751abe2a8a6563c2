//! Descriptor de un artifact de datos.
//!
//! `Metadata` acompaña a cada archivo que entra o sale de un agente. Es
//! inmutable en la práctica: se crea al leer el archivo de metadata de entrada
//! o se deriva durante un `run` con `Metadata::get_child`.
//!
//! Invariante de serialización: `compressed` y `sources` se omiten cuando no
//! están definidos (ausencia, nunca `null`).
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::merge::merge_meta_data;
use crate::constants::DEFAULT_ARTIFACT_TYPE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meta_data: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

fn default_kind() -> String {
    DEFAULT_ARTIFACT_TYPE.to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
    where D: Deserializer<'de>
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for Metadata {
    fn default() -> Self {
        Self { kind: default_kind(),
               data_type: None,
               file_type: None,
               file_path: None,
               meta_data: Map::new(),
               compressed: None,
               sources: None }
    }
}

impl Metadata {
    /// Metadata mínima: sólo `data_type` y `file_type`.
    pub fn new(data_type: impl Into<String>, file_type: impl Into<String>) -> Self {
        Self { data_type: Some(data_type.into()),
               file_type: Some(file_type.into()),
               ..Self::default() }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn with_meta_data(mut self, meta_data: Map<String, Value>) -> Self {
        self.meta_data = meta_data;
        self
    }

    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = Some(compressed);
        self
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Deriva la metadata de un artifact nuevo a partir de uno o varios
    /// padres.
    ///
    /// - `kind`, `data_type`, `file_type` y `compressed` se heredan del primer
    ///   padre.
    /// - `meta_data` es el merge shallow de todos los padres, en orden (el
    ///   último gana).
    /// - `sources` son los `file_path` de los padres, en orden; los padres sin
    ///   ruta conocida no aportan entrada.
    /// - `file_path` pasa a ser `new_path`.
    ///
    /// Sin padres se obtiene una metadata vacía con `sources = []`.
    pub fn get_child<'a, I>(parents: I, new_path: impl Into<String>) -> Self
        where I: IntoIterator<Item = &'a Metadata>
    {
        let parents: Vec<&Metadata> = parents.into_iter().collect();
        let sources = parents.iter().filter_map(|p| p.file_path.clone()).collect();
        let meta_data = parents.iter()
                               .fold(Map::new(), |acc, p| merge_meta_data(&acc, &p.meta_data));
        let template = parents.first().copied().cloned().unwrap_or_default();

        Self { kind: template.kind,
               data_type: template.data_type,
               file_type: template.file_type,
               file_path: Some(new_path.into()),
               meta_data,
               compressed: template.compressed,
               sources: Some(sources) }
    }

    /// Atajo para `get_child` con un único padre.
    pub fn child(&self, new_path: impl Into<String>) -> Self {
        Self::get_child([self], new_path)
    }
}
