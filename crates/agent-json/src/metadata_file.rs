//! Lectura de `input_metadata.json`: lista ordenada de artifacts con `_id`.
use std::path::Path;

use agent_core::Metadata;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::JsonAppError;

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(rename = "_id")]
    id: String,
    #[serde(flatten)]
    metadata: Metadata,
}

/// Índice id -> Metadata en el orden del archivo. No se modifica después de
/// leerlo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataIndex {
    entries: IndexMap<String, Metadata>,
}

impl MetadataIndex {
    pub fn read(path: &Path) -> Result<Self, JsonAppError> {
        let text = std::fs::read_to_string(path).map_err(|e| JsonAppError::io(path, e))?;
        let entries: Vec<Entry> = serde_json::from_str(&text).map_err(|e| JsonAppError::parse(path, e))?;
        Ok(entries.into_iter().map(|e| (e.id, e.metadata)).collect())
    }

    pub fn get(&self, id: &str) -> Option<&Metadata> {
        self.entries.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Metadata)> for MetadataIndex {
    fn from_iter<I: IntoIterator<Item = (String, Metadata)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_entries_in_file_order() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f,
               r#"[
  {{"_id": "b", "data_type": "Number", "file_type": "TXT", "file_path": "/b", "meta_data": null, "sources": []}},
  {{"_id": "a", "type": "dir", "data_type": "Number", "file_type": "TXT", "file_path": "/a",
    "meta_data": {{"k": 1}}, "compressed": true, "sources": ["/src"]}}
]"#).unwrap();

        let index = MetadataIndex::read(f.path()).unwrap();
        assert_eq!(index.ids().collect::<Vec<_>>(), vec!["b", "a"]);
        let a = index.get("a").unwrap();
        assert_eq!(a.kind, "dir");
        assert_eq!(a.compressed, Some(true));
        assert_eq!(index.get("b").unwrap().kind, "file");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{{not json").unwrap();
        assert!(matches!(MetadataIndex::read(f.path()), Err(JsonAppError::Parse { .. })));
    }
}
