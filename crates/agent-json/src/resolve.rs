//! Resolución de ids de entrada a rutas y metadata por rol.
use std::collections::HashSet;

use agent_core::model::{FileMap, MetadataMap, RoleMap, RoleValue};
use agent_core::Metadata;

use crate::error::JsonAppError;
use crate::metadata_file::MetadataIndex;

/// Entradas por rol listas para `App::launch`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedInputs {
    pub files: FileMap,
    pub metadata: MetadataMap,
    /// Artifacts del índice que ningún rol reclamó, en orden de archivo.
    pub unassigned: Vec<Metadata>,
}

impl ResolvedInputs {
    /// Rutas de todos los artifacts de entrada: primero los asignados (en
    /// orden de rol) y luego los no asignados.
    pub fn source_paths(&self) -> Vec<String> {
        self.metadata
            .values()
            .flat_map(|v| v.iter())
            .chain(self.unassigned.iter())
            .filter_map(|m| m.file_path.clone())
            .collect()
    }
}

/// Asigna metadata a roles llevando la cuenta de los ids ya consumidos. Un id
/// consumido no vuelve a asignarse; el índice de origen no se modifica.
#[derive(Debug)]
pub struct InputResolver<'a> {
    index: &'a MetadataIndex,
    consumed: HashSet<String>,
}

impl<'a> InputResolver<'a> {
    pub fn new(index: &'a MetadataIndex) -> Self {
        Self { index,
               consumed: HashSet::new() }
    }

    pub fn resolve(mut self, input_ids: &RoleMap<String>) -> Result<ResolvedInputs, JsonAppError> {
        let mut files = FileMap::new();
        for (role, ids) in input_ids {
            let paths = ids.iter()
                           .map(|id| self.path_of(id))
                           .collect::<Result<Vec<_>, _>>()?;
            files.insert(role.clone(), reshape(ids, paths));
        }

        let mut metadata = MetadataMap::new();
        for (role, ids) in input_ids {
            let taken: Vec<Metadata> = ids.iter().filter_map(|id| self.consume(id)).collect();
            if taken.is_empty() {
                continue;
            }
            metadata.insert(role.clone(), reshape(ids, taken));
        }

        let unassigned = self.index
                             .ids()
                             .filter(|id| !self.consumed.contains(*id))
                             .filter_map(|id| self.index.get(id).cloned())
                             .collect();

        Ok(ResolvedInputs { files,
                            metadata,
                            unassigned })
    }

    fn lookup(&self, id: &str) -> Result<&'a Metadata, JsonAppError> {
        self.index.get(id).ok_or_else(|| JsonAppError::UnknownInputId(id.to_string()))
    }

    /// Ruta del artifact `id`; un artifact sin ruta no puede entregarse a un
    /// agente.
    fn path_of(&self, id: &str) -> Result<String, JsonAppError> {
        self.lookup(id)?
            .file_path
            .clone()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| JsonAppError::MissingInputPath(id.to_string()))
    }

    fn consume(&mut self, id: &str) -> Option<Metadata> {
        if !self.consumed.insert(id.to_string()) {
            return None;
        }
        self.index.get(id).cloned()
    }
}

/// Conserva la pluralidad declarada del rol.
fn reshape<T>(ids: &RoleValue<String>, mut values: Vec<T>) -> RoleValue<T> {
    match ids {
        RoleValue::Single(_) if values.len() == 1 => RoleValue::Single(values.remove(0)),
        _ => RoleValue::Many(values),
    }
}
