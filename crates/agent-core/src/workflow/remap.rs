use crate::errors::CoreError;
use crate::model::RoleMap;

/// Construye un nuevo mapeo por rol a partir de otro, conservando algunos
/// roles y renombrando otros. La fuente no se modifica.
///
/// ```ignore
/// // "number1" del workflow pasa a ser "input" del agente
/// let files = Remap::new().rename("input", "number1").apply(&input_files)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Remap {
    keep: Vec<String>,
    rename: Vec<(String, String)>, // (nuevo, original)
}

impl Remap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copia el rol con el mismo nombre.
    pub fn keep(mut self, role: impl Into<String>) -> Self {
        self.keep.push(role.into());
        self
    }

    /// Copia `from` bajo el nombre `to`.
    pub fn rename(mut self, to: impl Into<String>, from: impl Into<String>) -> Self {
        self.rename.push((to.into(), from.into()));
        self
    }

    pub fn apply<T: Clone>(&self, source: &RoleMap<T>) -> Result<RoleMap<T>, CoreError> {
        let mut out = RoleMap::new();
        for role in &self.keep {
            let v = source.get(role).ok_or_else(|| CoreError::MissingRole(role.clone()))?;
            out.insert(role.clone(), v.clone());
        }
        for (to, from) in &self.rename {
            let v = source.get(from).ok_or_else(|| CoreError::MissingRole(from.clone()))?;
            out.insert(to.clone(), v.clone());
        }
        Ok(out)
    }
}
