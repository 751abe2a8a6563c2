use crate::errors::CoreError;
use crate::model::{FileMap, MetadataMap};

/// Precondiciones estructurales sobre las entradas de un workflow.
///
/// Se evalúan antes de invocar cualquier agente; una violación debe abortar
/// el run completo.
#[derive(Debug, Clone, Default)]
pub struct InputShape {
    role_count: Option<usize>,
    singles: Vec<String>,
    sequences: Vec<String>,
    parity: bool,
}

impl InputShape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número exacto de roles en archivos y en metadata.
    pub fn roles(mut self, count: usize) -> Self {
        self.role_count = Some(count);
        self
    }

    /// El rol debe existir con un único artifact.
    pub fn single(mut self, role: impl Into<String>) -> Self {
        self.singles.push(role.into());
        self
    }

    /// El rol debe existir como secuencia.
    pub fn sequence(mut self, role: impl Into<String>) -> Self {
        self.sequences.push(role.into());
        self
    }

    /// Exige misma pluralidad y longitud entre rutas y metadata por rol.
    pub fn with_parity(mut self) -> Self {
        self.parity = true;
        self
    }

    pub fn check(&self, files: &FileMap, metadata: &MetadataMap) -> Result<(), CoreError> {
        if let Some(n) = self.role_count {
            if files.len() != n || metadata.len() != n {
                return Err(CoreError::precondition(format!("expected {n} roles, got {} files and {} metadata",
                                                           files.len(),
                                                           metadata.len())));
            }
        }
        for role in &self.singles {
            let f = files.get(role).ok_or_else(|| CoreError::MissingRole(format!("{role} (files)")))?;
            let m = metadata.get(role).ok_or_else(|| CoreError::MissingRole(format!("{role} (metadata)")))?;
            if f.is_many() || m.is_many() {
                return Err(CoreError::ShapeMismatch { role: role.clone(),
                                                      expected: "single".into(),
                                                      found: format!("{} / {}", f.shape(), m.shape()) });
            }
        }
        for role in &self.sequences {
            let f = files.get(role).ok_or_else(|| CoreError::MissingRole(format!("{role} (files)")))?;
            let m = metadata.get(role).ok_or_else(|| CoreError::MissingRole(format!("{role} (metadata)")))?;
            if !f.is_many() || !m.is_many() {
                return Err(CoreError::ShapeMismatch { role: role.clone(),
                                                      expected: "sequence".into(),
                                                      found: format!("{} / {}", f.shape(), m.shape()) });
            }
        }
        if self.parity {
            check_parity(files, metadata)?;
        }
        Ok(())
    }
}

/// Para cada rol presente en ambos mapeos, la forma debe coincidir.
pub fn check_parity(files: &FileMap, metadata: &MetadataMap) -> Result<(), CoreError> {
    for (role, f) in files {
        if let Some(m) = metadata.get(role) {
            if !f.same_shape(m) {
                return Err(CoreError::ShapeMismatch { role: role.clone(),
                                                      expected: format!("metadata shaped like files ({})", f.shape()),
                                                      found: m.shape() });
            }
        }
    }
    Ok(())
}
