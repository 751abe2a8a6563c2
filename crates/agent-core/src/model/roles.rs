//! Colecciones indexadas por rol.
//!
//! Un rol puede tener un único artifact o una secuencia ordenada (cuando el
//! rol admite múltiples artifacts). Las colecciones de rutas y de metadata son
//! paralelas y deben tener la misma forma por rol.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Metadata;
use crate::errors::CoreError;

/// Valor asociado a un rol: uno o varios artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleValue<T> {
    Single(T),
    Many(Vec<T>),
}

/// Mapeo ordenado rol -> valor. El orden de inserción se conserva porque los
/// resultados se emiten en orden de rol.
pub type RoleMap<T> = IndexMap<String, RoleValue<T>>;
/// Rutas de archivo por rol.
pub type FileMap = RoleMap<String>;
/// Metadata por rol, con la misma forma que el `FileMap` asociado.
pub type MetadataMap = RoleMap<Metadata>;

impl<T> RoleValue<T> {
    pub fn single(value: T) -> Self {
        Self::Single(value)
    }

    pub fn many(values: Vec<T>) -> Self {
        Self::Many(values)
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Número de artifacts (un `Single` cuenta como 1).
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_single(&self) -> Option<&T> {
        match self {
            Self::Single(v) => Some(v),
            Self::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[T]> {
        match self {
            Self::Single(_) => None,
            Self::Many(v) => Some(v),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::Single(v) => std::slice::from_ref(v).iter(),
            Self::Many(v) => v.iter(),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Single(v) => vec![v],
            Self::Many(v) => v,
        }
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> RoleValue<U> {
        match self {
            Self::Single(v) => RoleValue::Single(f(v)),
            Self::Many(v) => RoleValue::Many(v.iter().map(f).collect()),
        }
    }

    /// Misma pluralidad y, si es secuencia, misma longitud.
    pub fn same_shape<U>(&self, other: &RoleValue<U>) -> bool {
        match (self, other) {
            (Self::Single(_), RoleValue::Single(_)) => true,
            (Self::Many(a), RoleValue::Many(b)) => a.len() == b.len(),
            _ => false,
        }
    }

    /// Descripción corta de la forma, para mensajes de error.
    pub fn shape(&self) -> String {
        match self {
            Self::Single(_) => "single".to_string(),
            Self::Many(v) => format!("sequence of {}", v.len()),
        }
    }

    /// Añade un valor; un `Single` se promueve a `Many`.
    pub fn push(self, value: T) -> Self {
        let mut values = self.into_vec();
        values.push(value);
        Self::Many(values)
    }
}

/// Accesos con error tipado sobre un `RoleMap`.
pub trait RoleMapExt<T> {
    fn role(&self, name: &str) -> Result<&RoleValue<T>, CoreError>;
    fn single(&self, name: &str) -> Result<&T, CoreError>;
    fn many(&self, name: &str) -> Result<&[T], CoreError>;
}

impl<T> RoleMapExt<T> for RoleMap<T> {
    fn role(&self, name: &str) -> Result<&RoleValue<T>, CoreError> {
        self.get(name).ok_or_else(|| CoreError::MissingRole(name.to_string()))
    }

    fn single(&self, name: &str) -> Result<&T, CoreError> {
        let value = self.role(name)?;
        value.as_single().ok_or_else(|| CoreError::ShapeMismatch { role: name.to_string(),
                                                                    expected: "single".into(),
                                                                    found: value.shape() })
    }

    fn many(&self, name: &str) -> Result<&[T], CoreError> {
        let value = self.role(name)?;
        value.as_many().ok_or_else(|| CoreError::ShapeMismatch { role: name.to_string(),
                                                                  expected: "sequence".into(),
                                                                  found: value.shape() })
    }
}
