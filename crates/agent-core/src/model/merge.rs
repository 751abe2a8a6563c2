//! Fusión determinista de `meta_data`.
//!
//! Merge "shallow": las claves de `b` reemplazan a las de `a`. Los objetos
//! anidados no se combinan, se sustituyen completos.

use serde_json::{Map, Value};

/// Merge shallow: keys from `b` override keys from `a`.
pub fn merge_meta_data(a: &Map<String, Value>, b: &Map<String, Value>) -> Map<String, Value> {
    let mut out = a.clone();
    for (k, v) in b.iter() {
        out.insert(k.clone(), v.clone());
    }
    out
}
