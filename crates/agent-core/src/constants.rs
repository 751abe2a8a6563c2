//! Constantes compartidas por los crates del workspace.
//!
//! Los valores que aparecen en archivos JSON (`type` por defecto,
//! `provenance_data`) forman parte del contrato con el VRE; no cambiarlos sin
//! revisar los consumidores de `results.json`.

/// Valor de `type` cuando un artifact no declara uno.
pub const DEFAULT_ARTIFACT_TYPE: &str = "file";

/// `data_type` de los artifacts de proveniencia de ejecución: para ellos
/// `sources` se fuerza a una lista vacía al serializar.
pub const PROVENANCE_DATA_TYPE: &str = "provenance_data";

/// Prefijo de rol usado al exponer intermedios de un workflow.
pub const INTERMEDIATE_ROLE_PREFIX: &str = "intermediate:";
