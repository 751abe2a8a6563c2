//! Utilidades para componer agentes en workflows.
//!
//! Un Workflow es un `Agent` de tipo `AgentKind::Workflow` cuyo `run` instancia
//! otros agentes y encadena sus resultados:
//! 0. valida la forma de las entradas (`InputShape`) antes de ejecutar nada;
//! 1. renombra roles entre etapas (`Remap`);
//! 2. registra intermedios y reporta avance (`StageTracker`);
//! 3. para el patrón acumulativo usa `reduce_pairwise`.

mod reduce;
mod remap;
mod shape;
mod tracker;

pub use reduce::{output_path, reduce_pairwise, PairwiseReduction};
pub use remap::Remap;
pub use shape::{check_parity, InputShape};
pub use tracker::StageTracker;
