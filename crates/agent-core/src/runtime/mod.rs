//! Colaborador externo de ejecución de tareas.
//!
//! Un agente declara cada tarea (`TaskDecl`) con la dirección de sus
//! parámetros de archivo y el tipo de retorno, y entrega el cuerpo de la tarea
//! al `TaskRuntime`. El runtime decide cómo ejecutarlo (distribuido, con
//! staging de archivos, etc.). `LocalRuntime` es el sustituto transparente
//! cuando no hay framework disponible: llama al cuerpo directamente.

mod task;

pub use task::{Direction, ReturnKind, TaskDecl};

use std::fmt::Debug;
use std::sync::Arc;

use log::{debug, warn};

/// Trait para runtimes de ejecución de tareas.
pub trait TaskRuntime: Send + Sync + Debug {
    /// Nombre del runtime (para logs y configuración).
    fn name(&self) -> &str;

    /// Ejecuta el cuerpo de una tarea declarada y devuelve su estado de éxito.
    fn execute(&self, decl: &TaskDecl, body: &mut dyn FnMut() -> bool) -> bool;
}

/// Runtime local: ejecución directa y síncrona, sin staging.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalRuntime;

impl TaskRuntime for LocalRuntime {
    fn name(&self) -> &str {
        "local"
    }

    fn execute(&self, decl: &TaskDecl, body: &mut dyn FnMut() -> bool) -> bool {
        debug!("local task {} (in: {:?}, out: {:?}, returns {:?})",
               decl.name,
               decl.inputs().collect::<Vec<_>>(),
               decl.outputs().collect::<Vec<_>>(),
               decl.returns);
        body()
    }
}

/// Resuelve un runtime por nombre. Los nombres desconocidos caen al runtime
/// local con un aviso, igual que cuando el framework externo no está
/// instalado.
pub fn runtime_by_name(name: &str) -> Arc<dyn TaskRuntime> {
    match name {
        "" | "local" => Arc::new(LocalRuntime),
        other => {
            warn!("task runtime '{other}' is not available; using mock local runtime");
            Arc::new(LocalRuntime)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ECHO: TaskDecl = TaskDecl { name: "echo",
                                      params: &[("src", Direction::FileIn), ("dst", Direction::FileOut)],
                                      returns: ReturnKind::Bool,
                                      is_modifier: false };

    #[test]
    fn local_runtime_runs_body_once() {
        let mut calls = 0;
        let ok = LocalRuntime.execute(&ECHO, &mut || {
                                  calls += 1;
                                  true
                              });
        assert!(ok);
        assert_eq!(calls, 1);
    }

    #[test]
    fn unknown_runtime_falls_back_to_local() {
        assert_eq!(runtime_by_name("distributed").name(), "local");
        assert_eq!(runtime_by_name("local").name(), "local");
    }
}
