/// Dirección de un parámetro de tarea.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Archivo leído por la tarea.
    FileIn,
    /// Archivo escrito por la tarea.
    FileOut,
}

/// Tipo de retorno declarado de una tarea.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    Bool,
    Int,
}

/// Declaración estática de una tarea: nombre, parámetros con dirección y
/// retorno. Pensada para declararse como `const` junto al agente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDecl {
    pub name: &'static str,
    pub params: &'static [(&'static str, Direction)],
    pub returns: ReturnKind,
    pub is_modifier: bool,
}

impl TaskDecl {
    /// Parámetros de archivo de entrada.
    pub fn inputs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().filter(|(_, d)| *d == Direction::FileIn).map(|(n, _)| *n)
    }

    /// Parámetros de archivo de salida.
    pub fn outputs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().filter(|(_, d)| *d == Direction::FileOut).map(|(n, _)| *n)
    }
}
