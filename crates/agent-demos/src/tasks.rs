//! Tareas de archivo usadas por los agentes de demostración.
//!
//! Cada tarea devuelve `true` si terminó bien. Los errores de E/S o de
//! formato se tratan como fallo de la tarea, nunca como pánico.
use std::fs;
use std::io;
use std::path::Path;

use agent_core::{Direction, ReturnKind, TaskDecl};

pub const INPUT_PLUS_ONE: TaskDecl = TaskDecl { name: "input_plus_one",
                                                params: &[("input_file", Direction::FileIn),
                                                          ("output_file", Direction::FileOut)],
                                                returns: ReturnKind::Int,
                                                is_modifier: false };

pub const SUM_TWO_FILES: TaskDecl = TaskDecl { name: "sum_two_files",
                                               params: &[("file1", Direction::FileIn),
                                                         ("file2", Direction::FileIn),
                                                         ("file3", Direction::FileOut)],
                                               returns: ReturnKind::Bool,
                                               is_modifier: false };

/// Lee un entero de la primera línea del archivo.
pub fn read_number(path: impl AsRef<Path>) -> io::Result<i64> {
    let text = fs::read_to_string(path)?;
    let line = text.lines().next().unwrap_or_default().trim();
    line.parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("not a number {line:?}: {e}")))
}

pub fn write_number(path: impl AsRef<Path>, value: i64) -> io::Result<()> {
    fs::write(path, value.to_string())
}

/// Escribe en `output` el contenido de `input` más uno.
pub fn input_plus_one(input: &str, output: &str) -> bool {
    read_number(input).and_then(|n| write_number(output, n + 1)).is_ok()
}

/// Escribe en `out` la suma de `a` y `b`.
pub fn sum_two_files(a: &str, b: &str, out: &str) -> bool {
    let sum = || -> io::Result<()> { write_number(out, read_number(a)? + read_number(b)?) };
    sum().is_ok()
}
