use log::{info, warn};

use crate::errors::CoreError;
use crate::model::Metadata;

/// Resultado de una reducción por pares.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PairwiseReduction {
    /// Salidas de los pasos exitosos, en orden.
    pub files: Vec<String>,
    /// Metadata de cada salida, derivada de los dos operandos del paso.
    pub metadata: Vec<Metadata>,
    /// Índices de los pasos que fallaron (y se saltaron).
    pub failed_steps: Vec<usize>,
}

/// Ruta de salida del paso `index` a partir de un patrón con `{}`. Sin
/// marcador, se añade `.<index>` al final.
pub fn output_path(pattern: &str, index: usize) -> String {
    if pattern.contains("{}") {
        pattern.replacen("{}", &index.to_string(), 1)
    } else {
        format!("{pattern}.{index}")
    }
}

/// Aplica una tarea binaria de forma acumulativa sobre `N` entradas:
/// `O0 = A + B`, `O1 = O0 + C`, ... produciendo `N - 1` salidas.
///
/// `step(i, acc, next, out)` ejecuta el paso `i` y devuelve si tuvo éxito. Un
/// paso fallido no se acumula ni avanza el acumulador, pero la reducción
/// continúa con la siguiente entrada. La falta de paridad entre rutas y
/// metadata es estructural y aborta antes de ejecutar nada.
pub fn reduce_pairwise<F>(paths: &[String],
                          metadata: &[Metadata],
                          output_pattern: &str,
                          mut step: F)
                          -> Result<PairwiseReduction, CoreError>
    where F: FnMut(usize, &str, &str, &str) -> bool
{
    if paths.len() != metadata.len() {
        return Err(CoreError::ShapeMismatch { role: "input".into(),
                                              expected: format!("{} metadata entries", paths.len()),
                                              found: metadata.len().to_string() });
    }
    let mut out = PairwiseReduction::default();
    let (Some(first_path), Some(first_meta)) = (paths.first(), metadata.first()) else {
        return Ok(out);
    };

    let mut acc_path = first_path.clone();
    let mut acc_meta = first_meta.clone();
    for i in 0..paths.len() - 1 {
        info!("summing input {i}");
        let next_path = &paths[i + 1];
        let next_meta = &metadata[i + 1];
        let file_out = output_path(output_pattern, i);
        let meta_out = Metadata::get_child([&acc_meta, next_meta], file_out.clone());

        if step(i, &acc_path, next_path, &file_out) {
            out.files.push(file_out.clone());
            out.metadata.push(meta_out.clone());
            acc_path = file_out;
            acc_meta = meta_out;
            info!("input {i} successful");
        } else {
            warn!("input {i} failed");
            out.failed_steps.push(i);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metas(paths: &[String]) -> Vec<Metadata> {
        paths.iter().map(|p| Metadata::new("Number", "TXT").with_path(p.clone())).collect()
    }

    #[test]
    fn pattern_substitution() {
        assert_eq!(output_path("/tmp/out{}", 2), "/tmp/out2");
        assert_eq!(output_path("/tmp/out", 2), "/tmp/out.2");
    }

    #[test]
    fn failed_step_is_skipped_without_advancing() {
        let paths: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let mut seen = Vec::new();
        let red = reduce_pairwise(&paths, &metas(&paths), "o{}", |i, acc, next, out| {
                      seen.push((acc.to_string(), next.to_string(), out.to_string()));
                      i != 0
                  }).unwrap();

        assert_eq!(red.failed_steps, vec![0]);
        assert_eq!(red.files, vec!["o1".to_string()]);
        // el paso 1 sigue usando "a" como acumulador
        assert_eq!(seen[1], ("a".to_string(), "c".to_string(), "o1".to_string()));
        assert_eq!(red.metadata[0].sources, Some(vec!["a".to_string(), "c".to_string()]));
    }

    #[test]
    fn parity_violation_aborts_before_any_step() {
        let paths: Vec<String> = vec!["a".into(), "b".into()];
        let mut called = false;
        let res = reduce_pairwise(&paths, &metas(&paths[..1]), "o{}", |_, _, _, _| {
                      called = true;
                      true
                  });
        assert!(matches!(res, Err(CoreError::ShapeMismatch { .. })));
        assert!(!called);
    }

    #[test]
    fn single_input_produces_nothing() {
        let paths = vec!["a".to_string()];
        let red = reduce_pairwise(&paths, &metas(&paths), "o{}", |_, _, _, _| true).unwrap();
        assert!(red.files.is_empty());
    }
}
