//! Agentes de demostración sobre archivos que contienen un entero.
use agent_core::errors::CoreError;
use agent_core::model::{FileMap, MetadataMap, RoleMapExt, RoleValue};
use agent_core::workflow::reduce_pairwise;
use agent_core::{Agent, AgentContext, RunOutput};
use log::{error, info};

use crate::tasks::{input_plus_one, sum_two_files, INPUT_PLUS_ONE, SUM_TWO_FILES};

/// Lee un entero de `input`, le suma uno y lo escribe en `output`.
#[derive(Debug, Clone)]
pub struct IncrementAgent {
    ctx: AgentContext,
}

impl Agent for IncrementAgent {
    fn from_context(ctx: &AgentContext) -> Result<Self, CoreError> {
        Ok(Self { ctx: ctx.clone() })
    }

    fn name(&self) -> &str {
        "increment"
    }

    fn run(&self, input_files: &FileMap, input_metadata: &MetadataMap, output_files: &FileMap)
           -> Result<RunOutput, CoreError> {
        let input = input_files.single("input")?;
        let output = output_files.single("output")?;
        // entrada y salida comparten casi toda la metadata
        let output_metadata = input_metadata.single("input")?.child(output.clone());

        info!("IncrementAgent: running task {}", INPUT_PLUS_ONE.name);
        if !self.ctx.run_task(&INPUT_PLUS_ONE, || input_plus_one(input, output)) {
            error!("IncrementAgent: run failed");
            return Ok(RunOutput::empty());
        }
        info!("IncrementAgent: run successful");

        let mut files = FileMap::new();
        files.insert("output".into(), RoleValue::single(output.clone()));
        let mut metadata = MetadataMap::new();
        metadata.insert("output".into(), RoleValue::single(output_metadata));
        Ok(RunOutput::new(files, metadata))
    }
}

/// Suma los enteros de `input1` e `input2` y escribe el resultado en
/// `output`. La metadata de salida deriva de `input1`.
#[derive(Debug, Clone)]
pub struct SumPairAgent {
    ctx: AgentContext,
}

impl Agent for SumPairAgent {
    fn from_context(ctx: &AgentContext) -> Result<Self, CoreError> {
        Ok(Self { ctx: ctx.clone() })
    }

    fn name(&self) -> &str {
        "sum_pair"
    }

    fn run(&self, input_files: &FileMap, input_metadata: &MetadataMap, output_files: &FileMap)
           -> Result<RunOutput, CoreError> {
        let a = input_files.single("input1")?;
        let b = input_files.single("input2")?;
        let output = output_files.single("output")?;
        let output_metadata = input_metadata.single("input1")?.child(output.clone());

        info!("SumPairAgent: running task {}", SUM_TWO_FILES.name);
        if !self.ctx.run_task(&SUM_TWO_FILES, || sum_two_files(a, b, output)) {
            error!("SumPairAgent: run failed");
            return Ok(RunOutput::empty());
        }
        info!("SumPairAgent: run successful");

        let mut metadata = MetadataMap::new();
        metadata.insert("output".into(), RoleValue::single(output_metadata));
        Ok(RunOutput::new(output_files.clone(), metadata))
    }
}

/// Suma acumulativa de una secuencia `input`: `O0 = I0 + I1`,
/// `O1 = O0 + I2`, ... La ruta `output` es un patrón con `{}` para el índice
/// del paso. Los pasos fallidos se omiten.
#[derive(Debug, Clone)]
pub struct CumulativeSumAgent {
    ctx: AgentContext,
}

impl Agent for CumulativeSumAgent {
    fn from_context(ctx: &AgentContext) -> Result<Self, CoreError> {
        Ok(Self { ctx: ctx.clone() })
    }

    fn name(&self) -> &str {
        "cumulative_sum"
    }

    fn run(&self, input_files: &FileMap, input_metadata: &MetadataMap, output_files: &FileMap)
           -> Result<RunOutput, CoreError> {
        let inputs = input_files.many("input")?;
        let metadata = input_metadata.many("input")?;
        if inputs.len() != metadata.len() {
            return Err(CoreError::precondition(format!("input has {} files but {} metadata entries",
                                                       inputs.len(),
                                                       metadata.len())));
        }
        let pattern = output_files.single("output")?;

        info!("CumulativeSumAgent: preparing outputs for pattern {pattern}");
        let reduction = reduce_pairwise(inputs, metadata, pattern, |_, acc, next, out| {
                            self.ctx.run_task(&SUM_TWO_FILES, || sum_two_files(acc, next, out))
                        })?;

        let mut files = FileMap::new();
        files.insert("output".into(), RoleValue::many(reduction.files));
        let mut md = MetadataMap::new();
        md.insert("output".into(), RoleValue::many(reduction.metadata));
        Ok(RunOutput::new(files, md))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::Metadata;
    use std::fs;

    fn single(role: &str, value: String) -> FileMap {
        let mut m = FileMap::new();
        m.insert(role.into(), RoleValue::single(value));
        m
    }

    #[test]
    fn increment_writes_next_number_and_derives_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("n").to_string_lossy().into_owned();
        let output = dir.path().join("n.out").to_string_lossy().into_owned();
        fs::write(&input, "41\n").unwrap();

        let mut md = MetadataMap::new();
        md.insert("input".into(), RoleValue::single(Metadata::new("Number", "plainText").with_path(input.clone())));
        let agent = IncrementAgent::from_context(&AgentContext::default()).unwrap();
        let out = agent.run(&single("input", input.clone()), &md, &single("output", output.clone())).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "42");
        let meta = out.metadata_by_role().unwrap()["output"].as_single().unwrap();
        assert_eq!(meta.sources, Some(vec![input]));
        assert_eq!(meta.file_path.as_deref(), Some(output.as_str()));
    }

    #[test]
    fn increment_failure_is_an_empty_output() {
        let mut md = MetadataMap::new();
        md.insert("input".into(), RoleValue::single(Metadata::new("Number", "plainText")));
        let agent = IncrementAgent::from_context(&AgentContext::default()).unwrap();
        let out = agent.run(&single("input", "/no/such/file".into()), &md, &single("output", "/no/such/out".into()))
                       .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn cumulative_sum_rejects_length_mismatch() {
        let mut files = FileMap::new();
        files.insert("input".into(), RoleValue::many(vec!["a".to_string(), "b".to_string()]));
        let mut md = MetadataMap::new();
        md.insert("input".into(), RoleValue::many(vec![Metadata::default()]));
        let agent = CumulativeSumAgent::from_context(&AgentContext::default()).unwrap();
        let err = agent.run(&files, &md, &single("output", "o{}".into())).unwrap_err();
        assert!(matches!(err, CoreError::Precondition(_)));
    }
}
