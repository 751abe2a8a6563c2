use std::fmt::Debug;

use log::info;
use uuid::Uuid;

use crate::agent::{AgentKind, RunOutput};
use crate::constants::INTERMEDIATE_ROLE_PREFIX;
use crate::errors::CoreError;
use crate::model::{FileMap, MetadataMap, MetadataTemplate, OutputMetadata, RoleValue};
use crate::workflow::check_parity;

/// Datos del launch en curso visibles para los hooks post-run.
#[derive(Debug, Clone, Copy)]
pub struct LaunchInfo<'a> {
    pub execution_id: Uuid,
    pub agent: &'a str,
    pub kind: AgentKind,
}

/// Operación ejecutada antes de `Agent::run` sobre las entradas.
pub trait PreRunHook: Debug {
    fn name(&self) -> &str;

    fn apply(&self, input_files: FileMap, input_metadata: MetadataMap)
             -> Result<(FileMap, MetadataMap), CoreError>;
}

/// Operación ejecutada después de `Agent::run` sobre las salidas.
pub trait PostRunHook: Debug {
    fn name(&self) -> &str;

    fn apply(&self, launch: &LaunchInfo<'_>, output: RunOutput) -> Result<RunOutput, CoreError>;
}

/// Verifica que, para cada rol presente en archivos y metadata de entrada,
/// coincidan pluralidad y longitud.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputParityCheck;

impl PreRunHook for InputParityCheck {
    fn name(&self) -> &str {
        "input_parity_check"
    }

    fn apply(&self, input_files: FileMap, input_metadata: MetadataMap)
             -> Result<(FileMap, MetadataMap), CoreError> {
        check_parity(&input_files, &input_metadata)?;
        Ok((input_files, input_metadata))
    }
}

/// Qué hacer con las salidas intermedias que un workflow registró.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StagingPolicy {
    /// Se eliminan de la salida.
    #[default]
    Discard,
    /// Se publican junto a las salidas bajo el rol `intermediate:<rol>`.
    Expose,
}

/// Hook post-run que aplica la `StagingPolicy` a los intermedios.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntermediateStaging {
    pub policy: StagingPolicy,
}

impl IntermediateStaging {
    pub fn new(policy: StagingPolicy) -> Self {
        Self { policy }
    }
}

impl PostRunHook for IntermediateStaging {
    fn name(&self) -> &str {
        "intermediate_staging"
    }

    fn apply(&self, launch: &LaunchInfo<'_>, mut output: RunOutput) -> Result<RunOutput, CoreError> {
        if output.intermediates.is_empty() {
            return Ok(output);
        }
        let intermediates = std::mem::take(&mut output.intermediates);
        // un run fallido se devuelve tal cual
        if output.is_empty() || self.policy == StagingPolicy::Discard {
            info!("[{}] {} ({:?}): discarding {} intermediate outputs",
                  launch.execution_id,
                  launch.agent,
                  launch.kind,
                  intermediates.len());
            return Ok(output);
        }

        info!("[{}] {} ({:?}): exposing {} intermediate outputs",
              launch.execution_id,
              launch.agent,
              launch.kind,
              intermediates.len());
        for item in intermediates {
            let role = format!("{INTERMEDIATE_ROLE_PREFIX}{}", item.role);
            push_role(&mut output.files, &role, item.file_path);
            match &mut output.metadata {
                OutputMetadata::ByRole(map) => push_role(map, &role, item.metadata),
                OutputMetadata::Templates(list) => list.push(MetadataTemplate::Literal { name: role,
                                                                                         metadata: item.metadata }),
                OutputMetadata::Unsupported(_) => {}
            }
        }
        Ok(output)
    }
}

fn push_role<T>(map: &mut crate::model::RoleMap<T>, role: &str, value: T) {
    match map.get_mut(role) {
        Some(existing) => {
            let current = std::mem::replace(existing, RoleValue::Many(Vec::new()));
            *existing = current.push(value);
        }
        None => {
            map.insert(role.to_string(), RoleValue::Single(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Intermediate;
    use crate::model::Metadata;

    fn info() -> LaunchInfo<'static> {
        LaunchInfo { execution_id: Uuid::nil(),
                     agent: "test",
                     kind: AgentKind::Workflow }
    }

    fn output_with_intermediates() -> RunOutput {
        let mut files = FileMap::new();
        files.insert("output".into(), RoleValue::single("/w/out".to_string()));
        let mut md = MetadataMap::new();
        md.insert("output".into(), RoleValue::single(Metadata::new("Number", "TXT").with_path("/w/out")));
        let inter = ["/w/file1.out", "/w/file2.out"].iter()
                                                   .map(|p| Intermediate { role: "output".into(),
                                                                           file_path: p.to_string(),
                                                                           metadata: Metadata::new("Number", "TXT").with_path(*p) })
                                                   .collect();
        RunOutput::new(files, md).with_intermediates(inter)
    }

    #[test]
    fn discard_drops_intermediates() {
        let out = IntermediateStaging::new(StagingPolicy::Discard).apply(&info(), output_with_intermediates())
                                                                  .unwrap();
        assert!(out.intermediates.is_empty());
        assert_eq!(out.files.len(), 1);
    }

    #[test]
    fn expose_publishes_under_prefixed_role() {
        let out = IntermediateStaging::new(StagingPolicy::Expose).apply(&info(), output_with_intermediates())
                                                                 .unwrap();
        let files = &out.files["intermediate:output"];
        assert_eq!(files.len(), 2);
        assert!(files.is_many());
        assert_eq!(out.metadata_by_role().unwrap()["intermediate:output"].len(), 2);
    }

    #[test]
    fn failed_run_is_left_untouched() {
        let out = RunOutput::empty().with_intermediates(output_with_intermediates().intermediates);
        let staged = IntermediateStaging::new(StagingPolicy::Expose).apply(&info(), out).unwrap();
        assert!(staged.is_empty());
    }

    #[test]
    fn parity_check_rejects_length_mismatch() {
        let mut files = FileMap::new();
        files.insert("number".into(), RoleValue::many(vec!["a".to_string(), "b".to_string()]));
        let mut md = MetadataMap::new();
        md.insert("number".into(), RoleValue::many(vec![Metadata::default()]));
        assert!(matches!(InputParityCheck.apply(files, md), Err(CoreError::ShapeMismatch { .. })));
    }
}
