//! Workflows de demostración.
//!
//! ```text
//!   number1      number2              number[0] .. number[n]
//!      |            |                     |            |
//!  Increment    Increment             Increment .. Increment
//!      +-----.------+                     +-----.------+
//!            |                                  |
//!         SumPair                        CumulativeSum
//!            |                                  |
//!         output                     output[0] .. output[n-1]
//! ```
use std::path::Path;

use agent_core::errors::CoreError;
use agent_core::model::{FileMap, Metadata, MetadataMap, RoleMapExt, RoleValue};
use agent_core::{Agent, AgentContext, AgentKind, InputShape, Remap, RunOutput, StageTracker};
use log::{error, info};

use crate::agents::{CumulativeSumAgent, IncrementAgent, SumPairAgent};

/// Ruta intermedia `name` junto a la salida `output`.
fn beside(output: &str, name: &str) -> String {
    match Path::new(output).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name).to_string_lossy().into_owned(),
        _ => name.to_string(),
    }
}

fn output_role(path: String) -> FileMap {
    let mut files = FileMap::new();
    files.insert("output".into(), RoleValue::single(path));
    files
}

/// Incrementa `number1` y `number2` por separado y suma los resultados.
#[derive(Debug, Clone)]
pub struct IncrementAndSumWorkflow {
    ctx: AgentContext,
}

impl IncrementAndSumWorkflow {
    fn shape() -> InputShape {
        InputShape::new().roles(2).single("number1").single("number2")
    }

    /// Ejecuta una etapa; un `Err` o un resultado vacío abortan el workflow.
    fn stage<A: Agent>(&self,
                       label: &str,
                       input_files: &FileMap,
                       input_metadata: &MetadataMap,
                       output_files: &FileMap)
                       -> Option<RunOutput> {
        let agent = match A::from_context(&self.ctx) {
            Ok(a) => a,
            Err(e) => {
                error!("{label} failed: {e}");
                return None;
            }
        };
        match agent.run(input_files, input_metadata, output_files) {
            Ok(out) if !out.is_empty() => Some(out),
            Ok(_) => {
                error!("{label} failed: no outputs");
                None
            }
            Err(e) => {
                error!("{label} failed: {e}");
                None
            }
        }
    }

    fn increment(&self, label: &str, role: &str, files: &FileMap, metadata: &MetadataMap, out: String)
                 -> Option<RunOutput> {
        let remap = Remap::new().rename("input", role);
        let (files, metadata) = match (remap.apply(files), remap.apply(metadata)) {
            (Ok(f), Ok(m)) => (f, m),
            (Err(e), _) | (_, Err(e)) => {
                error!("{label} failed: {e}");
                return None;
            }
        };
        self.stage::<IncrementAgent>(label, &files, &metadata, &output_role(out))
    }
}

impl Agent for IncrementAndSumWorkflow {
    fn from_context(ctx: &AgentContext) -> Result<Self, CoreError> {
        Ok(Self { ctx: ctx.clone() })
    }

    fn name(&self) -> &str {
        "increment_and_sum"
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Workflow
    }

    fn run(&self, input_files: &FileMap, input_metadata: &MetadataMap, output_files: &FileMap)
           -> Result<RunOutput, CoreError> {
        info!("\t0. perform checks");
        if let Err(e) = Self::shape().check(input_files, input_metadata) {
            error!("IncrementAndSumWorkflow aborted: {e}");
            return Ok(RunOutput::empty());
        }
        let Ok(output) = output_files.single("output") else {
            error!("IncrementAndSumWorkflow aborted: no single output path");
            return Ok(RunOutput::empty());
        };
        let mut tracker = StageTracker::new(self.ctx.progress.clone());

        info!("\t1.a run increment on number1");
        let Some(out1) =
            self.increment("increment 1", "number1", input_files, input_metadata, beside(output, "file1.out"))
        else {
            return Ok(RunOutput::empty());
        };
        tracker.add_stage_outputs(&out1);
        tracker.progress(50.0);

        info!("\t1.b run increment on number2");
        let Some(out2) =
            self.increment("increment 2", "number2", input_files, input_metadata, beside(output, "file2.out"))
        else {
            return Ok(RunOutput::empty());
        };
        tracker.add_stage_outputs(&out2);
        tracker.progress(75.0);

        info!("\t2. run sum");
        let (Some(f1), Some(f2)) = (out1.files.get("output"), out2.files.get("output")) else {
            return Ok(RunOutput::empty());
        };
        let (Some(m1), Some(m2)) = (out1.metadata_by_role().and_then(|m| m.get("output")),
                                    out2.metadata_by_role().and_then(|m| m.get("output")))
        else {
            return Ok(RunOutput::empty());
        };
        let mut sum_files = FileMap::new();
        sum_files.insert("input1".into(), f1.clone());
        sum_files.insert("input2".into(), f2.clone());
        let mut sum_metadata = MetadataMap::new();
        sum_metadata.insert("input1".into(), m1.clone());
        sum_metadata.insert("input2".into(), m2.clone());

        let Some(out3) = self.stage::<SumPairAgent>("sum", &sum_files, &sum_metadata, output_files) else {
            return Ok(RunOutput::empty());
        };
        tracker.progress(100.0);

        info!("\t3. return");
        Ok(tracker.finish(out3))
    }
}

/// Incrementa cada elemento de `number` y suma los resultados de forma
/// acumulativa.
#[derive(Debug, Clone)]
pub struct CumulativeWorkflow {
    ctx: AgentContext,
}

impl Agent for CumulativeWorkflow {
    fn from_context(ctx: &AgentContext) -> Result<Self, CoreError> {
        Ok(Self { ctx: ctx.clone() })
    }

    fn name(&self) -> &str {
        "cumulative"
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Workflow
    }

    fn run(&self, input_files: &FileMap, input_metadata: &MetadataMap, output_files: &FileMap)
           -> Result<RunOutput, CoreError> {
        info!("\t0. perform checks");
        let shape = InputShape::new().roles(1).sequence("number").with_parity();
        if let Err(e) = shape.check(input_files, input_metadata) {
            error!("CumulativeWorkflow aborted: {e}");
            return Ok(RunOutput::empty());
        }
        let paths = input_files.many("number")?;
        let metadata = input_metadata.many("number")?;
        let mut tracker = StageTracker::new(self.ctx.progress.clone());

        info!("\t1. run increment on each input");
        let increment = IncrementAgent::from_context(&self.ctx)?;
        let mut outputs: Vec<String> = Vec::new();
        let mut out_mds: Vec<Metadata> = Vec::new();
        for (i, (path, md)) in paths.iter().zip(metadata).enumerate() {
            let mut files = FileMap::new();
            files.insert("input".into(), RoleValue::single(path.clone()));
            let mut mds = MetadataMap::new();
            mds.insert("input".into(), RoleValue::single(md.clone()));

            match increment.run(&files, &mds, &output_role(format!("{path}.out"))) {
                Ok(out) => match (out.files.single("output"), out.metadata_by_role().map(|m| m.single("output"))) {
                    (Ok(f), Some(Ok(m))) => {
                        outputs.push(f.clone());
                        out_mds.push(m.clone());
                        tracker.add_stage_outputs(&out);
                    }
                    _ => error!("increment run {i} failed: no outputs"),
                },
                Err(e) => error!("increment run {i} failed: {e}"),
            }
            tracker.progress(75.0 * i as f64 / paths.len() as f64);
        }

        info!("\t2. run cumulative sum");
        let mut sum_files = FileMap::new();
        sum_files.insert("input".into(), RoleValue::many(outputs));
        let mut sum_metadata = MetadataMap::new();
        sum_metadata.insert("input".into(), RoleValue::many(out_mds));
        let reducer = CumulativeSumAgent::from_context(&self.ctx)?;
        let out = match reducer.run(&sum_files, &sum_metadata, output_files) {
            Ok(out) => out,
            Err(e) => {
                error!("cumulative sum failed: {e}");
                return Ok(RunOutput::empty());
            }
        };
        tracker.progress(100.0);

        info!("\t3. return");
        Ok(tracker.finish(out))
    }
}
