//! `agentflow run`: ejecuta un agente con la terna config / metadata / results.
use std::path::Path;

use agent_core::Agent;
use agent_demos::{CumulativeSumAgent, CumulativeWorkflow, IncrementAgent, IncrementAndSumWorkflow, SumPairAgent};
use agent_json::{read_results, JsonApp, JsonAppError};
use log::{info, warn};

use super::{AgentName, Outcome};

pub fn execute(app: &JsonApp, agent: AgentName, config: &Path, metadata: &Path, results: &Path)
               -> Result<Outcome, JsonAppError> {
    match agent {
        AgentName::Increment => launch::<IncrementAgent>(app, config, metadata, results),
        AgentName::SumPair => launch::<SumPairAgent>(app, config, metadata, results),
        AgentName::CumulativeSum => launch::<CumulativeSumAgent>(app, config, metadata, results),
        AgentName::IncrementAndSum => launch::<IncrementAndSumWorkflow>(app, config, metadata, results),
        AgentName::Cumulative => launch::<CumulativeWorkflow>(app, config, metadata, results),
    }
}

fn launch<A: Agent>(app: &JsonApp, config: &Path, metadata: &Path, results: &Path) -> Result<Outcome, JsonAppError> {
    if !app.launch::<A>(config, metadata, results)? {
        warn!("results were not written to {}", results.display());
        return Ok(Outcome::NoResults);
    }
    let written = read_results(results)?;
    info!("{} output records written to {}", written.output_files.len(), results.display());
    if written.output_files.is_empty() {
        return Ok(Outcome::NoResults);
    }
    Ok(Outcome::Success)
}
