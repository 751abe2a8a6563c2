//! `agentflow demo`: crea los archivos de ejemplo y lanza el workflow.
use std::path::Path;

use agent_core::errors::CoreError;
use agent_core::App;
use agent_demos::scenarios;
use log::info;

use super::{DemoName, Outcome};

pub fn execute(app: &App, demo: DemoName, workdir: &Path) -> Result<Outcome, CoreError> {
    let output = match demo {
        DemoName::IncrementAndSum => scenarios::increment_and_sum(app, workdir)?,
        DemoName::Cumulative => scenarios::cumulative(app, workdir)?,
    };
    if output.is_empty() {
        return Ok(Outcome::NoResults);
    }
    for (role, paths) in &output.files {
        for path in paths.iter() {
            info!("{role}: {path}");
            println!("{role}\t{path}");
        }
    }
    Ok(Outcome::Success)
}
