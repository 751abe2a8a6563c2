//! agentflow: ejecuta agentes y workflows de demostración.

use std::path::PathBuf;
use std::process::ExitCode;

use agent_cli::commands::{self, AgentName, DemoName};
use agent_core::{App, RuntimeConfig};
use agent_json::JsonApp;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agentflow", version, about = "Run agents and workflows through the JSON app")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an agent from config.json + input_metadata.json, writing results.json
    Run {
        /// Agent or workflow to run
        #[arg(value_enum)]
        agent: AgentName,
        /// Path to config.json
        #[arg(long)]
        config: PathBuf,
        /// Path to input_metadata.json
        #[arg(long)]
        metadata: PathBuf,
        /// Path where results.json is written
        #[arg(long)]
        results: PathBuf,
    },

    /// Create sample inputs and run a demo workflow in memory
    Demo {
        #[arg(value_enum)]
        name: DemoName,
        /// Working directory for inputs and outputs
        #[arg(long, env = "AGENTFLOW_WORKDIR")]
        workdir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    agent_core::config::init_dotenv();
    agent_cli::init_tracing();

    let config = RuntimeConfig::from_env();
    let app = App::from_config(&config);

    let result = match cli.command {
        Commands::Run { agent,
                        config: config_path,
                        metadata,
                        results, } => {
            commands::run::execute(&JsonApp::with_app(app), agent, &config_path, &metadata, &results)
                .map_err(|e| e.to_string())
        }
        Commands::Demo { name, workdir } => {
            let workdir = workdir.unwrap_or_else(|| config.workdir.clone());
            commands::demo::execute(&app, name, &workdir).map_err(|e| e.to_string())
        }
    };

    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {e}");
            commands::error_exit_code()
        }
    }
}
