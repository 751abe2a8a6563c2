use std::process::ExitCode;

use agent_core::RuntimeConfig;
use agentflow::demos;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    agent_core::config::init_dotenv();
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
                             .init();

    let config = RuntimeConfig::from_env();
    match demos::run_from_config(&config) {
        Ok(reports) => match serde_json::to_string_pretty(&reports) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
