//! agentflow CLI: subcomandos reutilizables desde tests.

pub mod commands;

/// Inicializa `tracing-subscriber`; los registros de `log` se reenvían.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agent_core=info,agent_json=info,agent_demos=info,agent_cli=info".into()),
        )
        .init();
}
