//! Subcomandos de `agentflow`.

pub mod demo;
pub mod run;

use std::process::ExitCode;

use clap::ValueEnum;

/// Resultado de un subcomando que terminó sin error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Hubo salidas.
    Success,
    /// El run no produjo salidas o los resultados no se escribieron.
    NoResults,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::NoResults => ExitCode::from(1),
        }
    }
}

/// Código de salida para un subcomando que falló.
pub fn error_exit_code() -> ExitCode {
    ExitCode::from(2)
}

/// Agentes y workflows registrados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentName {
    Increment,
    SumPair,
    CumulativeSum,
    IncrementAndSum,
    Cumulative,
}

/// Workflows con escenario de demostración.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoName {
    IncrementAndSum,
    Cumulative,
}
