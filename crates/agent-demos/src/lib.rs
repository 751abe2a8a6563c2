//! agent-demos: agentes y workflows de ejemplo sobre archivos numéricos.
//!
//! - `IncrementAgent`: `n -> n + 1`.
//! - `SumPairAgent`: `a, b -> a + b`.
//! - `CumulativeSumAgent`: suma acumulativa de una secuencia.
//! - `IncrementAndSumWorkflow` y `CumulativeWorkflow` los combinan.
pub mod agents;
pub mod scenarios;
pub mod tasks;
pub mod workflows;

pub use agents::{CumulativeSumAgent, IncrementAgent, SumPairAgent};
pub use workflows::{CumulativeWorkflow, IncrementAndSumWorkflow};
