//! agent-json: front-end del App basado en archivos JSON.
//!
//! - `config`: `config.json` (ids de entrada, rutas de salida, argumentos).
//! - `metadata_file`: `input_metadata.json` indexado por `_id`.
//! - `resolve`: asignación de ids a roles.
//! - `results`: serialización de `results.json`.
pub mod app;
pub mod config;
pub mod error;
pub mod metadata_file;
pub mod resolve;
pub mod results;

pub use app::JsonApp;
pub use config::AppConfig;
pub use error::JsonAppError;
pub use metadata_file::MetadataIndex;
pub use resolve::{InputResolver, ResolvedInputs};
pub use results::{read_results, write_results, ResultRecord, ResultsFile};
