//! Configuración de ejecución desde variables de entorno.
//! Convención `AGENTFLOW_*`; un `.env` en el directorio actual se carga una vez.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::app::StagingPolicy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Directorio de trabajo de las demos.
    pub workdir: PathBuf,
    /// Nombre del `TaskRuntime` (`local` por defecto).
    pub runtime: String,
    pub staging: StagingPolicy,
    /// Nombre del reporter de progreso (`log` o `silent`).
    pub progress: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { workdir: env::temp_dir(),
               runtime: "local".into(),
               staging: StagingPolicy::Discard,
               progress: "log".into() }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero leyendo de una función arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let workdir = lookup("AGENTFLOW_WORKDIR").filter(|v| !v.is_empty())
                                                 .map(PathBuf::from)
                                                 .unwrap_or(defaults.workdir);
        let runtime = lookup("AGENTFLOW_RUNTIME").filter(|v| !v.is_empty()).unwrap_or(defaults.runtime);
        let staging = match lookup("AGENTFLOW_KEEP_INTERMEDIATES").as_deref().map(str::trim) {
            Some("1") | Some("true") | Some("TRUE") | Some("yes") => StagingPolicy::Expose,
            _ => StagingPolicy::Discard,
        };
        let progress = lookup("AGENTFLOW_PROGRESS").filter(|v| !v.is_empty()).unwrap_or(defaults.progress);
        Self { workdir,
               runtime,
               staging,
               progress }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
