use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressStatus {
    Running,
    Done,
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("RUNNING"),
            Self::Done => f.write_str("DONE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub message: String,
    /// Porcentaje completado (0..=100) cuando el reporte es numérico.
    pub percent: Option<f64>,
    pub status: Option<ProgressStatus>,
    /// `(task_id, total)`.
    pub task: Option<(u32, u32)>,
    pub ts: DateTime<Utc>, // metadato, no entra en el texto
}

impl ProgressUpdate {
    pub fn message(message: impl Into<String>) -> Self {
        Self { message: message.into(),
               percent: None,
               status: None,
               task: None,
               ts: Utc::now() }
    }

    /// Reporte de porcentaje; el mensaje es el propio número.
    pub fn percent(percent: f64) -> Self {
        Self { percent: Some(percent),
               ..Self::message(percent.to_string()) }
    }

    pub fn with_status(mut self, status: ProgressStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_task(mut self, task_id: u32, total: u32) -> Self {
        self.task = Some((task_id, total));
        self
    }
}

impl fmt::Display for ProgressUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PROGRESS: {}", self.message)?;
        if let Some(status) = self.status {
            write!(f, " - {status}")?;
        }
        if let Some((task_id, total)) = self.task {
            write!(f, " ({task_id}/{total})")?;
        }
        Ok(())
    }
}
