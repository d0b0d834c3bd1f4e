//! Editor settings persisted with the saved state.

use serde::{Deserialize, Serialize};

/// Output formats the export collaborator may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Pdf,
    Html,
}

/// User-facing editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Daily generation time, `HH:MM`.
    #[serde(default = "default_schedule_time")]
    pub schedule_time: String,
    #[serde(default)]
    pub auto_save: bool,
    #[serde(default = "default_export_formats")]
    pub export_format: Vec<ExportFormat>,
}

fn default_schedule_time() -> String {
    "00:00".to_string()
}

fn default_export_formats() -> Vec<ExportFormat> {
    vec![ExportFormat::Pdf, ExportFormat::Png]
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            schedule_time: default_schedule_time(),
            auto_save: false,
            export_format: default_export_formats(),
        }
    }
}
