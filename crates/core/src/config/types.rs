use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    /// Locale used for number formatting (BCP 47 tag).
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiagnosticsConfig {
    /// Emit developer warnings (deprecated sizes, charts on small cards).
    #[serde(default = "default_dev_warnings")]
    pub dev_warnings: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { dev_warnings: default_dev_warnings() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_dev_warnings() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Where the configuration came from; `None` when built-in defaults are used.
    pub source: Option<PathBuf>,
    pub locale: String,
    pub diagnostics: DiagnosticsConfig,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source: None,
            locale: default_locale(),
            diagnostics: DiagnosticsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
