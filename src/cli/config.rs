//! Configuration file structure
//!
//! ```json
//! {
//!   "data_file": "./products.json",
//!   "http": { "host": "0.0.0.0", "port": 8080 },
//!   "log_format": "pretty"
//! }
//! ```
//!
//! Every field is optional. Command-line flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;

/// Resolved shelfdb configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Products file (default "./products.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Log output format (default pretty)
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./products.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            http: HttpServerConfig::default(),
            log_format: LogFormat::default(),
        }
    }
}

/// Flags that override configuration file values
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub log_format: Option<LogFormat>,
    pub port: Option<u16>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise start from defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of loaded values
    pub fn apply(mut self, overrides: Overrides) -> CliResult<Self> {
        if let Some(data_file) = overrides.data_file {
            self.data_file = data_file;
        }
        if let Some(log_format) = overrides.log_format {
            self.log_format = log_format;
        }
        if let Some(port) = overrides.port {
            self.http.port = port;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::Config("data_file must not be empty".to_string()));
        }

        if self.http.port == 0 {
            return Err(CliError::Config("http.port must be > 0".to_string()));
        }

        Ok(())
    }
}
