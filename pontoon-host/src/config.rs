use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Demo configuration. Every field has a default; a JSON file can override
/// any of them.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// `<scope>/<Export>` reference of the counter component.
    pub counter_remote: String,
    /// Simulated transfer latency, so the fallback frame is visible.
    pub fetch_delay_ms: u64,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            counter_remote: pontoon_counter_remote::COUNTER_REF.to_string(),
            fetch_delay_ms: 150,
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse: {0}")]
    Parse(#[from] serde_json::Error),
}

impl HostConfig {
    /// Read a JSON config file; fields it omits keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load from the file named by `PONTOON_HOST_CONFIG`, or defaults when
    /// the variable is unset. An unreadable file is reported and skipped
    /// rather than aborting the demo.
    pub fn load_from_env() -> Self {
        match std::env::var("PONTOON_HOST_CONFIG") {
            Ok(path) => match Self::load(Path::new(&path)) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("pontoon-host: ignoring config {path}: {err}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
