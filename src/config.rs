//! Runtime configuration for a playing session.

use std::{fs::File, io::BufReader, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::game::DepthSchedule;

/// Configuration for connecting to the game server and searching.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
///
/// # Examples
///
/// ```
/// use nineboard::config::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_port(12345)
///     .with_seed(42);
/// assert_eq!(config.address(), "localhost:12345");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Game server host
    pub host: String,
    /// Game server port; must be set before connecting
    pub port: u16,
    /// Tie-break seed; `None` draws one from entropy
    pub seed: Option<u64>,
    /// Search depth by received message count
    pub schedule: DepthSchedule,
    /// Pause after an empty read before reading again
    pub idle_backoff_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 0,
            seed: None,
            schedule: DepthSchedule::default(),
            idle_backoff_ms: 10,
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON for this
    /// type, or fails [`EngineConfig::validate`].
    pub fn load(path: &Path) -> crate::Result<Self> {
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.host.is_empty() {
            return Err(crate::Error::InvalidConfiguration {
                message: "host must not be empty".to_string(),
            });
        }
        self.schedule.validate()
    }

    /// Set the server host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the server port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the random seed for deterministic tie-breaks.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_schedule(mut self, schedule: DepthSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_idle_backoff(mut self, backoff: Duration) -> Self {
        self.idle_backoff_ms = u64::try_from(backoff.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn idle_backoff(&self) -> Duration {
        Duration::from_millis(self.idle_backoff_ms)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
