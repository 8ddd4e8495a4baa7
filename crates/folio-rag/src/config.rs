//! Configuration for the assistant pipeline and the answer service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::knowledge::defaults;

/// Environment variable naming the TOML configuration file
pub const ENV_CONFIG_PATH: &str = "FOLIO_CONFIG";
/// Environment variable overriding `remote.base_url`
pub const ENV_REMOTE_URL: &str = "FOLIO_REMOTE_URL";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Answer service HTTP server
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote answer client settings
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Widget-side knowledge base used on remote failure
    #[serde(default)]
    pub assistant: AssistantConfig,
    /// Knowledge base the answer service answers from
    #[serde(default)]
    pub answer_service: AnswerServiceConfig,
}

impl FolioConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read config {}: {}", path.display(), e);
            Error::Io(e)
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration.
    ///
    /// Precedence for the file: explicit `path` > `FOLIO_CONFIG` > built-in defaults.
    /// `FOLIO_REMOTE_URL` then overrides the remote base URL.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from);
        let mut config = match path.map(Path::to_path_buf).or(env_path) {
            Some(path) => Self::from_file(path)?,
            None => {
                tracing::debug!("No configuration file given, using defaults");
                Self::default()
            }
        };

        if let Ok(url) = std::env::var(ENV_REMOTE_URL) {
            if !url.trim().is_empty() {
                config.remote.base_url = url;
            }
        }

        Ok(config)
    }
}

/// One `{aliases, answer}` record as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntryConfig {
    /// Trigger phrases, matched case-insensitively as substrings
    pub aliases: Vec<String>,
    /// Answer text, may contain `**bold**` markup
    pub answer: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Directory the widget's static assets are served from
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
            static_dir: PathBuf::from("./webapp"),
        }
    }
}

/// Remote answer client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL of the answer service; `/api/ask` is appended
    pub base_url: String,
    /// Upper bound on one remote call, in seconds
    pub timeout_secs: u64,
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Widget-side knowledge base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Entries in priority order
    #[serde(default = "defaults::assistant_entries")]
    pub entries: Vec<KnowledgeEntryConfig>,
    /// Answer used when no entry matches
    #[serde(default = "default_fallback_answer")]
    pub fallback_answer: String,
}

fn default_fallback_answer() -> String {
    defaults::ASSISTANT_FALLBACK_ANSWER.to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            entries: defaults::assistant_entries(),
            fallback_answer: default_fallback_answer(),
        }
    }
}

/// Answer service knowledge base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerServiceConfig {
    /// Rules in priority order
    #[serde(default = "defaults::service_entries")]
    pub entries: Vec<KnowledgeEntryConfig>,
    /// Reply when no rule matches
    #[serde(default = "default_service_answer")]
    pub default_answer: String,
}

fn default_service_answer() -> String {
    defaults::SERVICE_DEFAULT_ANSWER.to_string()
}

impl Default for AnswerServiceConfig {
    fn default() -> Self {
        Self {
            entries: defaults::service_entries(),
            default_answer: default_service_answer(),
        }
    }
}
