use crate::app::assistant::DEFAULT_REPLY_DELAY;
use crate::core::session::DEFAULT_GREETING;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AssistError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "physio-assist.toml";
const MAX_REPLY_DELAY_MS: u64 = 60_000;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub reply_delay_ms: Option<u64>,
    pub greeting: Option<String>,
    pub transcript_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Uses the default config file when present, built-in defaults otherwise.
    pub fn load_default() -> Result<Self> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AssistError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(delay) = self.assistant.reply_delay_ms {
            validation::validate_range("assistant.reply_delay_ms", delay, 0, MAX_REPLY_DELAY_MS)?;
        }

        if let Some(greeting) = &self.assistant.greeting {
            validation::validate_non_empty_string("assistant.greeting", greeting)?;
        }

        if let Some(path) = &self.assistant.transcript_path {
            validation::validate_path("assistant.transcript_path", path)?;
        }

        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", &level.to_lowercase(), &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn reply_delay(&self) -> Duration {
        self.assistant
            .reply_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REPLY_DELAY)
    }

    fn greeting(&self) -> &str {
        self.assistant.greeting.as_deref().unwrap_or(DEFAULT_GREETING)
    }

    fn transcript_path(&self) -> Option<&str> {
        self.assistant.transcript_path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
