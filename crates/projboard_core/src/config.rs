//! Board configuration resolved from the environment.
//!
//! # Responsibility
//! - Collect logging and input-rule settings in one place.
//! - Keep environment access injectable so parsing stays testable.

use crate::logging::{default_log_level, LoggingConfig};
use crate::validation::input_rules::{ProjectInputRules, RulesProfile};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "PROJBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PROJBOARD_LOG_DIR";
pub const ENV_RULES: &str = "PROJBOARD_RULES";

/// Runtime settings for one board process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub log_level: String,
    /// `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
    pub rules: RulesProfile,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            rules: RulesProfile::Standard,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownRulesProfile(String),
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRulesProfile(value) => write!(
                f,
                "{ENV_RULES}=`{value}` is not a rules profile; expected standard|strict"
            ),
            Self::RelativeLogDir(value) => {
                write!(f, "{ENV_LOG_DIR}=`{value}` must be an absolute path")
            }
        }
    }
}

impl Error for ConfigError {}

impl BoardConfig {
    /// Reads settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            let path = PathBuf::from(&dir);
            if !path.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir));
            }
            config.log_dir = Some(path);
        }
        if let Some(profile) = read(ENV_RULES) {
            config.rules = RulesProfile::parse(&profile)
                .ok_or(ConfigError::UnknownRulesProfile(profile))?;
        }

        Ok(config)
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            log_dir: self.log_dir.clone(),
        }
    }

    pub fn input_rules(&self) -> ProjectInputRules {
        self.rules.rules()
    }
}
