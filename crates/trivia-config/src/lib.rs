//! # trivia-config
//!
//! Layered configuration loading for Trivia using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TRIVIA_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`, or `./trivia.toml`
//! 3. User-level `~/.config/trivia/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `TRIVIA_DATABASE__PATH` -> `database.path`,
//! `TRIVIA_AUTH__ENFORCE` -> `auth.enforce`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use trivia_config::TriviaConfig;
//!
//! let config = TriviaConfig::load_with_dotenv(None).expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod auth;
mod database;
mod error;
mod quiz;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use quiz::QuizConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = "trivia.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TriviaConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl TriviaConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// `explicit` replaces the project-local `./trivia.toml` layer when given
    /// and must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicit file does not exist, a source
    /// cannot be parsed, or a value fails validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit
            && !path.is_file()
        {
            return Err(ConfigError::InvalidValue {
                field: "config".into(),
                reason: format!("file '{}' does not exist", path.display()),
            });
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory, then [`TriviaConfig::load`].
    ///
    /// # Errors
    ///
    /// Same as [`TriviaConfig::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path =
            explicit.map_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TRIVIA_").split("__"))
    }

    /// Reject values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero page size or an empty
    /// database path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiz.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quiz.page_size".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("trivia").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = TriviaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.quiz.page_size, 10);
        assert!(!config.auth.enforce);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut config = TriviaConfig::default();
        config.quiz.page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("quiz.page_size"));
    }

    #[test]
    fn blank_database_path_is_rejected() {
        let mut config = TriviaConfig::default();
        config.database.path = "  ".into();
        assert!(config.validate().is_err());
    }
}
