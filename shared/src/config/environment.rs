//! Deployment environment and logging defaults

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Variables consulted, in order, to pick the environment
const ENVIRONMENT_KEYS: [&str; 3] = ["ENVIRONMENT", "ENV", "RUST_ENV"];

/// Deployment environment; selects the `.env` file and default log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// First of `ENVIRONMENT`, `ENV`, `RUST_ENV` that is set; development otherwise
    pub fn from_env() -> Self {
        let Some((key, raw)) = ENVIRONMENT_KEYS
            .iter()
            .find_map(|key| std::env::var(key).ok().map(|raw| (*key, raw)))
        else {
            return Self::default();
        };

        raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Unknown environment, using development");
            Self::default()
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// `.env.<environment>`, loaded before the plain `.env`
    pub fn env_file(&self) -> String {
        format!(".env.{}", self.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let environment = match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "staging" | "stage" | "test" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            other => return Err(format!("unknown environment `{}`", other)),
        };
        Ok(environment)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter used when `RUST_LOG` is not set (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
        }
    }
}

impl LoggingConfig {
    /// Create logging config for environment
    pub fn for_environment(env: Environment) -> Self {
        let level = match env {
            Environment::Development => "debug",
            Environment::Staging => "info",
            Environment::Production => "warn",
        };
        Self {
            level: level.to_string(),
        }
    }

    /// Logging config for the environment, overridden by `RUST_LOG` when present
    pub fn from_env(env: Environment) -> Self {
        match std::env::var("RUST_LOG") {
            Ok(level) if !level.trim().is_empty() => Self { level },
            _ => Self::for_environment(env),
        }
    }
}
