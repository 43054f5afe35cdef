use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::scoring::RiskScoringConfigPatch;

/// Distinguishes runtime behavior for different stages of the tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringSource,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let overrides_path = match env::var("RISK_SCORING_CONFIG") {
            Ok(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyOverridesPath),
            Ok(raw) => Some(PathBuf::from(raw.trim())),
            Err(_) => None,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringSource { overrides_path },
            telemetry: TelemetryConfig { log_level },
        })
    }

    /// Reads the configured overrides file, if any.
    pub fn scoring_patch(&self) -> Result<Option<RiskScoringConfigPatch>, ConfigError> {
        self.scoring
            .overrides_path
            .as_deref()
            .map(read_scoring_patch)
            .transpose()
    }
}

/// Where scoring overrides come from.
#[derive(Debug, Clone, Default)]
pub struct ScoringSource {
    pub overrides_path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Parses a JSON scoring patch. Sections not named in the file stay unset.
pub fn read_scoring_patch(path: &Path) -> Result<RiskScoringConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyOverridesPath,
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyOverridesPath => {
                write!(f, "RISK_SCORING_CONFIG must name a file when set")
            }
            ConfigError::Io { path, .. } => {
                write!(f, "unable to read scoring overrides {}", path.display())
            }
            ConfigError::Parse { path, .. } => {
                write!(f, "scoring overrides {} are not valid JSON", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::EmptyOverridesPath => None,
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}
