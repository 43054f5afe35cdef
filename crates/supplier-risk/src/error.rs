use crate::config::ConfigError;
use crate::scoring::RiskEngineError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Engine(RiskEngineError),
    Serialization(serde_json::Error),
}

impl AppError {
    /// Process exit code for command-line callers.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Engine(RiskEngineError::SupplierNotFound(_))
            | AppError::Engine(RiskEngineError::DirectorNotFound(_)) => 3,
            AppError::Config(_) | AppError::Engine(RiskEngineError::InvalidConfig(_)) => 2,
            AppError::Telemetry(_) | AppError::Io(_) | AppError::Serialization(_) => 1,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Engine(err) => write!(f, "scoring error: {}", err),
            AppError::Serialization(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Engine(err) => Some(err),
            AppError::Serialization(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RiskEngineError> for AppError {
    fn from(value: RiskEngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ConfigValidationError, SupplierId};

    #[test]
    fn not_found_errors_name_the_missing_id() {
        let err = AppError::from(RiskEngineError::SupplierNotFound(SupplierId::from("SUP-404")));
        assert!(err.to_string().contains("SUP-404"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn invalid_config_maps_to_configuration_exit_code() {
        let err = AppError::from(RiskEngineError::from(
            ConfigValidationError::WeightsDoNotSumToOne { sum: 0.9 },
        ));
        assert_eq!(err.exit_code(), 2);
        assert!(std::error::Error::source(&err).is_some());
    }
}
