use crate::cli::PortfolioArgs;
use std::fs;
use std::path::Path;
use supplier_risk::config::{read_scoring_patch, AppConfig};
use supplier_risk::error::AppError;
use supplier_risk::scoring::{Portfolio, RiskEngine, RiskScoringConfig, RiskScoringConfigPatch};
use tracing::{info, warn};

pub(crate) fn load_portfolio(path: &Path) -> Result<Portfolio, AppError> {
    let raw = fs::read_to_string(path)?;
    let portfolio: Portfolio = serde_json::from_str(&raw)?;
    info!(
        path = %path.display(),
        suppliers = portfolio.suppliers.len(),
        directors = portfolio.directors.len(),
        "portfolio loaded"
    );
    Ok(portfolio)
}

/// A `--config` flag wins over RISK_SCORING_CONFIG.
pub(crate) fn scoring_patch(
    config: &AppConfig,
    override_path: Option<&Path>,
) -> Result<Option<RiskScoringConfigPatch>, AppError> {
    let patch = match override_path {
        Some(path) => Some(read_scoring_patch(path)?),
        None => config.scoring_patch()?,
    };
    if let Some(patch) = &patch {
        if patch.is_empty() {
            warn!("scoring overrides file names no sections; defaults apply");
        }
    }
    Ok(patch)
}

pub(crate) fn effective_scoring_config(
    config: &AppConfig,
    override_path: Option<&Path>,
) -> Result<RiskScoringConfig, AppError> {
    let defaults = RiskScoringConfig::default();
    let merged = match scoring_patch(config, override_path)? {
        Some(patch) => defaults.merge(patch),
        None => defaults,
    };
    Ok(merged)
}

pub(crate) fn build_engine(config: &AppConfig, args: &PortfolioArgs) -> Result<RiskEngine, AppError> {
    let portfolio = load_portfolio(&args.portfolio)?;
    let scoring = effective_scoring_config(config, args.config.as_deref())?;
    let engine = RiskEngine::with_config(portfolio, scoring)?;
    Ok(engine)
}
