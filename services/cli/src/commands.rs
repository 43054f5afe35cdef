use crate::cli::{ConfigArgs, DirectorBreakdownArgs, PortfolioArgs, ScoreArgs, SupplierBreakdownArgs};
use crate::infra::{build_engine, effective_scoring_config};
use crate::render::{write_json, write_scores_csv, OutputFormat};
use chrono::Utc;
use std::io;
use supplier_risk::config::AppConfig;
use supplier_risk::error::AppError;
use supplier_risk::scoring::{DirectorId, RiskEngineError, SupplierId};
use tracing::info;

pub(crate) fn score(config: &AppConfig, args: ScoreArgs) -> Result<(), AppError> {
    let engine = build_engine(config, &args.source)?;
    let entries = engine.calculate_all_risk_scores();
    info!(entities = entries.len(), "scored portfolio");

    let stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Json => write_json(stdout, Utc::now(), &entries),
        OutputFormat::Csv => write_scores_csv(stdout, &entries),
    }
}

pub(crate) fn concentration(config: &AppConfig, args: PortfolioArgs) -> Result<(), AppError> {
    let engine = build_engine(config, &args)?;
    let report = engine.concentration_risks();
    info!(
        directors = report.directors.len(),
        suppliers = report.suppliers.len(),
        "concentration report ready"
    );
    write_json(io::stdout().lock(), Utc::now(), &report)
}

pub(crate) fn supplier_breakdown(
    config: &AppConfig,
    args: SupplierBreakdownArgs,
) -> Result<(), AppError> {
    let engine = build_engine(config, &args.source)?;
    let breakdown = engine.supplier_risk_breakdown(&SupplierId(args.supplier))?;
    write_json(io::stdout().lock(), Utc::now(), &breakdown)
}

pub(crate) fn director_breakdown(
    config: &AppConfig,
    args: DirectorBreakdownArgs,
) -> Result<(), AppError> {
    let engine = build_engine(config, &args.source)?;
    let breakdown = engine.director_risk_breakdown(&DirectorId(args.director))?;
    write_json(io::stdout().lock(), Utc::now(), &breakdown)
}

pub(crate) fn integrity(config: &AppConfig, args: PortfolioArgs) -> Result<(), AppError> {
    let engine = build_engine(config, &args)?;
    let issues = engine.integrity_issues();
    for issue in issues {
        info!("{}", issue.describe());
    }
    write_json(io::stdout().lock(), Utc::now(), &issues)
}

pub(crate) fn effective_config(config: &AppConfig, args: ConfigArgs) -> Result<(), AppError> {
    let scoring = effective_scoring_config(config, args.config.as_deref())?;
    scoring.validate().map_err(RiskEngineError::from)?;
    write_json(io::stdout().lock(), Utc::now(), &scoring)
}
