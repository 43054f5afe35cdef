use crate::commands;
use crate::render::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use supplier_risk::config::AppConfig;
use supplier_risk::error::AppError;
use supplier_risk::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "supplier-risk",
    about = "Score supplier and director portfolios and report concentration risk",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every supplier and director in a portfolio
    Score(ScoreArgs),
    /// Report multi-board directors and suppliers sharing directors
    Concentration(PortfolioArgs),
    /// Explain how a supplier score was reached
    Breakdown(SupplierBreakdownArgs),
    /// Explain how a director score was reached
    BreakdownDirector(DirectorBreakdownArgs),
    /// List inconsistent supplier/director relationships
    Integrity(PortfolioArgs),
    /// Print the effective scoring configuration after overrides
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub(crate) struct PortfolioArgs {
    /// JSON file with `suppliers` and `directors` arrays
    #[arg(long)]
    pub(crate) portfolio: PathBuf,
    /// JSON scoring overrides; falls back to RISK_SCORING_CONFIG
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) source: PortfolioArgs,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct SupplierBreakdownArgs {
    #[command(flatten)]
    pub(crate) source: PortfolioArgs,
    /// Supplier id to explain
    #[arg(long)]
    pub(crate) supplier: String,
}

#[derive(Args, Debug)]
pub(crate) struct DirectorBreakdownArgs {
    #[command(flatten)]
    pub(crate) source: PortfolioArgs,
    /// Director id to explain
    #[arg(long)]
    pub(crate) director: String,
}

#[derive(Args, Debug)]
pub(crate) struct ConfigArgs {
    /// JSON scoring overrides; falls back to RISK_SCORING_CONFIG
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;

    match cli.command {
        Command::Score(args) => commands::score(&config, args),
        Command::Concentration(args) => commands::concentration(&config, args),
        Command::Breakdown(args) => commands::supplier_breakdown(&config, args),
        Command::BreakdownDirector(args) => commands::director_breakdown(&config, args),
        Command::Integrity(args) => commands::integrity(&config, args),
        Command::Config(args) => commands::effective_config(&config, args),
    }
}
