mod cli;
mod commands;
mod infra;
mod render;

use supplier_risk::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
