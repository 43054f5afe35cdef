use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;
use supplier_risk::error::AppError;
use supplier_risk::scoring::RiskScoreEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct Envelope<'a, T: Serialize> {
    generated_at: DateTime<Utc>,
    data: &'a T,
}

pub(crate) fn write_json<W: Write, T: Serialize>(
    mut writer: W,
    generated_at: DateTime<Utc>,
    data: &T,
) -> Result<(), AppError> {
    let envelope = Envelope { generated_at, data };
    serde_json::to_writer_pretty(&mut writer, &envelope)?;
    writeln!(writer)?;
    Ok(())
}

pub(crate) fn write_scores_csv<W: Write>(
    writer: W,
    entries: &[RiskScoreEntry],
) -> Result<(), AppError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["kind", "id", "risk_score", "risk_level"])
        .map_err(std::io::Error::from)?;
    for entry in entries {
        let score = entry.risk_score.to_string();
        csv.write_record([
            entry.entity.label(),
            entry.entity.id(),
            score.as_str(),
            entry.risk_level.label(),
        ])
        .map_err(std::io::Error::from)?;
    }
    csv.flush()?;
    Ok(())
}
