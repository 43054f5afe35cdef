use serde::Serialize;

use super::domain::{DirectorId, EntityKind, RiskLevel, SupplierId};

/// Batch output row for a single supplier or director.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskScoreEntry {
    #[serde(flatten)]
    pub entity: EntityKind,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
}

impl RiskScoreEntry {
    pub fn new(entity: EntityKind, risk_score: u8) -> Self {
        Self {
            entity,
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorConcentration {
    pub id: DirectorId,
    pub board_count: usize,
    pub risk_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierConcentration {
    pub id: SupplierId,
    pub shared_director_count: usize,
    pub risk_score: u8,
}

/// Directors on three or more boards and suppliers sharing directors, riskiest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConcentrationReport {
    pub directors: Vec<DirectorConcentration>,
    pub suppliers: Vec<SupplierConcentration>,
}

impl ConcentrationReport {
    pub fn is_empty(&self) -> bool {
        self.directors.is_empty() && self.suppliers.is_empty()
    }
}
