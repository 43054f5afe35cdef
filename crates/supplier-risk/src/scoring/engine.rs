use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use super::config::{ConfigValidationError, RiskScoringConfig, RiskScoringConfigPatch};
use super::director::{score_director, DirectorRiskBreakdown};
use super::domain::{
    DirectorId, DirectorRiskProfile, EntityKind, Portfolio, RiskLevel, SupplierId,
    SupplierRiskProfile,
};
use super::network::{IntegrityIssue, RelationshipIndex};
use super::report::{
    ConcentrationReport, DirectorConcentration, RiskScoreEntry, SupplierConcentration,
};
use super::supplier::{score_supplier, SupplierRiskBreakdown};

/// Boards held at or above which a director appears in the concentration report.
pub const CONCENTRATION_REPORT_MIN_BOARDS: usize = 3;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RiskEngineError {
    #[error("supplier {0} not found")]
    SupplierNotFound(SupplierId),
    #[error("director {0} not found")]
    DirectorNotFound(DirectorId),
    #[error("invalid scoring configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),
}

/// Facade over an immutable portfolio and a swappable configuration snapshot.
///
/// Every call captures the current configuration once and computes against that snapshot,
/// so `update_config` never interleaves with an in-flight score.
pub struct RiskEngine {
    portfolio: Portfolio,
    index: RelationshipIndex,
    config: RwLock<Arc<RiskScoringConfig>>,
}

impl RiskEngine {
    pub fn new(suppliers: Vec<SupplierRiskProfile>, directors: Vec<DirectorRiskProfile>) -> Self {
        Self::from_parts(
            Portfolio {
                suppliers,
                directors,
            },
            RiskScoringConfig::default(),
        )
    }

    pub fn with_config(
        portfolio: Portfolio,
        config: RiskScoringConfig,
    ) -> Result<Self, RiskEngineError> {
        config.validate()?;
        Ok(Self::from_parts(portfolio, config))
    }

    fn from_parts(portfolio: Portfolio, config: RiskScoringConfig) -> Self {
        let index = RelationshipIndex::build(&portfolio);
        if !index.issues().is_empty() {
            warn!(
                issues = index.issues().len(),
                "portfolio relationships are inconsistent; dangling references are skipped"
            );
        }
        info!(
            suppliers = portfolio.suppliers.len(),
            directors = portfolio.directors.len(),
            "risk engine initialised"
        );

        Self {
            portfolio,
            index,
            config: RwLock::new(Arc::new(config)),
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn config(&self) -> Arc<RiskScoringConfig> {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Shallow-merges `patch` into the current configuration. A patch that fails validation
    /// leaves the current snapshot in place.
    pub fn update_config(
        &self,
        patch: RiskScoringConfigPatch,
    ) -> Result<Arc<RiskScoringConfig>, RiskEngineError> {
        let mut slot = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let merged = slot.merge(patch);
        merged.validate()?;

        let merged = Arc::new(merged);
        *slot = merged.clone();
        info!("risk scoring configuration updated");
        Ok(merged)
    }

    pub fn integrity_issues(&self) -> &[IntegrityIssue] {
        self.index.issues()
    }

    pub fn risk_level(score: u8) -> RiskLevel {
        RiskLevel::from_score(score)
    }

    pub fn calculate_supplier_risk(&self, id: &SupplierId) -> Result<u8, RiskEngineError> {
        self.supplier_risk_breakdown(id)
            .map(|breakdown| breakdown.final_score)
    }

    pub fn calculate_director_risk(&self, id: &DirectorId) -> Result<u8, RiskEngineError> {
        self.director_risk_breakdown(id)
            .map(|breakdown| breakdown.final_score)
    }

    pub fn supplier_risk_breakdown(
        &self,
        id: &SupplierId,
    ) -> Result<SupplierRiskBreakdown, RiskEngineError> {
        let position = self
            .index
            .supplier_position(id)
            .ok_or_else(|| RiskEngineError::SupplierNotFound(id.clone()))?;
        let config = self.config();
        Ok(score_supplier(&self.portfolio, &self.index, position, &config))
    }

    pub fn director_risk_breakdown(
        &self,
        id: &DirectorId,
    ) -> Result<DirectorRiskBreakdown, RiskEngineError> {
        let position = self
            .index
            .director_position(id)
            .ok_or_else(|| RiskEngineError::DirectorNotFound(id.clone()))?;
        let config = self.config();
        Ok(score_director(&self.portfolio, &self.index, position, &config))
    }

    /// Scores every supplier, then every director, against one configuration snapshot.
    pub fn calculate_all_risk_scores(&self) -> Vec<RiskScoreEntry> {
        let config = self.config();

        let suppliers = self.supplier_positions().map(|position| {
            let breakdown = score_supplier(&self.portfolio, &self.index, position, &config);
            RiskScoreEntry::new(
                EntityKind::Supplier(breakdown.supplier_id),
                breakdown.final_score,
            )
        });
        let directors = self.director_positions().map(|position| {
            let breakdown = score_director(&self.portfolio, &self.index, position, &config);
            RiskScoreEntry::new(
                EntityKind::Director(breakdown.director_id),
                breakdown.final_score,
            )
        });

        suppliers.chain(directors).collect()
    }

    pub fn concentration_risks(&self) -> ConcentrationReport {
        let config = self.config();

        let mut directors: Vec<DirectorConcentration> = self
            .director_positions()
            .filter(|position| {
                self.portfolio.directors[*position].board_count()
                    >= CONCENTRATION_REPORT_MIN_BOARDS
            })
            .map(|position| {
                let director = &self.portfolio.directors[position];
                DirectorConcentration {
                    id: director.id.clone(),
                    board_count: director.board_count(),
                    risk_score: score_director(&self.portfolio, &self.index, position, &config)
                        .final_score,
                }
            })
            .collect();

        let mut suppliers: Vec<SupplierConcentration> = self
            .supplier_positions()
            .filter_map(|position| {
                let supplier = &self.portfolio.suppliers[position];
                let shared_director_count = self
                    .index
                    .shared_directors(position, &supplier.director_ids)
                    .count();
                if shared_director_count == 0 {
                    return None;
                }
                Some(SupplierConcentration {
                    id: supplier.id.clone(),
                    shared_director_count,
                    risk_score: score_supplier(&self.portfolio, &self.index, position, &config)
                        .final_score,
                })
            })
            .collect();

        directors.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
        suppliers.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));

        ConcentrationReport {
            directors,
            suppliers,
        }
    }

    /// Positions of suppliers the index resolves to, skipping duplicate ids.
    fn supplier_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.portfolio
            .suppliers
            .iter()
            .enumerate()
            .filter(|(position, supplier)| {
                self.index.supplier_position(&supplier.id) == Some(*position)
            })
            .map(|(position, _)| position)
    }

    fn director_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.portfolio
            .directors
            .iter()
            .enumerate()
            .filter(|(position, director)| {
                self.index.director_position(&director.id) == Some(*position)
            })
            .map(|(position, _)| position)
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
