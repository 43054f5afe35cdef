//! Supplier and director risk scoring.
//!
//! Pure calculators live in `calculators`, graph-aware effects in `network`, and the
//! per-entity formulas in `supplier` and `director`. `RiskEngine` ties them to a portfolio
//! and the current configuration snapshot.

pub mod calculators;
pub mod config;
mod director;
pub mod domain;
mod engine;
pub mod network;
pub mod report;
mod supplier;

#[cfg(test)]
mod tests;

pub use config::{
    BaseRiskWeights, ComplianceHistoryPenalties, ConcentrationPenalties, ConfigValidationError,
    ContractValueThresholds, DirectorRiskFactors, GeographicMultipliers, NetworkEffectsConfig,
    RiskScoringConfig, RiskScoringConfigPatch, TierMultipliers,
};
pub use director::DirectorRiskBreakdown;
pub use domain::{
    ComplianceHistory, DirectorId, DirectorRiskProfile, EntityKind, GeographicRisk, Portfolio,
    RiskFactors, RiskLevel, SiteId, SupplierId, SupplierRiskProfile,
};
pub use engine::{RiskEngine, RiskEngineError, CONCENTRATION_REPORT_MIN_BOARDS};
pub use network::{IntegrityIssue, NetworkEffect};
pub use report::{ConcentrationReport, DirectorConcentration, RiskScoreEntry, SupplierConcentration};
pub use supplier::{DirectorAdjustment, SupplierRiskBreakdown};
