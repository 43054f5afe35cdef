use serde::Serialize;
use tracing::debug;

use super::calculators::{
    calculate_base_risk, calculate_concentration_penalty, calculate_contract_value_multiplier,
    calculate_personal_history, finalize_score,
};
use super::config::RiskScoringConfig;
use super::domain::{DirectorId, Portfolio, RiskLevel, SupplierId};
use super::network::{calculate_network_effect, NetworkEffect, RelationshipIndex};

/// Per-director contribution to a supplier score, kept for audit trails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorAdjustment {
    pub director_id: DirectorId,
    pub board_count: usize,
    pub concentration_penalty: f64,
    pub adverse_media_penalty: f64,
    pub compliance_penalty: f64,
    pub experience_adjustment: f64,
}

/// Every intermediate value used to reach a supplier score, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierRiskBreakdown {
    pub supplier_id: SupplierId,
    pub base_risk: f64,
    pub geographic_multiplier: f64,
    pub contract_value_multiplier: f64,
    pub concentration_penalty: f64,
    pub network_effect: NetworkEffect,
    pub personal_history_penalty: f64,
    pub director_adjustments: Vec<DirectorAdjustment>,
    pub unclamped_score: f64,
    pub final_score: u8,
    pub risk_level: RiskLevel,
}

pub(crate) fn score_supplier(
    portfolio: &Portfolio,
    index: &RelationshipIndex,
    position: usize,
    config: &RiskScoringConfig,
) -> SupplierRiskBreakdown {
    let supplier = &portfolio.suppliers[position];

    let base_risk = calculate_base_risk(&supplier.base_risk_factors, &config.base_risk_weights);
    let geographic_multiplier = config
        .geographic_multipliers
        .for_tier(supplier.geographic_risk);
    let contract_value_multiplier =
        calculate_contract_value_multiplier(supplier.contract_value_zar, config);

    // Unresolvable director ids are reported by the index and skipped here.
    let directors: Vec<_> = supplier
        .director_ids
        .iter()
        .filter_map(|id| index.director_position(id))
        .map(|director_position| &portfolio.directors[director_position])
        .collect();

    let director_adjustments: Vec<DirectorAdjustment> = directors
        .iter()
        .map(|director| {
            let history = calculate_personal_history(director, config);
            DirectorAdjustment {
                director_id: director.id.clone(),
                board_count: director.board_count(),
                concentration_penalty: calculate_concentration_penalty(
                    director.board_count(),
                    config,
                ),
                adverse_media_penalty: history.adverse_media,
                compliance_penalty: history.compliance,
                experience_adjustment: history.experience,
            }
        })
        .collect();

    let mut score = base_risk;
    score *= geographic_multiplier;
    score *= contract_value_multiplier;

    let concentration_penalty: f64 = director_adjustments
        .iter()
        .map(|adjustment| adjustment.concentration_penalty)
        .sum();
    score += concentration_penalty;

    let network_effect = calculate_network_effect(portfolio, index, position, config);
    score *= network_effect.multiplier;

    let personal_history_penalty: f64 = director_adjustments
        .iter()
        .map(|adjustment| {
            adjustment.adverse_media_penalty
                + adjustment.compliance_penalty
                + adjustment.experience_adjustment
        })
        .sum();
    score += personal_history_penalty;

    let final_score = finalize_score(score);
    debug!(
        supplier = %supplier.id,
        base_risk,
        unclamped = score,
        final_score,
        "scored supplier"
    );

    SupplierRiskBreakdown {
        supplier_id: supplier.id.clone(),
        base_risk,
        geographic_multiplier,
        contract_value_multiplier,
        concentration_penalty,
        network_effect,
        personal_history_penalty,
        director_adjustments,
        unclamped_score: score,
        final_score,
        risk_level: RiskLevel::from_score(final_score),
    }
}
