use serde::Serialize;
use tracing::{debug, warn};

use super::calculators::{
    calculate_base_risk, calculate_concentration_penalty, calculate_contract_value_multiplier,
    calculate_personal_history, finalize_score,
};
use super::config::RiskScoringConfig;
use super::domain::{DirectorId, GeographicRisk, Portfolio, RiskLevel};
use super::network::RelationshipIndex;

/// Suppliers whose base risk exceeds this count toward board amplification.
pub const HIGH_RISK_BASE_THRESHOLD: f64 = 60.0;
/// Added per high-risk supplier beyond the first.
pub const HIGH_RISK_AMPLIFICATION_STEP: f64 = 0.15;
/// Applied when every associated supplier sits in a high-risk region.
pub const HIGH_GEOGRAPHY_MULTIPLIER: f64 = 1.1;

/// Every intermediate value used to reach a director score, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorRiskBreakdown {
    pub director_id: DirectorId,
    pub associated_suppliers: usize,
    pub average_base_risk: f64,
    pub board_count: usize,
    pub concentration_penalty: f64,
    pub high_risk_suppliers: usize,
    pub amplification_multiplier: f64,
    pub total_contract_value_zar: f64,
    pub contract_value_multiplier: f64,
    pub personal_history_penalty: f64,
    pub geographic_multiplier: f64,
    pub unclamped_score: f64,
    pub final_score: u8,
    pub risk_level: RiskLevel,
}

pub(crate) fn score_director(
    portfolio: &Portfolio,
    index: &RelationshipIndex,
    position: usize,
    config: &RiskScoringConfig,
) -> DirectorRiskBreakdown {
    let director = &portfolio.directors[position];

    let suppliers: Vec<_> = director
        .board_positions
        .iter()
        .filter_map(|id| index.supplier_position(id))
        .map(|supplier_position| &portfolio.suppliers[supplier_position])
        .collect();

    let base_risks: Vec<f64> = suppliers
        .iter()
        .map(|supplier| {
            calculate_base_risk(&supplier.base_risk_factors, &config.base_risk_weights)
        })
        .collect();

    let average_base_risk = if base_risks.is_empty() {
        warn!(
            director = %director.id,
            "director has no resolvable suppliers; averaging base risk as zero"
        );
        0.0
    } else {
        base_risks.iter().sum::<f64>() / base_risks.len() as f64
    };

    let mut score = average_base_risk;

    let board_count = director.board_count();
    let concentration_penalty = calculate_concentration_penalty(board_count, config);
    score += concentration_penalty;

    let high_risk_suppliers = base_risks
        .iter()
        .filter(|risk| **risk > HIGH_RISK_BASE_THRESHOLD)
        .count();
    let amplification_multiplier = if high_risk_suppliers > 1 {
        1.0 + (high_risk_suppliers - 1) as f64 * HIGH_RISK_AMPLIFICATION_STEP
    } else {
        1.0
    };
    score *= amplification_multiplier;

    let total_contract_value_zar: f64 = suppliers
        .iter()
        .map(|supplier| supplier.contract_value_zar)
        .sum();
    let contract_value_multiplier =
        calculate_contract_value_multiplier(total_contract_value_zar, config);
    score *= contract_value_multiplier;

    let personal_history_penalty = calculate_personal_history(director, config).total();
    score += personal_history_penalty;

    let all_high_geography = match suppliers.split_first() {
        Some((first, rest)) => {
            first.geographic_risk == GeographicRisk::High
                && rest
                    .iter()
                    .all(|supplier| supplier.geographic_risk == first.geographic_risk)
        }
        None => false,
    };
    let geographic_multiplier = if all_high_geography {
        HIGH_GEOGRAPHY_MULTIPLIER
    } else {
        1.0
    };
    score *= geographic_multiplier;

    let final_score = finalize_score(score);
    debug!(
        director = %director.id,
        average_base_risk,
        unclamped = score,
        final_score,
        "scored director"
    );

    DirectorRiskBreakdown {
        director_id: director.id.clone(),
        associated_suppliers: suppliers.len(),
        average_base_risk,
        board_count,
        concentration_penalty,
        high_risk_suppliers,
        amplification_multiplier,
        total_contract_value_zar,
        contract_value_multiplier,
        personal_history_penalty,
        geographic_multiplier,
        unclamped_score: score,
        final_score,
        risk_level: RiskLevel::from_score(final_score),
    }
}
