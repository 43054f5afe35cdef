use super::common::*;
use crate::scoring::domain::{ComplianceHistory, GeographicRisk, Portfolio, RiskLevel};
use crate::scoring::supplier::score_supplier;

fn score_first(portfolio: &Portfolio) -> crate::scoring::SupplierRiskBreakdown {
    let index = indexed(portfolio);
    score_supplier(portfolio, &index, 0, &config())
}

#[test]
fn clustered_high_risk_supplier_clamps_to_critical() {
    let breakdown = score_first(&clustered_portfolio());

    assert!(
        breakdown.unclamped_score > 150.0,
        "unclamped score {} should exceed 150",
        breakdown.unclamped_score
    );
    assert_eq!(breakdown.final_score, 100);
    assert_eq!(breakdown.risk_level, RiskLevel::Critical);
}

#[test]
fn isolated_mid_range_supplier_scores_without_clamping() {
    let breakdown = score_first(&isolated_portfolio());

    assert_close(breakdown.base_risk, 33.75);
    assert_eq!(breakdown.geographic_multiplier, 1.0);
    assert_eq!(breakdown.contract_value_multiplier, 1.0);
    assert_eq!(breakdown.concentration_penalty, 0.0);
    assert_eq!(breakdown.network_effect.multiplier, 1.0);
    assert_close(breakdown.personal_history_penalty, -1.8);
    assert_eq!(breakdown.final_score, 32);
    assert_eq!(breakdown.risk_level, RiskLevel::Medium);
}

#[test]
fn shared_director_supplier_lands_just_above_medium_boundary() {
    let breakdown = score_first(&shared_director_portfolio());

    assert_close(breakdown.base_risk, 22.5);
    assert_eq!(breakdown.geographic_multiplier, 0.9);
    assert_eq!(breakdown.concentration_penalty, 5.0);
    assert!(breakdown.network_effect.shared_director);
    assert_eq!(breakdown.network_effect.geographic_cluster_size, 0);
    assert_close(breakdown.personal_history_penalty, -3.0);
    assert_eq!(breakdown.final_score, 26);
    assert_eq!(breakdown.risk_level, RiskLevel::Medium);
}

#[test]
fn concentration_penalties_are_summed_across_directors() {
    let breakdown = score_first(&clustered_portfolio());

    assert_eq!(breakdown.director_adjustments.len(), 2);
    assert_eq!(breakdown.concentration_penalty, 25.0);
    let boards: Vec<usize> = breakdown
        .director_adjustments
        .iter()
        .map(|adjustment| adjustment.board_count)
        .collect();
    assert_eq!(boards, vec![2, 4]);
}

#[test]
fn penalties_are_added_after_multipliers_in_order() {
    let breakdown = score_first(&clustered_portfolio());

    let expected = (breakdown.base_risk
        * breakdown.geographic_multiplier
        * breakdown.contract_value_multiplier
        + breakdown.concentration_penalty)
        * breakdown.network_effect.multiplier
        + breakdown.personal_history_penalty;
    assert_close(breakdown.unclamped_score, expected);
}

#[test]
fn dangling_director_ids_are_skipped() {
    let mut portfolio = isolated_portfolio();
    let baseline = score_first(&portfolio).final_score;

    portfolio.suppliers[0]
        .director_ids
        .insert("DIR-GHOST".into());
    let breakdown = score_first(&portfolio);

    assert_eq!(breakdown.director_adjustments.len(), 1);
    assert_eq!(breakdown.final_score, baseline);
}

#[test]
fn supplier_without_directors_scores_on_factors_alone() {
    let portfolio = Portfolio {
        suppliers: vec![supplier(
            "SUP-SOLO",
            uniform_factors(60.0),
            60_000_000.0,
            GeographicRisk::High,
            &[],
            &[],
        )],
        directors: Vec::new(),
    };

    let breakdown = score_first(&portfolio);

    // 60 * 1.3 * 1.5
    assert_close(breakdown.unclamped_score, 117.0);
    assert_eq!(breakdown.final_score, 100);
}

#[test]
fn scores_stay_within_bounds_for_extreme_inputs() {
    for value in [-500.0, -1.0, 0.0, 17.5, 63.0, 100.0, 1_000.0] {
        let portfolio = Portfolio {
            suppliers: vec![supplier(
                "SUP-EDGE",
                uniform_factors(value),
                90_000_000.0,
                GeographicRisk::High,
                &["DIR-EDGE"],
                &[],
            )],
            directors: vec![director(
                "DIR-EDGE",
                &["SUP-EDGE"],
                30,
                true,
                ComplianceHistory::Major,
            )],
        };
        let breakdown = score_first(&portfolio);
        assert!(breakdown.final_score <= 100);
        if value <= -100.0 {
            assert_eq!(breakdown.final_score, 0);
        }
    }
}

#[test]
fn raising_any_factor_never_lowers_the_score() {
    let base = isolated_portfolio();
    for factor in 0..5 {
        let mut previous = 0u8;
        for step in 0..=20 {
            let mut portfolio = base.clone();
            let value = f64::from(step) * 5.0;
            let factors = &mut portfolio.suppliers[0].base_risk_factors;
            match factor {
                0 => factors.operational = value,
                1 => factors.financial = value,
                2 => factors.compliance = value,
                3 => factors.reputational = value,
                _ => factors.contractual = value,
            }
            let score = score_first(&portfolio).final_score;
            assert!(
                score >= previous,
                "factor {factor} at {value} dropped score from {previous} to {score}"
            );
            previous = score;
        }
    }
}
