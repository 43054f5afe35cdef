use crate::scoring::{
    BaseRiskWeights, ConcentrationPenalties, ConfigValidationError, GeographicMultipliers,
    RiskScoringConfig, RiskScoringConfigPatch,
};

#[test]
fn default_configuration_is_valid() {
    let config = RiskScoringConfig::default();
    assert!(config.validate().is_ok());
    assert!((config.base_risk_weights.sum() - 1.0).abs() < 1e-9);
}

#[test]
fn rejects_weights_that_do_not_sum_to_one() {
    let mut config = RiskScoringConfig::default();
    config.base_risk_weights.operational = 0.15;

    match config.validate() {
        Err(ConfigValidationError::WeightsDoNotSumToOne { sum }) => {
            assert!((sum - 0.9).abs() < 1e-9)
        }
        other => panic!("expected weight sum rejection, got {other:?}"),
    }
}

#[test]
fn rejects_negative_weights() {
    let mut config = RiskScoringConfig::default();
    config.base_risk_weights.financial = -0.25;
    config.base_risk_weights.operational = 0.75;

    assert!(matches!(
        config.validate(),
        Err(ConfigValidationError::InvalidWeight {
            factor: "financial",
            ..
        })
    ));
}

#[test]
fn rejects_unordered_contract_thresholds() {
    let mut config = RiskScoringConfig::default();
    config.network_effects.contract_value_thresholds.medium = 80_000_000.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigValidationError::UnorderedThresholds { .. })
    ));
}

#[test]
fn rejects_decreasing_concentration_penalties() {
    let mut config = RiskScoringConfig::default();
    config.concentration_penalties = ConcentrationPenalties {
        two_boards: 10.0,
        three_boards: 5.0,
        four_plus_boards: 20.0,
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigValidationError::NonMonotonicPenalties { .. })
    ));
}

#[test]
fn rejects_non_positive_multipliers() {
    let mut config = RiskScoringConfig::default();
    config.geographic_multipliers.low = 0.0;

    match config.validate() {
        Err(ConfigValidationError::InvalidMultiplier { name, .. }) => {
            assert_eq!(name, "geographic_multipliers.low")
        }
        other => panic!("expected multiplier rejection, got {other:?}"),
    }
}

#[test]
fn merge_replaces_only_supplied_sections() {
    let current = RiskScoringConfig::default();
    let patch = RiskScoringConfigPatch {
        geographic_multipliers: Some(GeographicMultipliers {
            low: 1.0,
            medium: 1.2,
            high: 1.5,
        }),
        ..RiskScoringConfigPatch::default()
    };

    let merged = current.merge(patch);

    assert_eq!(merged.geographic_multipliers.high, 1.5);
    assert_eq!(merged.base_risk_weights, current.base_risk_weights);
    assert_eq!(merged.network_effects, current.network_effects);
    assert_eq!(merged.director_risk_factors, current.director_risk_factors);
}

#[test]
fn patch_deserializes_from_partial_json() {
    let patch: RiskScoringConfigPatch = serde_json::from_str(
        r#"{
            "base_risk_weights": {
                "operational": 0.2,
                "financial": 0.2,
                "compliance": 0.2,
                "reputational": 0.2,
                "contractual": 0.2
            }
        }"#,
    )
    .expect("partial patch parses");

    assert_eq!(
        patch.base_risk_weights,
        Some(BaseRiskWeights {
            operational: 0.2,
            financial: 0.2,
            compliance: 0.2,
            reputational: 0.2,
            contractual: 0.2,
        })
    );
    assert!(patch.network_effects.is_none());
    assert!(!patch.is_empty());
    assert!(RiskScoringConfigPatch::default().is_empty());
}

#[test]
fn configuration_round_trips_through_json() {
    let config = RiskScoringConfig::default();
    let raw = serde_json::to_string(&config).expect("config serializes");
    let parsed: RiskScoringConfig = serde_json::from_str(&raw).expect("config parses");
    assert_eq!(parsed, config);
}
