use serde::{Deserialize, Serialize};

use super::domain::{ComplianceHistory, GeographicRisk};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights applied to each named risk factor. Expected to sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseRiskWeights {
    pub operational: f64,
    pub financial: f64,
    pub compliance: f64,
    pub reputational: f64,
    pub contractual: f64,
}

impl BaseRiskWeights {
    pub fn sum(&self) -> f64 {
        self.operational + self.financial + self.compliance + self.reputational + self.contractual
    }

    fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("operational", self.operational),
            ("financial", self.financial),
            ("compliance", self.compliance),
            ("reputational", self.reputational),
            ("contractual", self.contractual),
        ]
    }
}

/// Additive penalties keyed by how many boards a director sits on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationPenalties {
    pub two_boards: f64,
    pub three_boards: f64,
    pub four_plus_boards: f64,
}

/// Contract value cutoffs in ZAR. Only `medium` and `high` drive the tier lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractValueThresholds {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierMultipliers {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkEffectsConfig {
    pub shared_director_multiplier: f64,
    pub geographic_concentration_multiplier: f64,
    pub contract_value_thresholds: ContractValueThresholds,
    pub contract_value_multipliers: TierMultipliers,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicMultipliers {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl GeographicMultipliers {
    pub fn for_tier(&self, tier: GeographicRisk) -> f64 {
        match tier {
            GeographicRisk::Low => self.low,
            GeographicRisk::Medium => self.medium,
            GeographicRisk::High => self.high,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceHistoryPenalties {
    pub clean: f64,
    pub minor: f64,
    pub major: f64,
}

impl ComplianceHistoryPenalties {
    pub fn for_history(&self, history: ComplianceHistory) -> f64 {
        match history {
            ComplianceHistory::Clean => self.clean,
            ComplianceHistory::Minor => self.minor,
            ComplianceHistory::Major => self.major,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectorRiskFactors {
    pub adverse_media_penalty: f64,
    pub compliance_history_penalties: ComplianceHistoryPenalties,
    /// Applied per year of experience up to the cap; negative values reduce risk.
    pub experience_bonus: f64,
}

/// Full parameter table consumed by every scoring formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScoringConfig {
    pub base_risk_weights: BaseRiskWeights,
    pub concentration_penalties: ConcentrationPenalties,
    pub network_effects: NetworkEffectsConfig,
    pub geographic_multipliers: GeographicMultipliers,
    pub director_risk_factors: DirectorRiskFactors,
}

impl Default for RiskScoringConfig {
    fn default() -> Self {
        Self {
            base_risk_weights: BaseRiskWeights {
                operational: 0.25,
                financial: 0.25,
                compliance: 0.20,
                reputational: 0.15,
                contractual: 0.15,
            },
            concentration_penalties: ConcentrationPenalties {
                two_boards: 5.0,
                three_boards: 10.0,
                four_plus_boards: 20.0,
            },
            network_effects: NetworkEffectsConfig {
                shared_director_multiplier: 1.15,
                geographic_concentration_multiplier: 1.1,
                contract_value_thresholds: ContractValueThresholds {
                    low: 5_000_000.0,
                    medium: 25_000_000.0,
                    high: 50_000_000.0,
                },
                contract_value_multipliers: TierMultipliers {
                    low: 1.0,
                    medium: 1.2,
                    high: 1.5,
                },
            },
            geographic_multipliers: GeographicMultipliers {
                low: 0.9,
                medium: 1.0,
                high: 1.3,
            },
            director_risk_factors: DirectorRiskFactors {
                adverse_media_penalty: 15.0,
                compliance_history_penalties: ComplianceHistoryPenalties {
                    clean: 0.0,
                    minor: 5.0,
                    major: 15.0,
                },
                experience_bonus: -0.3,
            },
        }
    }
}

impl RiskScoringConfig {
    /// Rejects tables that would silently skew scores.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (name, weight) in self.base_risk_weights.entries() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigValidationError::InvalidWeight {
                    factor: name,
                    value: weight,
                });
            }
        }

        let sum = self.base_risk_weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigValidationError::WeightsDoNotSumToOne { sum });
        }

        let penalties = &self.concentration_penalties;
        let tiers = [
            penalties.two_boards,
            penalties.three_boards,
            penalties.four_plus_boards,
        ];
        if tiers.iter().any(|value| !value.is_finite() || *value < 0.0)
            || tiers.windows(2).any(|pair| pair[0] > pair[1])
        {
            return Err(ConfigValidationError::NonMonotonicPenalties {
                two_boards: penalties.two_boards,
                three_boards: penalties.three_boards,
                four_plus_boards: penalties.four_plus_boards,
            });
        }

        let thresholds = &self.network_effects.contract_value_thresholds;
        let ordered = [thresholds.low, thresholds.medium, thresholds.high];
        if ordered.iter().any(|value| !value.is_finite())
            || ordered.windows(2).any(|pair| pair[0] > pair[1])
        {
            return Err(ConfigValidationError::UnorderedThresholds {
                low: thresholds.low,
                medium: thresholds.medium,
                high: thresholds.high,
            });
        }

        let network = &self.network_effects;
        let geographic = &self.geographic_multipliers;
        let multipliers = [
            (
                "shared_director_multiplier",
                network.shared_director_multiplier,
            ),
            (
                "geographic_concentration_multiplier",
                network.geographic_concentration_multiplier,
            ),
            (
                "contract_value_multipliers.low",
                network.contract_value_multipliers.low,
            ),
            (
                "contract_value_multipliers.medium",
                network.contract_value_multipliers.medium,
            ),
            (
                "contract_value_multipliers.high",
                network.contract_value_multipliers.high,
            ),
            ("geographic_multipliers.low", geographic.low),
            ("geographic_multipliers.medium", geographic.medium),
            ("geographic_multipliers.high", geographic.high),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigValidationError::InvalidMultiplier { name, value });
            }
        }

        let director = &self.director_risk_factors;
        let history = &director.compliance_history_penalties;
        let penalties = [
            ("adverse_media_penalty", director.adverse_media_penalty),
            ("compliance_history_penalties.clean", history.clean),
            ("compliance_history_penalties.minor", history.minor),
            ("compliance_history_penalties.major", history.major),
            ("experience_bonus", director.experience_bonus),
        ];
        for (name, value) in penalties {
            if !value.is_finite() {
                return Err(ConfigValidationError::NonFinitePenalty { name, value });
            }
        }

        Ok(())
    }

    /// Shallow merge: every section present in the patch replaces the current one wholesale.
    pub fn merge(&self, patch: RiskScoringConfigPatch) -> Self {
        Self {
            base_risk_weights: patch.base_risk_weights.unwrap_or(self.base_risk_weights),
            concentration_penalties: patch
                .concentration_penalties
                .unwrap_or(self.concentration_penalties),
            network_effects: patch.network_effects.unwrap_or(self.network_effects),
            geographic_multipliers: patch
                .geographic_multipliers
                .unwrap_or(self.geographic_multipliers),
            director_risk_factors: patch
                .director_risk_factors
                .unwrap_or(self.director_risk_factors),
        }
    }
}

/// Partial configuration accepted by `RiskEngine::update_config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskScoringConfigPatch {
    pub base_risk_weights: Option<BaseRiskWeights>,
    pub concentration_penalties: Option<ConcentrationPenalties>,
    pub network_effects: Option<NetworkEffectsConfig>,
    pub geographic_multipliers: Option<GeographicMultipliers>,
    pub director_risk_factors: Option<DirectorRiskFactors>,
}

impl RiskScoringConfigPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("weight for {factor} must be a finite, non-negative number (got {value})")]
    InvalidWeight { factor: &'static str, value: f64 },
    #[error("base risk weights must sum to 1.0 (got {sum:.6})")]
    WeightsDoNotSumToOne { sum: f64 },
    #[error(
        "concentration penalties must be non-negative and non-decreasing \
         (2 boards {two_boards}, 3 boards {three_boards}, 4+ boards {four_plus_boards})"
    )]
    NonMonotonicPenalties {
        two_boards: f64,
        three_boards: f64,
        four_plus_boards: f64,
    },
    #[error("contract value thresholds must be ordered low <= medium <= high ({low}, {medium}, {high})")]
    UnorderedThresholds { low: f64, medium: f64, high: f64 },
    #[error("{name} must be a finite, positive multiplier (got {value})")]
    InvalidMultiplier { name: &'static str, value: f64 },
    #[error("{name} must be finite (got {value})")]
    NonFinitePenalty { name: &'static str, value: f64 },
}
