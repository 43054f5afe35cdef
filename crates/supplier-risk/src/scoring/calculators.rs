use super::config::{BaseRiskWeights, RiskScoringConfig};
use super::domain::{DirectorRiskProfile, RiskFactors};

/// Years of experience beyond this earn no further bonus.
pub const EXPERIENCE_CAP_YEARS: u32 = 10;

pub fn calculate_base_risk(factors: &RiskFactors, weights: &BaseRiskWeights) -> f64 {
    factors.operational * weights.operational
        + factors.financial * weights.financial
        + factors.compliance * weights.compliance
        + factors.reputational * weights.reputational
        + factors.contractual * weights.contractual
}

pub fn calculate_concentration_penalty(board_count: usize, config: &RiskScoringConfig) -> f64 {
    let penalties = &config.concentration_penalties;
    match board_count {
        0 | 1 => 0.0,
        2 => penalties.two_boards,
        3 => penalties.three_boards,
        _ => penalties.four_plus_boards,
    }
}

/// Cutoffs are exclusive: a value equal to a cutoff stays in the lower tier.
pub fn calculate_contract_value_multiplier(value: f64, config: &RiskScoringConfig) -> f64 {
    let network = &config.network_effects;
    let thresholds = &network.contract_value_thresholds;
    let multipliers = &network.contract_value_multipliers;

    if value > thresholds.high {
        multipliers.high
    } else if value > thresholds.medium {
        multipliers.medium
    } else {
        multipliers.low
    }
}

/// Personal-history terms contributed by a single director.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PersonalHistory {
    pub adverse_media: f64,
    pub compliance: f64,
    pub experience: f64,
}

impl PersonalHistory {
    pub fn total(&self) -> f64 {
        self.adverse_media + self.compliance + self.experience
    }
}

pub fn calculate_personal_history(
    director: &DirectorRiskProfile,
    config: &RiskScoringConfig,
) -> PersonalHistory {
    let factors = &config.director_risk_factors;
    let adverse_media = if director.has_adverse_media {
        factors.adverse_media_penalty
    } else {
        0.0
    };
    let capped_years = director.years_experience.min(EXPERIENCE_CAP_YEARS);

    PersonalHistory {
        adverse_media,
        compliance: factors
            .compliance_history_penalties
            .for_history(director.compliance_history),
        experience: f64::from(capped_years) * factors.experience_bonus,
    }
}

/// Clamps to 0-100 and rounds half away from zero.
pub fn finalize_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u8
}
