use std::collections::BTreeSet;

use crate::scoring::domain::{
    ComplianceHistory, DirectorId, DirectorRiskProfile, GeographicRisk, Portfolio, RiskFactors,
    SiteId, SupplierId, SupplierRiskProfile,
};
use crate::scoring::network::RelationshipIndex;
use crate::scoring::RiskScoringConfig;

pub(super) fn factors(
    operational: f64,
    financial: f64,
    compliance: f64,
    reputational: f64,
    contractual: f64,
) -> RiskFactors {
    RiskFactors {
        operational,
        financial,
        compliance,
        reputational,
        contractual,
    }
}

pub(super) fn uniform_factors(value: f64) -> RiskFactors {
    factors(value, value, value, value, value)
}

pub(super) fn supplier(
    id: &str,
    base_risk_factors: RiskFactors,
    contract_value_zar: f64,
    geographic_risk: GeographicRisk,
    directors: &[&str],
    sites: &[&str],
) -> SupplierRiskProfile {
    SupplierRiskProfile {
        id: SupplierId::from(id),
        base_risk_factors,
        contract_value_zar,
        director_ids: directors.iter().map(|id| DirectorId::from(*id)).collect(),
        category: "Mining Services".to_string(),
        geographic_risk,
        linked_site_ids: sites.iter().map(|id| SiteId::from(*id)).collect::<BTreeSet<_>>(),
    }
}

pub(super) fn director(
    id: &str,
    boards: &[&str],
    years_experience: u32,
    has_adverse_media: bool,
    compliance_history: ComplianceHistory,
) -> DirectorRiskProfile {
    DirectorRiskProfile {
        id: DirectorId::from(id),
        board_positions: boards.iter().map(|id| SupplierId::from(*id)).collect(),
        years_experience,
        has_adverse_media,
        compliance_history,
    }
}

pub(super) fn config() -> RiskScoringConfig {
    RiskScoringConfig::default()
}

pub(super) fn indexed(portfolio: &Portfolio) -> RelationshipIndex {
    RelationshipIndex::build(portfolio)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// High-risk supplier in a crowded high-risk region with two heavily connected directors.
pub(super) fn clustered_portfolio() -> Portfolio {
    Portfolio {
        suppliers: vec![
            supplier(
                "SUP-A",
                factors(90.0, 65.0, 85.0, 70.0, 60.0),
                50_000_000.0,
                GeographicRisk::High,
                &["DIR-1", "DIR-2"],
                &["SITE-NORTH"],
            ),
            supplier(
                "SUP-X1",
                uniform_factors(55.0),
                8_000_000.0,
                GeographicRisk::High,
                &["DIR-1", "DIR-2"],
                &["SITE-NORTH"],
            ),
            supplier(
                "SUP-X2",
                uniform_factors(62.0),
                12_000_000.0,
                GeographicRisk::High,
                &["DIR-2"],
                &["SITE-NORTH"],
            ),
            supplier(
                "SUP-X3",
                uniform_factors(48.0),
                3_000_000.0,
                GeographicRisk::High,
                &["DIR-2"],
                &["SITE-NORTH", "SITE-EAST"],
            ),
        ],
        directors: vec![
            director(
                "DIR-1",
                &["SUP-A", "SUP-X1"],
                8,
                true,
                ComplianceHistory::Minor,
            ),
            director(
                "DIR-2",
                &["SUP-A", "SUP-X1", "SUP-X2", "SUP-X3"],
                8,
                true,
                ComplianceHistory::Minor,
            ),
        ],
    }
}

/// Mid-range supplier with a single clean, single-board director.
pub(super) fn isolated_portfolio() -> Portfolio {
    Portfolio {
        suppliers: vec![supplier(
            "SUP-B",
            factors(40.0, 35.0, 30.0, 25.0, 35.0),
            22_000_000.0,
            GeographicRisk::Medium,
            &["DIR-B"],
            &["SITE-WEST"],
        )],
        directors: vec![director(
            "DIR-B",
            &["SUP-B"],
            6,
            false,
            ComplianceHistory::Clean,
        )],
    }
}

/// Low-range supplier sharing one experienced two-board director with a peer.
pub(super) fn shared_director_portfolio() -> Portfolio {
    Portfolio {
        suppliers: vec![
            supplier(
                "SUP-C",
                factors(20.0, 25.0, 30.0, 15.0, 20.0),
                15_000_000.0,
                GeographicRisk::Low,
                &["DIR-C"],
                &["SITE-SOUTH"],
            ),
            supplier(
                "SUP-C2",
                uniform_factors(40.0),
                5_000_000.0,
                GeographicRisk::Medium,
                &["DIR-C"],
                &["SITE-CENTRAL"],
            ),
        ],
        directors: vec![director(
            "DIR-C",
            &["SUP-C", "SUP-C2"],
            14,
            false,
            ComplianceHistory::Clean,
        )],
    }
}
