use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for supplier records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub String);

/// Identifier wrapper for director records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectorId(pub String);

/// Identifier for an operational site; only compared, never resolved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(pub String);

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for DirectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SupplierId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for DirectorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for SiteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The five named inputs blended into a base risk. Intended range is 0-100 but unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskFactors {
    pub operational: f64,
    pub financial: f64,
    pub compliance: f64,
    pub reputational: f64,
    pub contractual: f64,
}

/// Regional exposure tier attached to every supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeographicRisk {
    Low,
    Medium,
    High,
}

impl GeographicRisk {
    pub fn label(&self) -> &'static str {
        match self {
            GeographicRisk::Low => "low",
            GeographicRisk::Medium => "medium",
            GeographicRisk::High => "high",
        }
    }
}

/// Regulatory track record of a director.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceHistory {
    Clean,
    Minor,
    Major,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRiskProfile {
    pub id: SupplierId,
    pub base_risk_factors: RiskFactors,
    pub contract_value_zar: f64,
    #[serde(default)]
    pub director_ids: BTreeSet<DirectorId>,
    pub category: String,
    pub geographic_risk: GeographicRisk,
    #[serde(default)]
    pub linked_site_ids: BTreeSet<SiteId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorRiskProfile {
    pub id: DirectorId,
    /// Suppliers whose board this director sits on, in appointment order.
    #[serde(default)]
    pub board_positions: Vec<SupplierId>,
    pub years_experience: u32,
    pub has_adverse_media: bool,
    pub compliance_history: ComplianceHistory,
}

impl DirectorRiskProfile {
    pub fn board_count(&self) -> usize {
        self.board_positions.len()
    }
}

/// Complete input set for one engine instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub suppliers: Vec<SupplierRiskProfile>,
    #[serde(default)]
    pub directors: Vec<DirectorRiskProfile>,
}

/// Tags batch output with the kind of record it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityKind {
    Supplier(SupplierId),
    Director(DirectorId),
}

impl EntityKind {
    pub fn id(&self) -> &str {
        match self {
            EntityKind::Supplier(id) => &id.0,
            EntityKind::Director(id) => &id.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Supplier(_) => "supplier",
            EntityKind::Director(_) => "director",
        }
    }
}

/// Four-tier classification of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => RiskLevel::Critical,
            50..=74 => RiskLevel::High,
            25..=49 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
