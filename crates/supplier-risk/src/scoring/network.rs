use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::config::RiskScoringConfig;
use super::domain::{DirectorId, Portfolio, SiteId, SupplierId};

/// Number of same-tier, site-sharing peers that must be exceeded before the geographic
/// concentration multiplier applies.
pub const GEOGRAPHIC_CLUSTER_THRESHOLD: usize = 2;

/// Inverted index over the supplier/director graph, built once per portfolio.
#[derive(Debug, Default)]
pub struct RelationshipIndex {
    supplier_positions: HashMap<SupplierId, usize>,
    director_positions: HashMap<DirectorId, usize>,
    suppliers_by_director: HashMap<DirectorId, Vec<usize>>,
    suppliers_by_site: HashMap<SiteId, Vec<usize>>,
    issues: Vec<IntegrityIssue>,
}

/// Relationship inconsistencies the engine tolerates but reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum IntegrityIssue {
    UnknownDirector {
        supplier: SupplierId,
        director: DirectorId,
    },
    UnknownSupplier {
        director: DirectorId,
        supplier: SupplierId,
    },
    MissingBoardPosition {
        supplier: SupplierId,
        director: DirectorId,
    },
    MissingDirectorLink {
        director: DirectorId,
        supplier: SupplierId,
    },
    DuplicateSupplierId {
        supplier: SupplierId,
    },
    DuplicateDirectorId {
        director: DirectorId,
    },
}

impl IntegrityIssue {
    pub fn describe(&self) -> String {
        match self {
            IntegrityIssue::UnknownDirector { supplier, director } => {
                format!("supplier {supplier} references unknown director {director}")
            }
            IntegrityIssue::UnknownSupplier { director, supplier } => {
                format!("director {director} holds a board position at unknown supplier {supplier}")
            }
            IntegrityIssue::MissingBoardPosition { supplier, director } => format!(
                "supplier {supplier} lists director {director} but the director has no board position there"
            ),
            IntegrityIssue::MissingDirectorLink { director, supplier } => format!(
                "director {director} sits on the board of {supplier} but the supplier does not list them"
            ),
            IntegrityIssue::DuplicateSupplierId { supplier } => {
                format!("supplier id {supplier} appears more than once; first record wins")
            }
            IntegrityIssue::DuplicateDirectorId { director } => {
                format!("director id {director} appears more than once; first record wins")
            }
        }
    }
}

impl RelationshipIndex {
    pub fn build(portfolio: &Portfolio) -> Self {
        let mut index = Self::default();

        for (position, supplier) in portfolio.suppliers.iter().enumerate() {
            if index.supplier_positions.contains_key(&supplier.id) {
                index.issues.push(IntegrityIssue::DuplicateSupplierId {
                    supplier: supplier.id.clone(),
                });
                continue;
            }
            index.supplier_positions.insert(supplier.id.clone(), position);

            for director in &supplier.director_ids {
                index
                    .suppliers_by_director
                    .entry(director.clone())
                    .or_default()
                    .push(position);
            }
            for site in &supplier.linked_site_ids {
                index
                    .suppliers_by_site
                    .entry(site.clone())
                    .or_default()
                    .push(position);
            }
        }

        for (position, director) in portfolio.directors.iter().enumerate() {
            if index.director_positions.contains_key(&director.id) {
                index.issues.push(IntegrityIssue::DuplicateDirectorId {
                    director: director.id.clone(),
                });
                continue;
            }
            index.director_positions.insert(director.id.clone(), position);
        }

        index.issues.extend(cross_check(portfolio, &index));
        index
    }

    pub fn supplier_position(&self, id: &SupplierId) -> Option<usize> {
        self.supplier_positions.get(id).copied()
    }

    pub fn director_position(&self, id: &DirectorId) -> Option<usize> {
        self.director_positions.get(id).copied()
    }

    pub fn issues(&self) -> &[IntegrityIssue] {
        &self.issues
    }

    /// Director ids of `supplier` that at least one other supplier also lists.
    pub fn shared_directors<'a>(
        &'a self,
        position: usize,
        director_ids: &'a BTreeSet<DirectorId>,
    ) -> impl Iterator<Item = &'a DirectorId> + 'a {
        director_ids.iter().filter(move |director| {
            self.suppliers_by_director
                .get(*director)
                .map(|positions| positions.iter().any(|other| *other != position))
                .unwrap_or(false)
        })
    }

    /// Other suppliers in the same geographic tier that share at least one linked site.
    pub fn geographic_cluster_size(&self, portfolio: &Portfolio, position: usize) -> usize {
        let supplier = &portfolio.suppliers[position];
        let peers: BTreeSet<usize> = supplier
            .linked_site_ids
            .iter()
            .filter_map(|site| self.suppliers_by_site.get(site))
            .flatten()
            .copied()
            .filter(|other| *other != position)
            .filter(|other| portfolio.suppliers[*other].geographic_risk == supplier.geographic_risk)
            .collect();
        peers.len()
    }
}

fn cross_check(portfolio: &Portfolio, index: &RelationshipIndex) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    for (position, supplier) in portfolio.suppliers.iter().enumerate() {
        if index.supplier_position(&supplier.id) != Some(position) {
            continue;
        }
        for director_id in &supplier.director_ids {
            match index.director_position(director_id) {
                None => issues.push(IntegrityIssue::UnknownDirector {
                    supplier: supplier.id.clone(),
                    director: director_id.clone(),
                }),
                Some(director_position) => {
                    let director = &portfolio.directors[director_position];
                    if !director.board_positions.contains(&supplier.id) {
                        issues.push(IntegrityIssue::MissingBoardPosition {
                            supplier: supplier.id.clone(),
                            director: director_id.clone(),
                        });
                    }
                }
            }
        }
    }

    for (position, director) in portfolio.directors.iter().enumerate() {
        if index.director_position(&director.id) != Some(position) {
            continue;
        }
        for supplier_id in &director.board_positions {
            match index.supplier_position(supplier_id) {
                None => issues.push(IntegrityIssue::UnknownSupplier {
                    director: director.id.clone(),
                    supplier: supplier_id.clone(),
                }),
                Some(supplier_position) => {
                    let supplier = &portfolio.suppliers[supplier_position];
                    if !supplier.director_ids.contains(&director.id) {
                        issues.push(IntegrityIssue::MissingDirectorLink {
                            director: director.id.clone(),
                            supplier: supplier_id.clone(),
                        });
                    }
                }
            }
        }
    }

    issues
}

/// Multiplier reflecting shared-director and site clustering for one supplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetworkEffect {
    pub shared_director: bool,
    pub geographic_cluster_size: usize,
    pub multiplier: f64,
}

pub fn calculate_network_effect(
    portfolio: &Portfolio,
    index: &RelationshipIndex,
    position: usize,
    config: &RiskScoringConfig,
) -> NetworkEffect {
    let supplier = &portfolio.suppliers[position];
    let network = &config.network_effects;
    let mut multiplier = 1.0;

    let shared_director = index
        .shared_directors(position, &supplier.director_ids)
        .next()
        .is_some();
    if shared_director {
        multiplier *= network.shared_director_multiplier;
    }

    let geographic_cluster_size = index.geographic_cluster_size(portfolio, position);
    if geographic_cluster_size > GEOGRAPHIC_CLUSTER_THRESHOLD {
        multiplier *= network.geographic_concentration_multiplier;
    }

    NetworkEffect {
        shared_director,
        geographic_cluster_size,
        multiplier,
    }
}
