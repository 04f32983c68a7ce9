// src/state.rs

use crate::catalog::{CatalogError, LeadStore};
use crate::domain::dashboard::DashboardData;
use crate::domain::listing::Listing;
use crate::domain::proposal::ProposalBox;
use crate::mock;

/// Read-only data shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub leads: LeadStore,
    pub listings: Vec<Listing>,
    pub proposals: ProposalBox,
    pub dashboard: DashboardData,
}

impl AppState {
    /// Build the state from the bundled mock datasets.
    pub fn seeded() -> Result<Self, CatalogError> {
        Ok(Self {
            leads: LeadStore::new(mock::leads::sample_leads())?,
            listings: mock::objects::sample_listings(),
            proposals: mock::proposals::sample_proposals(),
            dashboard: mock::dashboard::sample_dashboard(),
        })
    }
}
