// src/catalog/store.rs

use crate::catalog::error::CatalogError;
use crate::catalog::lead::{Lead, RoomCount};
use std::collections::HashSet;

/// Immutable lead collection. Insertion order is the freshness order.
#[derive(Debug, Clone)]
pub struct LeadStore {
    leads: Vec<Lead>,
}

impl LeadStore {
    /// Validate the record invariants once, at startup.
    pub fn new(leads: Vec<Lead>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(leads.len());

        for lead in &leads {
            if !seen.insert(lead.id.as_str()) {
                return Err(CatalogError::DuplicateId(lead.id.clone()));
            }

            if let (Some(from), Some(to)) = (lead.budget_from, lead.budget_to) {
                if from > to {
                    return Err(CatalogError::InvertedBudget {
                        id: lead.id.clone(),
                        from,
                        to,
                    });
                }
            }

            if lead.match_percent > 100 {
                return Err(CatalogError::MatchOutOfRange {
                    id: lead.id.clone(),
                    value: lead.match_percent,
                });
            }

            if lead.rooms == RoomCount::Exact(0) {
                return Err(CatalogError::ZeroRooms(lead.id.clone()));
            }
        }

        Ok(Self { leads })
    }

    pub fn as_slice(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|lead| lead.id == id)
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}
