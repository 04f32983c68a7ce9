//! Orderings for the lead catalog.
//!
//! Every ordering is stable: leads with equal keys keep their relative
//! position from the filtered input.

use crate::catalog::error::CatalogError;
use crate::catalog::lead::Lead;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Store order, which is already newest first.
    #[default]
    Fresh,
    MatchDesc,
    BudgetDesc,
    BudgetAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Fresh,
        SortKey::MatchDesc,
        SortKey::BudgetDesc,
        SortKey::BudgetAsc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Fresh => "fresh",
            SortKey::MatchDesc => "match-desc",
            SortKey::BudgetDesc => "budget-desc",
            SortKey::BudgetAsc => "budget-asc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Fresh => "По свежести",
            SortKey::MatchDesc => "По совпадению",
            SortKey::BudgetDesc => "Бюджет по убыванию",
            SortKey::BudgetAsc => "Бюджет по возрастанию",
        }
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::unknown("sort key", s))
    }
}

/// Return a new ordered sequence; `leads` is left as it was.
pub fn sort_leads<'a>(leads: &[&'a Lead], key: SortKey) -> Vec<&'a Lead> {
    let mut next = leads.to_vec();

    // slice::sort_by is a stable merge sort.
    match key {
        SortKey::Fresh => {}
        SortKey::MatchDesc => next.sort_by(|a, b| b.match_percent.cmp(&a.match_percent)),
        SortKey::BudgetDesc => next.sort_by(|a, b| b.budget_high().cmp(&a.budget_high())),
        SortKey::BudgetAsc => next.sort_by(|a, b| a.budget_low().cmp(&b.budget_low())),
    }

    next
}
