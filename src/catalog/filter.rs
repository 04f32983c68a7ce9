// src/catalog/filter.rs

use crate::catalog::error::CatalogError;
use crate::catalog::lead::{DealType, Lead, PropertyType, RoomCount};
use serde::Serialize;
use std::str::FromStr;

/// Room selector offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoomBand {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4+")]
    FourPlus,
}

impl RoomBand {
    pub const ALL: [RoomBand; 4] = [
        RoomBand::One,
        RoomBand::Two,
        RoomBand::Three,
        RoomBand::FourPlus,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoomBand::One => "1",
            RoomBand::Two => "2",
            RoomBand::Three => "3",
            RoomBand::FourPlus => "4+",
        }
    }

    /// "4+" admits any exact count of four or more and every open band;
    /// the other selectors require the rendered count to equal the band.
    pub fn admits(self, rooms: RoomCount) -> bool {
        match self {
            RoomBand::FourPlus => match rooms {
                RoomCount::Exact(n) => n >= 4,
                RoomCount::FourPlus | RoomCount::FivePlus => true,
            },
            band => rooms.to_string() == band.as_str(),
        }
    }
}

impl FromStr for RoomBand {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(RoomBand::One),
            "2" => Ok(RoomBand::Two),
            "3" => Ok(RoomBand::Three),
            "4+" => Ok(RoomBand::FourPlus),
            other => Err(CatalogError::unknown("room band", other)),
        }
    }
}

/// Optional constraints; a `None` (or `false` for `exclusive`) field
/// restricts nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub city: Option<String>,
    pub deal_type: Option<DealType>,
    pub property_type: Option<PropertyType>,
    pub budget_from: Option<u64>,
    pub budget_to: Option<u64>,
    pub rooms: Option<RoomBand>,
    pub exclusive: bool,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// Budget bounds that actually constrain; a zero bound counts as unset.
    fn budget_bounds(&self) -> (Option<u64>, Option<u64>) {
        (
            self.budget_from.filter(|v| *v > 0),
            self.budget_to.filter(|v| *v > 0),
        )
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        if let Some(city) = &self.city {
            if lead.city_code != *city {
                return false;
            }
        }

        if let Some(deal_type) = self.deal_type {
            if lead.deal_type != deal_type {
                return false;
            }
        }

        if let Some(property_type) = self.property_type {
            if lead.property_type != property_type {
                return false;
            }
        }

        if self.exclusive && !lead.exclusive {
            return false;
        }

        if let Some(band) = self.rooms {
            if !band.admits(lead.rooms) {
                return false;
            }
        }

        let (budget_from, budget_to) = self.budget_bounds();
        if budget_from.is_some() || budget_to.is_some() {
            // A lead without budget data cannot satisfy a budget constraint.
            let Some((min, max)) = lead.budget_range() else {
                return false;
            };

            let query_min = budget_from.unwrap_or(u64::MIN);
            let query_max = budget_to.unwrap_or(u64::MAX);

            if max < query_min || min > query_max {
                return false;
            }
        }

        true
    }
}

/// Subset of `leads` satisfying every present constraint, in input order.
pub fn apply_filter<'a>(leads: &'a [Lead], criteria: &FilterCriteria) -> Vec<&'a Lead> {
    leads.iter().filter(|lead| criteria.matches(lead)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::leads::sample_leads;

    fn ids(leads: &[&Lead]) -> Vec<String> {
        leads.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn empty_criteria_keeps_everything() {
        let leads = sample_leads();
        let out = apply_filter(&leads, &FilterCriteria::default());
        assert_eq!(out.len(), leads.len());
    }

    #[test]
    fn filters_by_city_code() {
        let leads = sample_leads();
        let criteria = FilterCriteria {
            city: Some("moscow".into()),
            ..Default::default()
        };
        assert_eq!(
            ids(&apply_filter(&leads, &criteria)),
            vec!["lead-1", "lead-3", "lead-6"]
        );
    }

    #[test]
    fn combines_dimensions_with_and() {
        let leads = sample_leads();
        let criteria = FilterCriteria {
            city: Some("moscow".into()),
            property_type: Some(PropertyType::House),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(&leads, &criteria)), vec!["lead-6"]);

        let criteria = FilterCriteria {
            deal_type: Some(DealType::Rent),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(&leads, &criteria)), vec!["lead-2", "lead-5"]);
    }

    #[test]
    fn exclusive_flag_requires_exclusive_leads() {
        let leads = sample_leads();
        let criteria = FilterCriteria {
            exclusive: true,
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(&leads, &criteria)), vec!["lead-1", "lead-4"]);
    }

    #[test]
    fn four_plus_band_admits_open_bands() {
        let leads = sample_leads();
        let criteria = FilterCriteria {
            rooms: Some(RoomBand::FourPlus),
            ..Default::default()
        };
        let out = ids(&apply_filter(&leads, &criteria));
        assert_eq!(out, vec!["lead-2", "lead-5", "lead-6"]);
        assert!(!out.contains(&"lead-1".to_string()));
    }

    #[test]
    fn exact_bands_match_rendered_count() {
        let leads = sample_leads();
        let criteria = FilterCriteria {
            rooms: Some(RoomBand::Three),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(&leads, &criteria)), vec!["lead-1"]);

        assert!(RoomBand::Two.admits(RoomCount::Exact(2)));
        assert!(!RoomBand::Two.admits(RoomCount::FourPlus));
        assert!(!RoomBand::FourPlus.admits(RoomCount::Exact(3)));
    }

    #[test]
    fn budget_overlap_and_missing_budget() {
        let leads = sample_leads();

        // lead-3 is 8..10M, lead-4 is 9.5..11M, lead-1 is 15..20M
        let criteria = FilterCriteria {
            budget_from: Some(9_000_000),
            budget_to: Some(12_000_000),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(&leads, &criteria)), vec!["lead-3", "lead-4"]);

        // Rent leads carry only a label and never pass a budget bound.
        let criteria = FilterCriteria {
            budget_to: Some(u64::MAX),
            ..Default::default()
        };
        let out = ids(&apply_filter(&leads, &criteria));
        assert!(!out.contains(&"lead-2".to_string()));
        assert!(!out.contains(&"lead-5".to_string()));
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn zero_budget_bounds_restrict_nothing() {
        let leads = sample_leads();

        for criteria in [
            FilterCriteria { budget_from: Some(0), ..Default::default() },
            FilterCriteria { budget_to: Some(0), ..Default::default() },
            FilterCriteria { budget_from: Some(0), budget_to: Some(0), ..Default::default() },
        ] {
            assert_eq!(apply_filter(&leads, &criteria).len(), 6, "{criteria:?}");
        }

        // A zero lower bound next to a real upper bound keeps the upper bound.
        let criteria = FilterCriteria {
            budget_from: Some(0),
            budget_to: Some(10_000_000),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(&leads, &criteria)), vec!["lead-3", "lead-4"]);
    }

    #[test]
    fn one_sided_lead_budget_collapses_to_a_point() {
        let mut leads = sample_leads();
        leads[0].budget_to = None; // 15M..15M

        let criteria = FilterCriteria {
            budget_from: Some(16_000_000),
            ..Default::default()
        };
        assert!(!criteria.matches(&leads[0]));

        let criteria = FilterCriteria {
            budget_to: Some(15_000_000),
            ..Default::default()
        };
        assert!(criteria.matches(&leads[0]));
    }

    #[test]
    fn filter_output_is_subset_and_idempotent() {
        let leads = sample_leads();
        let criteria = FilterCriteria {
            deal_type: Some(DealType::Sale),
            budget_from: Some(10_000_000),
            ..Default::default()
        };
        let once = apply_filter(&leads, &criteria);
        for lead in &once {
            assert!(leads.iter().any(|l| l.id == lead.id));
        }

        let owned: Vec<Lead> = once.iter().map(|l| (*l).clone()).collect();
        let twice = apply_filter(&owned, &criteria);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn parses_room_bands() {
        assert_eq!("4+".parse::<RoomBand>().unwrap(), RoomBand::FourPlus);
        assert!("5+".parse::<RoomBand>().is_err());
    }
}
