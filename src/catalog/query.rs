// src/catalog/query.rs

use crate::catalog::controller::{CatalogController, ViewMode};
use crate::catalog::error::CatalogError;
use crate::catalog::filter::FilterCriteria;
use crate::catalog::sort::SortKey;
use url::form_urlencoded;

/// Catalog state as carried in a `/leads-catalog` query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    pub view: ViewMode,
    pub page: usize,
}

fn parse_amount(field: &'static str, value: &str) -> Result<u64, CatalogError> {
    // Grouped input such as "15 000 000" is accepted.
    let digits: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .collect();

    digits.parse().map_err(|_| CatalogError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl CatalogQuery {
    /// Decode a raw (still percent-encoded) query string.
    pub fn parse(raw: Option<&str>) -> Result<Self, CatalogError> {
        let mut query = CatalogQuery {
            page: 1,
            ..Default::default()
        };

        let Some(raw) = raw else {
            return Ok(query);
        };

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            let criteria = &mut query.criteria;
            match key.as_ref() {
                "city" => criteria.city = Some(value.to_string()),
                "dealType" => criteria.deal_type = Some(value.parse()?),
                "propertyType" => criteria.property_type = Some(value.parse()?),
                "budgetFrom" => criteria.budget_from = Some(parse_amount("budgetFrom", value)?),
                "budgetTo" => criteria.budget_to = Some(parse_amount("budgetTo", value)?),
                "rooms" => criteria.rooms = Some(value.parse()?),
                "exclusive" => criteria.exclusive = matches!(value, "true" | "on" | "1"),
                "sort" => query.sort = value.parse()?,
                "view" => query.view = value.parse()?,
                "page" => {
                    query.page = value.parse().map_err(|_| CatalogError::InvalidNumber {
                        field: "page",
                        value: value.to_string(),
                    })?
                }
                // Unknown keys (htmx bookkeeping etc) are ignored.
                _ => {}
            }
        }

        Ok(query)
    }

    /// Replay the query onto a fresh controller, page last so the filter
    /// and sort resets do not clobber it.
    pub fn controller<'a>(&self, store: &'a crate::catalog::LeadStore) -> CatalogController<'a> {
        let mut controller = CatalogController::new(store);
        controller.set_filter(self.criteria.clone());
        controller.set_sort(self.sort);
        controller.set_view(self.view);
        controller.set_page(self.page);
        controller
    }

    /// Encode the state back into a query string; `page` is only written
    /// when it is past the first page.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        let c = &self.criteria;

        if let Some(city) = &c.city {
            out.append_pair("city", city);
        }
        if let Some(deal_type) = c.deal_type {
            out.append_pair("dealType", deal_type.as_str());
        }
        if let Some(property_type) = c.property_type {
            out.append_pair("propertyType", property_type.as_str());
        }
        if let Some(from) = c.budget_from {
            out.append_pair("budgetFrom", &from.to_string());
        }
        if let Some(to) = c.budget_to {
            out.append_pair("budgetTo", &to.to_string());
        }
        if let Some(rooms) = c.rooms {
            out.append_pair("rooms", rooms.as_str());
        }
        if c.exclusive {
            out.append_pair("exclusive", "true");
        }
        if self.sort != SortKey::default() {
            out.append_pair("sort", self.sort.as_str());
        }
        if self.view != ViewMode::default() {
            out.append_pair("view", self.view.as_str());
        }
        if self.page > 1 {
            out.append_pair("page", &self.page.to_string());
        }

        out.finish()
    }

    /// Current state of `controller` as a query.
    pub fn from_controller(controller: &CatalogController<'_>) -> Self {
        Self {
            criteria: controller.criteria().clone(),
            sort: controller.sort(),
            view: controller.view(),
            page: controller.page_index(),
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn with_view(&self, view: ViewMode) -> Self {
        Self {
            view,
            ..self.clone()
        }
    }

    /// `href` for this state under `base`.
    pub fn href(&self, base: &str) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            base.to_string()
        } else {
            format!("{base}?{qs}")
        }
    }
}
