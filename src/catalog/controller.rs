// src/catalog/controller.rs

use crate::catalog::error::CatalogError;
use crate::catalog::filter::{apply_filter, FilterCriteria};
use crate::catalog::lead::Lead;
use crate::catalog::page::{paginate, Page, PAGE_SIZE};
use crate::catalog::sort::{sort_leads, SortKey};
use crate::catalog::store::LeadStore;
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// Presentation-only layout toggle; never affects derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Grid => "grid",
        }
    }
}

impl FromStr for ViewMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(ViewMode::List),
            "grid" => Ok(ViewMode::Grid),
            other => Err(CatalogError::unknown("view mode", other)),
        }
    }
}

/// Owns the catalog state and republishes the derived page after every
/// transition.
#[derive(Debug, Clone)]
pub struct CatalogController<'a> {
    store: &'a LeadStore,
    criteria: FilterCriteria,
    sort: SortKey,
    page_index: usize,
    view: ViewMode,
    ordered: Vec<&'a Lead>,
    page: Page<&'a Lead>,
}

/// Serializable snapshot of the controller's state and output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot<'c, 'a> {
    pub criteria: &'c FilterCriteria,
    pub sort: SortKey,
    pub view: ViewMode,
    pub page: &'c Page<&'a Lead>,
}

impl<'a> CatalogController<'a> {
    pub fn new(store: &'a LeadStore) -> Self {
        let mut controller = Self {
            store,
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
            page_index: 1,
            view: ViewMode::default(),
            ordered: Vec::new(),
            page: paginate(&[], 1, PAGE_SIZE),
        };
        controller.rederive();
        controller
    }

    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page_index = 1;
        self.rederive();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
        self.page_index = 1;
        self.rederive();
    }

    /// Pages are 1-based; anything lower is treated as the first page.
    pub fn set_page(&mut self, page: usize) {
        self.page_index = page.max(1);
        self.rederive();
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
        self.rederive();
    }

    /// Clear the filter panel. Sort and view survive a reset.
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
        self.page_index = 1;
        self.rederive();
    }

    fn rederive(&mut self) {
        let filtered = apply_filter(self.store.as_slice(), &self.criteria);
        self.ordered = sort_leads(&filtered, self.sort);
        self.page = paginate(&self.ordered, self.page_index, PAGE_SIZE);

        debug!(
            unfiltered = self.criteria.is_empty(),
            filtered = self.ordered.len(),
            sort = self.sort.as_str(),
            page = self.page_index,
            shown = self.page.items.len(),
            "catalog re-derived"
        );
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Current page plus counters.
    pub fn page(&self) -> &Page<&'a Lead> {
        &self.page
    }

    /// Every filtered lead in display order, ignoring paging.
    pub fn ordered(&self) -> &[&'a Lead] {
        &self.ordered
    }

    pub fn snapshot(&self) -> CatalogSnapshot<'_, 'a> {
        CatalogSnapshot {
            criteria: &self.criteria,
            sort: self.sort,
            view: self.view,
            page: &self.page,
        }
    }
}
