//! Lead catalog: store, filter, sort and page stages and the controller
//! that re-derives them on every state change.

pub mod controller;
pub mod error;
pub mod filter;
pub mod lead;
pub mod page;
pub mod query;
pub mod sort;
pub mod store;

pub use controller::{CatalogController, ViewMode};
pub use error::CatalogError;
pub use filter::RoomBand;
pub use lead::{Contact, DealType, Lead, PropertyType, RoomCount};
pub use page::Page;
pub use query::CatalogQuery;
pub use sort::SortKey;
pub use store::LeadStore;

/// Marketing counter shown above the results ("Найдено 1 234 лида");
/// independent of the filtered count.
pub const ADVERTISED_TOTAL: u64 = 1234;
