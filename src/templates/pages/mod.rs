pub mod dashboard;
pub mod deals;
pub mod leads_catalog;
pub mod my_objects;
pub mod new_object;

pub use dashboard::dashboard_page;
pub use deals::deals_page;
pub use leads_catalog::leads_catalog_page;
pub use my_objects::my_objects_page;
pub use new_object::{new_object_page, FormNotice};
