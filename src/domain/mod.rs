pub mod dashboard;
pub mod format;
pub mod listing;
pub mod object_form;
pub mod proposal;
