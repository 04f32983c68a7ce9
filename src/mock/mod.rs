//! Static datasets seeded into the application at startup.

pub mod dashboard;
pub mod leads;
pub mod objects;
pub mod proposals;
