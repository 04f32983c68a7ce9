mod catalog_tests;
mod deals_tests;
mod objects_tests;
mod pages_tests;
