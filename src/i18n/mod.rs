//! String catalogs for the active UI language

mod catalog;


pub use catalog::Catalog;
