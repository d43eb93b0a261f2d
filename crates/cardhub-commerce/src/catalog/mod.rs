//! Catalog module.
//!
//! Contains the category taxonomy shared by every search surface.

mod category;

pub use category::Category;
