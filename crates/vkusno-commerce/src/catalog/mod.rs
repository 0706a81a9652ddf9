//! Product catalog module.
//!
//! Contains the product and category types, the expiry check, category
//! filtering and the built-in catalog data.

mod category;
mod data;
mod expiry;
mod filter;
mod product;

pub use category::{Category, CategoryFilter, CategoryId};
pub use data::Catalog;
pub use expiry::{ExpiryDate, ExpiryPolicy, DEFAULT_WARNING_DAYS};
pub use filter::{filter_by_slug, filter_products};
pub use product::Product;
