//! Vkusno & Svezho storefront
//!
//! A single page rendered in the browser:
//! - Header with the cart button and a badge with the unit count
//! - Cart drawer with quantity controls, delivery fee and checkout
//! - Hero banner, category tabs and the product grid
//! - Footer with contacts and delivery terms
//!
//! All catalog, cart and pricing logic lives in `vkusno-commerce`; this crate
//! only renders `StoreState` and turns clicks into `StoreAction`s.

mod app;
mod shop;

pub use app::App;
pub use shop::Shop;
