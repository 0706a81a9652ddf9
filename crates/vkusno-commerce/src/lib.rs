//! Catalog, cart and pricing logic for the Vkusno storefront.
//!
//! This crate holds everything the storefront computes, independent of how it
//! is rendered:
//!
//! - **Catalog**: products, category tabs, expiry dates, category filtering
//! - **Cart**: quantity merging, removal on zero, subtotal and delivery fee
//! - **Checkout**: order drafts frozen from the cart
//! - **State**: the session state and the reducer applying user actions
//! - **Config**: TOML store configuration
//!
//! # Example
//!
//! ```rust
//! use vkusno_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let state = StoreState::new()
//!     .reduce(&catalog, StoreAction::AddToCart(ProductId::new(1)))
//!     .reduce(&catalog, StoreAction::AddToCart(ProductId::new(1)));
//!
//! let pricing = state.cart.pricing(&DeliveryPolicy::default());
//! assert_eq!(pricing.subtotal, Money::rub(598));
//! assert_eq!(pricing.delivery_fee, Money::rub(199));
//! assert_eq!(pricing.grand_total, Money::rub(797));
//! ```

pub mod error;
pub mod icon;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod state;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::icon::Icon;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        filter_by_slug, filter_products, Catalog, Category, CategoryFilter, CategoryId,
        ExpiryDate, ExpiryPolicy, Product,
    };

    // Cart
    pub use crate::cart::{delivery_fee, parse_quantity, Cart, CartItem, CartPricing, DeliveryPolicy};

    // Checkout
    pub use crate::checkout::{OrderDraft, OrderLine};

    // Config and state
    pub use crate::config::{LoggingConfig, StoreConfig, StoreInfo};
    pub use crate::state::{StoreAction, StoreContext, StoreState};
}
