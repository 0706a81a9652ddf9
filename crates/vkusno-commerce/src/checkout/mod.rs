//! Checkout module.
//!
//! The storefront does not submit orders; checkout freezes the cart into an
//! `OrderDraft` that a future order-submission step would consume.

mod order;

pub use order::{OrderDraft, OrderLine};
