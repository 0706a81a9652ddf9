//! Shopping cart module.
//!
//! Contains the cart, its pricing and the parsing of typed quantities.

mod cart;
mod pricing;
mod quantity;

pub use cart::{Cart, CartItem};
pub use pricing::{
    delivery_fee, CartPricing, DeliveryPolicy, FLAT_DELIVERY_FEE, FREE_DELIVERY_THRESHOLD,
};
pub use quantity::parse_quantity;
