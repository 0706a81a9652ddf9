//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors at the parsing, configuration and checkout edges.
///
/// Catalog filtering, cart mutation and pricing never fail; only input that
/// arrives as text (dates, quantities, slugs, config files) or an order draft
/// of an empty cart can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Expiry date is not a valid `dd.mm.yyyy` literal.
    #[error("Invalid expiry date: {0}")]
    InvalidExpiryDate(String),

    /// Quantity input is not a non-negative whole number.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Category slug is not part of the catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Product ID is not a whole number.
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),

    /// Action text the command line does not understand.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Product ID is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Stored cart lists the same product twice.
    #[error("Duplicate cart item: {0}")]
    DuplicateCartItem(ProductId),

    /// Checkout requested with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Store configuration could not be read or written.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for CommerceError {
    fn from(e: toml::ser::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
