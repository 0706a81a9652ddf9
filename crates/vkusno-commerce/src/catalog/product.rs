//! Product type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryId, ExpiryDate};
use crate::ids::ProductId;
use crate::money::Money;

/// A product in the catalog. Defined once at load time and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Price per unit.
    pub price: Money,
    /// Image path.
    pub image: String,
    /// Category the product is listed under.
    pub category: CategoryId,
    /// Best-before date.
    pub expiry: ExpiryDate,
    /// Description for the product card.
    pub description: String,
    /// Unit the price refers to (e.g. "кг").
    pub unit: String,
}

impl Product {
    /// Price label with unit, as shown in the cart ("299 ₽/кг").
    pub fn price_per_unit(&self) -> String {
        format!("{}/{}", self.price, self.unit)
    }

    /// Check against the default expiry window.
    pub fn is_expiring_soon(&self, now: DateTime<Utc>) -> bool {
        self.expiry.is_expiring_soon(now)
    }
}
