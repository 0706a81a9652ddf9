//! Cart pricing calculations.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Orders at or above this subtotal ship for free.
pub const FREE_DELIVERY_THRESHOLD: Money = Money::rub(1000);

/// Delivery charge below the threshold.
pub const FLAT_DELIVERY_FEE: Money = Money::rub(199);

/// When delivery is charged and how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPolicy {
    /// Subtotal from which delivery is free (inclusive).
    #[serde(default = "default_threshold")]
    pub free_threshold: Money,
    /// Fee charged below the threshold.
    #[serde(default = "default_fee")]
    pub flat_fee: Money,
}

fn default_threshold() -> Money {
    FREE_DELIVERY_THRESHOLD
}

fn default_fee() -> Money {
    FLAT_DELIVERY_FEE
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self {
            free_threshold: FREE_DELIVERY_THRESHOLD,
            flat_fee: FLAT_DELIVERY_FEE,
        }
    }
}

impl DeliveryPolicy {
    /// Delivery fee for a subtotal.
    pub fn fee_for(&self, total: Money) -> Money {
        if total >= self.free_threshold {
            Money::ZERO
        } else {
            self.flat_fee
        }
    }

    /// How much more the shopper must add for free delivery.
    pub fn amount_until_free(&self, total: Money) -> Money {
        self.free_threshold.saturating_sub_to_zero(total)
    }
}

/// Delivery fee under the store's fixed policy.
pub fn delivery_fee(total: Money) -> Money {
    DeliveryPolicy::default().fee_for(total)
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Sum of price times quantity.
    pub subtotal: Money,
    /// Delivery charge.
    pub delivery_fee: Money,
    /// Subtotal plus delivery.
    pub grand_total: Money,
    /// Number of units in the cart.
    pub item_count: u64,
}

impl CartPricing {
    /// Price a subtotal under a policy.
    pub fn calculate(subtotal: Money, item_count: u64, policy: &DeliveryPolicy) -> Self {
        let delivery_fee = policy.fee_for(subtotal);
        Self {
            subtotal,
            delivery_fee,
            grand_total: subtotal + delivery_fee,
            item_count,
        }
    }

    /// Check whether delivery is free.
    pub fn has_free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }

    /// Delivery label for the drawer: "Бесплатно" or the fee.
    pub fn delivery_label(&self) -> String {
        if self.has_free_delivery() {
            "Бесплатно".to_string()
        } else {
            self.delivery_fee.display()
        }
    }
}
