//! Order draft types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartItem, CartPricing, DeliveryPolicy};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// A line of an order draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name at checkout time.
    pub name: String,
    /// Unit label.
    pub unit: String,
    /// Unit price at checkout time.
    pub unit_price: Money,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price times quantity.
    pub line_total: Money,
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.id(),
            name: item.product.name.clone(),
            unit: item.product.unit.clone(),
            unit_price: item.product.price,
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

/// Snapshot of the cart taken when the shopper presses checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    /// Lines in cart order.
    pub lines: Vec<OrderLine>,
    /// Pricing at checkout time.
    pub pricing: CartPricing,
    /// When the draft was prepared.
    pub prepared_at: DateTime<Utc>,
}

impl OrderDraft {
    /// Freeze a cart into a draft.
    ///
    /// Fails with `EmptyCart` when there is nothing to order.
    pub fn prepare(
        cart: &Cart,
        policy: &DeliveryPolicy,
        now: DateTime<Utc>,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        Ok(Self {
            lines: cart.items().iter().map(OrderLine::from).collect(),
            pricing: cart.pricing(policy),
            prepared_at: now,
        })
    }

    /// Number of units ordered.
    pub fn unit_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Amount the shopper pays.
    pub fn amount_due(&self) -> Money {
        self.pricing.grand_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 20, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_empty_cart_cannot_check_out() {
        let result = OrderDraft::prepare(&Cart::new(), &DeliveryPolicy::default(), now());
        assert_eq!(result, Err(CommerceError::EmptyCart));
    }

    #[test]
    fn test_draft_matches_cart() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        for id in [1, 2, 1] {
            cart.add_product(catalog.product(ProductId::new(id)).unwrap());
        }

        let policy = DeliveryPolicy::default();
        let draft = OrderDraft::prepare(&cart, &policy, now()).unwrap();

        assert_eq!(draft.lines.len(), 2);
        assert_eq!(draft.lines[0].quantity, 2);
        assert_eq!(draft.lines[0].line_total, Money::rub(598));
        assert_eq!(draft.lines[1].name, "Молочные продукты");
        assert_eq!(draft.pricing, cart.pricing(&policy));
        assert_eq!(draft.unit_count(), 3);
        assert_eq!(draft.amount_due(), Money::rub(598 + 189 + 199));
        assert_eq!(draft.prepared_at, now());
    }
}
