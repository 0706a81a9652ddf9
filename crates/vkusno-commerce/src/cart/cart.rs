//! Cart and cart item types.

use serde::{Deserialize, Serialize};

use crate::cart::{CartPricing, DeliveryPolicy};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// A product in the cart together with how many the shopper wants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product, copied from the catalog.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Product ID of this item.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// The session's shopping cart.
///
/// Items keep insertion order. There is at most one item per product and no
/// item with quantity zero: setting a quantity of zero removes the item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "CartItems")]
pub struct Cart {
    items: Vec<CartItem>,
}

/// Unchecked wire form of a cart.
#[derive(Deserialize)]
struct CartItems {
    items: Vec<CartItem>,
}

impl TryFrom<CartItems> for Cart {
    type Error = CommerceError;

    fn try_from(raw: CartItems) -> Result<Self, Self::Error> {
        Cart::from_items(raw.items)
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored items.
    ///
    /// Rejects items with quantity 0 and a second item for the same product.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CommerceError> {
        for (i, item) in items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(CommerceError::InvalidQuantity(format!(
                    "0 for product {}",
                    item.id()
                )));
            }
            if items[..i].iter().any(|other| other.id() == item.id()) {
                return Err(CommerceError::DuplicateCartItem(item.id()));
            }
        }
        Ok(Self { items })
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing item for the product, or appends a new item
    /// with quantity 1. Returns the resulting quantity.
    pub fn add_product(&mut self, product: &Product) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id() == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
        1
    }

    /// Set the quantity of an item.
    ///
    /// A quantity of 0 removes the item. Returns whether the product was in
    /// the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_product(product_id);
        }

        match self.items.iter_mut().find(|i| i.id() == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Increase an item's quantity by one (the drawer's `+`).
    pub fn increment(&mut self, product_id: ProductId) -> bool {
        match self.quantity_of(product_id) {
            Some(q) => self.update_quantity(product_id, q.saturating_add(1)),
            None => false,
        }
    }

    /// Decrease an item's quantity by one (the drawer's `-`). An item at
    /// quantity 1 is removed.
    pub fn decrement(&mut self, product_id: ProductId) -> bool {
        match self.quantity_of(product_id) {
            Some(q) => self.update_quantity(product_id, q.saturating_sub(1)),
            None => false,
        }
    }

    /// Remove an item. Returns whether it was present.
    pub fn remove_product(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id() != product_id);
        self.items.len() < len_before
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == product_id)
    }

    /// Quantity of a product, if present.
    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.get(product_id).map(|i| i.quantity)
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities (the header badge).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price times quantity over all items.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Full pricing breakdown under a delivery policy.
    pub fn pricing(&self, policy: &DeliveryPolicy) -> CartPricing {
        CartPricing::calculate(self.total_price(), self.item_count(), policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: u32) -> Product {
        Catalog::builtin()
            .product(ProductId::new(id))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), Money::ZERO);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_product(&product(1)), 1);
        assert_eq!(cart.add_product(&product(1)), 2);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(2));
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add_product(&product(3));
        cart.add_product(&product(1));
        cart.add_product(&product(3));

        let ids: Vec<u32> = cart.items().iter().map(|i| i.id().get()).collect();
        assert_eq!(ids, [3, 1]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_product(&product(2));
        assert!(cart.update_quantity(ProductId::new(2), 5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_product(&product(2));
        cart.add_product(&product(4));
        assert!(cart.update_quantity(ProductId::new(2), 0));
        assert!(!cart.contains(ProductId::new(2)));
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&product(1));
        let before = cart.clone();
        assert!(!cart.update_quantity(ProductId::new(6), 3));
        assert!(!cart.remove_product(ProductId::new(6)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::new();
        cart.add_product(&product(5));
        assert!(cart.increment(ProductId::new(5)));
        assert_eq!(cart.quantity_of(ProductId::new(5)), Some(2));
        assert!(cart.decrement(ProductId::new(5)));
        assert!(cart.decrement(ProductId::new(5)));
        assert!(cart.is_empty());
        assert!(!cart.decrement(ProductId::new(5)));
    }

    #[test]
    fn test_total_is_linear() {
        let mut cart = Cart::new();
        cart.add_product(&product(1));
        let before = cart.total_price();

        cart.add_product(&product(6));
        cart.update_quantity(ProductId::new(6), 3);
        assert_eq!(cart.total_price(), before + Money::rub(899) * 3);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_product(&product(1));
        cart.add_product(&product(2));
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_item_serializes_product_fields_flat() {
        let mut cart = Cart::new();
        cart.add_product(&product(1));
        let json = serde_json::to_value(&cart.items()[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], 299);
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["category"], "vegetables");
    }

    #[test]
    fn test_deserialize_keeps_valid_cart() {
        let mut cart = Cart::new();
        cart.add_product(&product(4));
        cart.add_product(&product(1));
        cart.update_quantity(ProductId::new(1), 3);

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_deserialize_rejects_zero_quantity() {
        let mut item = serde_json::to_value(CartItem {
            product: product(1),
            quantity: 1,
        })
        .unwrap();
        item["quantity"] = serde_json::json!(0);
        let json = serde_json::json!({ "items": [item] });

        let err = serde_json::from_value::<Cart>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid quantity"));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_products() {
        let item = serde_json::to_value(CartItem {
            product: product(1),
            quantity: 2,
        })
        .unwrap();
        let json = serde_json::json!({ "items": [item.clone(), item] });

        let err = serde_json::from_value::<Cart>(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate cart item: 1"));
    }

    #[test]
    fn test_from_items_checks_invariants() {
        let line = |quantity| CartItem {
            product: product(5),
            quantity,
        };
        assert_eq!(
            Cart::from_items(vec![line(1), line(2)]),
            Err(CommerceError::DuplicateCartItem(ProductId::new(5)))
        );
        assert!(Cart::from_items(vec![line(0)]).is_err());

        let mut cart = Cart::from_items(vec![line(1)]).unwrap();
        assert!(cart.decrement(ProductId::new(5)));
        assert!(cart.is_empty());
    }
}
