//! The storefront's built-in catalog.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::{Category, CategoryFilter, CategoryId, ExpiryDate, Product};
use crate::catalog::filter_products;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Immutable product list and category tabs for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from explicit products, with the standard tabs.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            categories: Category::tabs(),
        }
    }

    /// The products sold by the store.
    pub fn builtin() -> Self {
        Self::new(vec![
            product(
                1,
                "Свежие овощи",
                299,
                "/img/9edcb1fb-621c-4dec-adf0-a8190683473e.jpg",
                CategoryId::Vegetables,
                (2025, 9, 25),
                "Микс из свежих овощей: помидоры, огурцы, морковь",
                "кг",
            ),
            product(
                2,
                "Молочные продукты",
                189,
                "/img/6a310d21-b130-4691-853e-0049d7a3ec75.jpg",
                CategoryId::Dairy,
                (2025, 9, 28),
                "Свежее молоко, творог, сметана высшего качества",
                "набор",
            ),
            product(
                3,
                "Хлебобулочные изделия",
                159,
                "/img/09b12154-8186-40e3-a02e-8826025969c2.jpg",
                CategoryId::Bakery,
                (2025, 9, 22),
                "Свежий хлеб, круассаны, выпечка от пекарни",
                "набор",
            ),
            product(
                4,
                "Органические фрукты",
                449,
                "/img/9edcb1fb-621c-4dec-adf0-a8190683473e.jpg",
                CategoryId::Fruits,
                (2025, 9, 30),
                "Сезонные фрукты: яблоки, груши, бананы",
                "кг",
            ),
            product(
                5,
                "Мясные деликатесы",
                699,
                "/img/6a310d21-b130-4691-853e-0049d7a3ec75.jpg",
                CategoryId::Meat,
                (2025, 9, 24),
                "Отборное мясо, колбасы, деликатесы",
                "кг",
            ),
            product(
                6,
                "Морепродукты",
                899,
                "/img/09b12154-8186-40e3-a02e-8826025969c2.jpg",
                CategoryId::Seafood,
                (2025, 9, 21),
                "Свежая рыба, креветки, морские деликатесы",
                "кг",
            ),
        ])
    }

    /// All products in declaration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category tabs, wildcard first.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by ID.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product that must exist.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.product(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// Products shown for a selection.
    pub fn visible(&self, filter: CategoryFilter) -> Vec<&Product> {
        filter_products(&self.products, filter)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    price: i64,
    image: &str,
    category: CategoryId,
    (year, month, day): (i32, u32, u32),
    description: &str,
    unit: &str,
) -> Product {
    // Literal dates above are all valid; fall back to the epoch rather than panic.
    let expiry = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Money::rub(price),
        image: image.to_string(),
        category,
        expiry: ExpiryDate::from_date(expiry),
        description: description.to_string(),
        unit: unit.to_string(),
    }
}
