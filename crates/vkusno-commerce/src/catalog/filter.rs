//! Category filtering of the product grid.

use crate::catalog::{CategoryFilter, Product};

/// Products passing `filter`, in declaration order.
pub fn filter_products<'a>(products: &'a [Product], filter: CategoryFilter) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| filter.matches(p.category))
        .collect()
}

/// Products for a tab slug. Unknown slugs yield an empty view.
pub fn filter_by_slug<'a>(products: &'a [Product], slug: &str) -> Vec<&'a Product> {
    match CategoryFilter::from_slug(slug) {
        Some(filter) => filter_products(products, filter),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CategoryId};
    use crate::ids::ProductId;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let catalog = Catalog::builtin();
        let all = filter_products(catalog.products(), CategoryFilter::All);
        assert_eq!(ids(&all), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_single_category() {
        let catalog = Catalog::builtin();
        let dairy = filter_products(catalog.products(), CategoryId::Dairy.into());
        assert_eq!(dairy.len(), 1);
        assert_eq!(dairy[0].id, ProductId::new(2));
    }

    #[test]
    fn test_every_category_only_returns_matches() {
        let catalog = Catalog::builtin();
        for id in CategoryId::ALL {
            let view = filter_products(catalog.products(), CategoryFilter::Only(id));
            assert!(view.iter().all(|p| p.category == id));
            let expected = catalog.products().iter().filter(|p| p.category == id).count();
            assert_eq!(view.len(), expected);
        }
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = Catalog::builtin();
        let mut products = catalog.products().to_vec();
        let mut extra = products[0].clone();
        extra.id = ProductId::new(99);
        products.push(extra);

        let veg = filter_products(&products, CategoryId::Vegetables.into());
        assert_eq!(ids(&veg), [1, 99]);
    }

    #[test]
    fn test_slug_filtering() {
        let catalog = Catalog::builtin();
        assert_eq!(filter_by_slug(catalog.products(), "all").len(), 6);
        assert_eq!(ids(&filter_by_slug(catalog.products(), "seafood")), [6]);
        assert!(filter_by_slug(catalog.products(), "sweets").is_empty());
    }

    #[test]
    fn test_slug_with_other_case_or_spacing_is_unknown() {
        let catalog = Catalog::builtin();
        assert!(filter_by_slug(catalog.products(), "Dairy").is_empty());
        assert!(filter_by_slug(catalog.products(), " ALL ").is_empty());
        assert!(filter_by_slug(catalog.products(), "").is_empty());
    }
}
