//! Reactive store shared by every component.

use chrono::Utc;
use leptos::prelude::*;
use vkusno_commerce::prelude::*;
use vkusno_observability::{LogTarget, SessionId, StructuredLogger};

/// Things that do not change during a session.
struct Session {
    catalog: Catalog,
    config: StoreConfig,
    logger: StructuredLogger,
}

/// Handle to the storefront state.
///
/// `Copy`, so event handlers can capture it freely. Provided once by `App`
/// through context.
#[derive(Clone, Copy)]
pub struct Shop {
    state: RwSignal<StoreState>,
    session: StoredValue<Session>,
}

impl Shop {
    /// Create a store over the built-in catalog.
    pub fn new(config: StoreConfig) -> Self {
        let logger = StructuredLogger::new(SessionId::generate())
            .with_component("storefront")
            .with_min_level(config.logging.level)
            .with_format(config.logging.format)
            .with_target(LogTarget::Tracing);

        logger
            .info_builder("session started")
            .field("store", config.store.name.clone())
            .emit();

        Self {
            state: RwSignal::new(StoreState::new()),
            session: StoredValue::new(Session {
                catalog: Catalog::builtin(),
                config,
                logger,
            }),
        }
    }

    /// The shop provided by `App`.
    pub fn use_shop() -> Self {
        expect_context::<Shop>()
    }

    /// Apply an action to the state.
    pub fn dispatch(&self, action: StoreAction) {
        let name = action.name();
        let product_id = action.product_id();

        self.session.with_value(|session| {
            self.state
                .update(|state| *state = std::mem::take(state).reduce(&session.catalog, action));

            let mut entry = session.logger.debug_builder("action applied").field("action", name);
            if let Some(id) = product_id {
                entry = entry.field_i64("product_id", i64::from(id.get()));
                if let Some(quantity) = self.state.with_untracked(|s| s.cart.quantity_of(id)) {
                    entry = entry.field_i64("quantity", i64::from(quantity));
                }
            }
            entry.emit();
        });
    }

    /// Freeze the cart into an order draft and remember it.
    pub fn checkout(&self) {
        let prepared = self.session.with_value(|session| {
            let cart = self.state.with_untracked(|s| s.cart.clone());
            match OrderDraft::prepare(&cart, &session.config.delivery, Utc::now()) {
                Ok(draft) => {
                    session
                        .logger
                        .info_builder("order draft prepared")
                        .field_i64("lines", draft.lines.len() as i64)
                        .field_i64("units", draft.unit_count() as i64)
                        .field("total", draft.amount_due().display())
                        .emit();
                    Some(draft)
                }
                Err(e) => {
                    session.logger.warn_with("checkout rejected", &[("reason", &e)]);
                    None
                }
            }
        });

        if let Some(draft) = prepared {
            self.dispatch(StoreAction::RecordOrder(draft));
        }
    }

    /// Reactive read of the state.
    pub fn with<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        self.state.with(f)
    }

    /// Pricing of the current cart.
    pub fn pricing(&self) -> CartPricing {
        let policy = self.config(|c| c.delivery);
        self.state.with(|s| s.cart.pricing(&policy))
    }

    /// Products on the selected tab.
    pub fn visible_products(&self) -> Vec<Product> {
        let selected = self.state.with(|s| s.selected);
        self.session.with_value(|session| {
            session
                .catalog
                .visible(selected)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Whether a product gets the "Скоро истечет" badge today.
    pub fn is_expiring_soon(&self, product: &Product) -> bool {
        self.config(|c| c.expiry.is_expiring_soon(&product.expiry, Utc::now()))
    }

    /// Read the store configuration.
    pub fn config<R>(&self, f: impl FnOnce(&StoreConfig) -> R) -> R {
        self.session.with_value(|session| f(&session.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_updates_signal() {
        let shop = Shop::new(StoreConfig::default());
        shop.dispatch(StoreAction::AddToCart(ProductId::new(1)));
        shop.dispatch(StoreAction::AddToCart(ProductId::new(1)));

        assert_eq!(shop.with(|s| s.badge_count()), 2);
        let pricing = shop.pricing();
        assert_eq!(pricing.grand_total, Money::rub(797));
    }

    #[test]
    fn test_tab_selection_filters_grid() {
        let shop = Shop::new(StoreConfig::default());
        assert_eq!(shop.visible_products().len(), 6);

        shop.dispatch(StoreAction::SelectCategory(CategoryFilter::Only(CategoryId::Dairy)));
        let visible = shop.visible_products();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].category, CategoryId::Dairy);
    }

    #[test]
    fn test_checkout_of_empty_cart_records_nothing() {
        let shop = Shop::new(StoreConfig::default());
        shop.checkout();
        assert!(shop.with(|s| s.last_order.is_none()));

        shop.dispatch(StoreAction::AddToCart(ProductId::new(6)));
        shop.checkout();
        assert_eq!(
            shop.with(|s| s.last_order.as_ref().map(|o| o.amount_due())),
            Some(Money::rub(899 + 199))
        );
    }
}
