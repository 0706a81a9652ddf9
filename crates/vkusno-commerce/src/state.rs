//! Storefront session state and its transitions.
//!
//! The whole interactive state of a storefront session is one `StoreState`
//! value. User interactions become `StoreAction`s and `StoreState::reduce`
//! maps the old state and an action to the new state, so every transition can
//! be tested without a renderer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vkusno_observability::StructuredLogger;

use crate::cart::{parse_quantity, Cart, CartPricing};
use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::checkout::OrderDraft;
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// A user interaction with the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreAction {
    /// Switch the catalog tab.
    SelectCategory(CategoryFilter),
    /// Press "В корзину" on a product card.
    AddToCart(ProductId),
    /// Type a quantity; 0 removes the item.
    SetQuantity { product_id: ProductId, quantity: u32 },
    /// Press `+` in the cart drawer.
    Increment(ProductId),
    /// Press `-` in the cart drawer.
    Decrement(ProductId),
    /// Drop an item from the cart.
    RemoveFromCart(ProductId),
    /// Empty the cart.
    ClearCart,
    /// Open the cart drawer.
    OpenCart,
    /// Close the cart drawer.
    CloseCart,
    /// Remember the draft produced by checkout.
    RecordOrder(OrderDraft),
}

impl StoreAction {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::SelectCategory(_) => "select_category",
            StoreAction::AddToCart(_) => "add_to_cart",
            StoreAction::SetQuantity { .. } => "set_quantity",
            StoreAction::Increment(_) => "increment",
            StoreAction::Decrement(_) => "decrement",
            StoreAction::RemoveFromCart(_) => "remove_from_cart",
            StoreAction::ClearCart => "clear_cart",
            StoreAction::OpenCart => "open_cart",
            StoreAction::CloseCart => "close_cart",
            StoreAction::RecordOrder(_) => "record_order",
        }
    }

    /// Product the action targets, if any.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            StoreAction::AddToCart(id)
            | StoreAction::Increment(id)
            | StoreAction::Decrement(id)
            | StoreAction::RemoveFromCart(id) => Some(*id),
            StoreAction::SetQuantity { product_id, .. } => Some(*product_id),
            _ => None,
        }
    }
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreAction::SelectCategory(filter) => write!(f, "category={}", filter),
            StoreAction::AddToCart(id) => write!(f, "add={}", id),
            StoreAction::SetQuantity {
                product_id,
                quantity,
            } => write!(f, "set={}:{}", product_id, quantity),
            StoreAction::Increment(id) => write!(f, "inc={}", id),
            StoreAction::Decrement(id) => write!(f, "dec={}", id),
            StoreAction::RemoveFromCart(id) => write!(f, "remove={}", id),
            StoreAction::ClearCart => f.write_str("clear"),
            StoreAction::OpenCart => f.write_str("open"),
            StoreAction::CloseCart => f.write_str("close"),
            StoreAction::RecordOrder(_) => f.write_str("order"),
        }
    }
}

/// Parses the textual form used by the CLI: `add=<id>`, `set=<id>:<qty>`,
/// `inc=<id>`, `dec=<id>`, `remove=<id>`, `category=<slug>`, `clear`, `open`,
/// `close`.
impl FromStr for StoreAction {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, arg) = match s.split_once('=') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };
        let id = || -> Result<ProductId, CommerceError> {
            arg.ok_or_else(|| CommerceError::InvalidProductId(String::new()))?
                .parse()
        };

        match verb {
            "add" => Ok(StoreAction::AddToCart(id()?)),
            "inc" => Ok(StoreAction::Increment(id()?)),
            "dec" => Ok(StoreAction::Decrement(id()?)),
            "remove" => Ok(StoreAction::RemoveFromCart(id()?)),
            "set" => {
                let arg = arg.unwrap_or_default();
                let (product, quantity) = arg
                    .split_once(':')
                    .ok_or_else(|| CommerceError::InvalidQuantity(arg.to_string()))?;
                Ok(StoreAction::SetQuantity {
                    product_id: product.parse()?,
                    quantity: parse_quantity(quantity)?,
                })
            }
            "category" => Ok(StoreAction::SelectCategory(CategoryFilter::parse(
                arg.unwrap_or_default(),
            )?)),
            "clear" => Ok(StoreAction::ClearCart),
            "open" => Ok(StoreAction::OpenCart),
            "close" => Ok(StoreAction::CloseCart),
            _ => Err(CommerceError::UnknownAction(s.to_string())),
        }
    }
}

/// Interactive state of one storefront session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    /// Selected catalog tab.
    pub selected: CategoryFilter,
    /// The cart.
    pub cart: Cart,
    /// Whether the cart drawer is open.
    pub cart_open: bool,
    /// Draft from the most recent checkout.
    pub last_order: Option<OrderDraft>,
}

impl StoreState {
    /// Fresh session: all products shown, empty cart, drawer closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action, producing the next state.
    ///
    /// Actions naming a product the catalog does not have leave the state
    /// unchanged.
    pub fn reduce(mut self, catalog: &Catalog, action: StoreAction) -> StoreState {
        match action {
            StoreAction::SelectCategory(filter) => self.selected = filter,
            StoreAction::AddToCart(id) => {
                if let Some(product) = catalog.product(id) {
                    self.cart.add_product(product);
                }
            }
            StoreAction::SetQuantity {
                product_id,
                quantity,
            } => {
                self.cart.update_quantity(product_id, quantity);
            }
            StoreAction::Increment(id) => {
                self.cart.increment(id);
            }
            StoreAction::Decrement(id) => {
                self.cart.decrement(id);
            }
            StoreAction::RemoveFromCart(id) => {
                self.cart.remove_product(id);
            }
            StoreAction::ClearCart => self.cart.clear(),
            StoreAction::OpenCart => self.cart_open = true,
            StoreAction::CloseCart => self.cart_open = false,
            StoreAction::RecordOrder(draft) => self.last_order = Some(draft),
        }
        self
    }

    /// Products on the selected tab.
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.visible(self.selected)
    }

    /// Number shown on the cart badge.
    pub fn badge_count(&self) -> u64 {
        self.cart.item_count()
    }
}

/// Owns the catalog, the configuration and the current state of a session.
#[derive(Debug, Clone)]
pub struct StoreContext {
    catalog: Catalog,
    config: StoreConfig,
    state: StoreState,
    logger: StructuredLogger,
}

impl StoreContext {
    /// Start a session.
    pub fn new(catalog: Catalog, config: StoreConfig, logger: StructuredLogger) -> Self {
        Self {
            catalog,
            config,
            state: StoreState::new(),
            logger: logger.for_component("store"),
        }
    }

    /// Apply an action and return the new state.
    pub fn dispatch(&mut self, action: StoreAction) -> &StoreState {
        let name = action.name();
        let product_id = action.product_id();

        if let Some(id) = product_id {
            if self.catalog.product(id).is_none() {
                self.logger
                    .warn_builder("action names unknown product")
                    .field("action", name)
                    .field_i64("product_id", i64::from(id.get()))
                    .emit();
            }
        }

        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(&self.catalog, action);

        let mut entry = self
            .logger
            .debug_builder("action applied")
            .field("action", name)
            .field("category", self.state.selected.slug())
            .field_i64("cart_units", self.state.badge_count() as i64)
            .field_bool("cart_open", self.state.cart_open);
        if let Some(id) = product_id {
            entry = entry.field_i64("product_id", i64::from(id.get()));
            if let Some(quantity) = self.state.cart.quantity_of(id) {
                entry = entry.field_i64("quantity", i64::from(quantity));
            }
        }
        entry.emit();

        &self.state
    }

    /// Current state.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Products on the selected tab.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.state.visible_products(&self.catalog)
    }

    /// Pricing of the current cart.
    pub fn pricing(&self) -> CartPricing {
        self.state.cart.pricing(&self.config.delivery)
    }

    /// Number shown on the cart badge.
    pub fn badge_count(&self) -> u64 {
        self.state.badge_count()
    }

    /// Check one product against the configured expiry window.
    pub fn is_expiring_soon(&self, product: &Product, now: DateTime<Utc>) -> bool {
        self.config.expiry.is_expiring_soon(&product.expiry, now)
    }

    /// Catalog products inside the expiry window.
    pub fn expiring_soon(&self, now: DateTime<Utc>) -> Vec<&Product> {
        self.catalog
            .products()
            .iter()
            .filter(|p| self.is_expiring_soon(p, now))
            .collect()
    }

    /// Freeze the cart into an order draft and remember it.
    ///
    /// The cart is left as it is; nothing is submitted anywhere.
    pub fn checkout(&mut self, now: DateTime<Utc>) -> Result<OrderDraft, CommerceError> {
        let draft = match OrderDraft::prepare(&self.state.cart, &self.config.delivery, now) {
            Ok(draft) => draft,
            Err(e) => {
                self.logger.warn_with("checkout rejected", &[("reason", &e)]);
                return Err(e);
            }
        };

        self.logger
            .info_builder("order draft prepared")
            .field_i64("lines", draft.lines.len() as i64)
            .field_i64("units", draft.unit_count() as i64)
            .field("subtotal", draft.pricing.subtotal.display())
            .field("delivery", draft.pricing.delivery_fee.display())
            .field("total", draft.amount_due().display())
            .emit();

        self.dispatch(StoreAction::RecordOrder(draft.clone()));
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryId;
    use crate::money::Money;
    use chrono::TimeZone;
    use vkusno_observability::{LogLevel, LogTarget, SessionId};

    fn reduce_all(actions: Vec<StoreAction>) -> StoreState {
        let catalog = Catalog::builtin();
        actions
            .into_iter()
            .fold(StoreState::new(), |state, action| state.reduce(&catalog, action))
    }

    fn context() -> StoreContext {
        let logger = StructuredLogger::new(SessionId::from_string("test"))
            .with_min_level(LogLevel::Debug)
            .with_target(LogTarget::memory());
        StoreContext::new(Catalog::builtin(), StoreConfig::default(), logger)
    }

    #[test]
    fn test_initial_state() {
        let state = StoreState::new();
        assert_eq!(state.selected, CategoryFilter::All);
        assert!(state.cart.is_empty());
        assert!(!state.cart_open);
        assert!(state.last_order.is_none());
    }

    #[test]
    fn test_reduce_leaves_old_state_untouched() {
        let catalog = Catalog::builtin();
        let before = StoreState::new();
        let after = before
            .clone()
            .reduce(&catalog, StoreAction::AddToCart(ProductId::new(1)));
        assert!(before.cart.is_empty());
        assert_eq!(after.badge_count(), 1);
    }

    #[test]
    fn test_select_category() {
        let catalog = Catalog::builtin();
        let state = reduce_all(vec![StoreAction::SelectCategory(CategoryId::Fruits.into())]);
        let visible = state.visible_products(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, ProductId::new(4));
    }

    #[test]
    fn test_unknown_product_is_ignored() {
        let state = reduce_all(vec![StoreAction::AddToCart(ProductId::new(77))]);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_drawer_actions() {
        let state = reduce_all(vec![StoreAction::OpenCart]);
        assert!(state.cart_open);
        let state = reduce_all(vec![StoreAction::OpenCart, StoreAction::CloseCart]);
        assert!(!state.cart_open);
    }

    #[test]
    fn test_quantity_controls() {
        let id = ProductId::new(3);
        let state = reduce_all(vec![
            StoreAction::AddToCart(id),
            StoreAction::Increment(id),
            StoreAction::Increment(id),
            StoreAction::Decrement(id),
        ]);
        assert_eq!(state.cart.quantity_of(id), Some(2));

        let state = reduce_all(vec![
            StoreAction::AddToCart(id),
            StoreAction::Decrement(id),
        ]);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            "add=1".parse::<StoreAction>(),
            Ok(StoreAction::AddToCart(ProductId::new(1)))
        );
        assert_eq!(
            "set=2:4".parse::<StoreAction>(),
            Ok(StoreAction::SetQuantity {
                product_id: ProductId::new(2),
                quantity: 4
            })
        );
        assert_eq!(
            "category=meat".parse::<StoreAction>(),
            Ok(StoreAction::SelectCategory(CategoryId::Meat.into()))
        );
        assert_eq!("clear".parse::<StoreAction>(), Ok(StoreAction::ClearCart));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "set=2:-1".parse::<StoreAction>(),
            Err(CommerceError::InvalidQuantity("-1".to_string()))
        );
        assert_eq!(
            "set=2".parse::<StoreAction>(),
            Err(CommerceError::InvalidQuantity("2".to_string()))
        );
        assert!("add=x".parse::<StoreAction>().is_err());
        assert!("category=sweets".parse::<StoreAction>().is_err());
        assert_eq!(
            "buy=1".parse::<StoreAction>(),
            Err(CommerceError::UnknownAction("buy=1".to_string()))
        );
    }

    #[test]
    fn test_action_display_parses_back() {
        for action in [
            StoreAction::AddToCart(ProductId::new(5)),
            StoreAction::SetQuantity {
                product_id: ProductId::new(5),
                quantity: 0,
            },
            StoreAction::Decrement(ProductId::new(2)),
            StoreAction::SelectCategory(CategoryFilter::All),
            StoreAction::CloseCart,
        ] {
            assert_eq!(action.to_string().parse::<StoreAction>(), Ok(action));
        }
    }

    #[test]
    fn test_context_dispatch_logs() {
        let mut ctx = context();
        ctx.dispatch(StoreAction::AddToCart(ProductId::new(1)));
        ctx.dispatch(StoreAction::AddToCart(ProductId::new(99)));

        let entries = ctx.logger.target().captured();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "action applied");
        assert_eq!(entries[0].fields["quantity"], serde_json::json!(1));
        assert_eq!(entries[1].message, "action names unknown product");
        assert_eq!(entries[1].component.as_deref(), Some("store"));
    }

    #[test]
    fn test_context_pricing_and_checkout() {
        let mut ctx = context();
        let now = Utc.with_ymd_and_hms(2025, 9, 20, 12, 0, 0).unwrap();
        assert_eq!(ctx.checkout(now), Err(CommerceError::EmptyCart));

        ctx.dispatch(StoreAction::AddToCart(ProductId::new(6)));
        ctx.dispatch(StoreAction::AddToCart(ProductId::new(1)));
        let pricing = ctx.pricing();
        assert_eq!(pricing.subtotal, Money::rub(1198));
        assert_eq!(pricing.delivery_fee, Money::ZERO);

        let draft = ctx.checkout(now).unwrap();
        assert_eq!(draft.amount_due(), Money::rub(1198));
        assert_eq!(ctx.state().last_order.as_ref(), Some(&draft));
        assert_eq!(ctx.badge_count(), 2);
    }

    #[test]
    fn test_context_expiring_soon() {
        let ctx = context();
        let now = Utc.with_ymd_and_hms(2025, 9, 21, 0, 0, 0).unwrap();
        let ids: Vec<u32> = ctx.expiring_soon(now).iter().map(|p| p.id.get()).collect();
        // bakery 22.09, meat 24.09, seafood 21.09; vegetables 25.09 is 4 days out
        assert_eq!(ids, [3, 5, 6]);
    }
}
