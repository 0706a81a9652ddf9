//! Cart simulation command.

use anyhow::{Context as _, Result};
use chrono::Utc;
use serde::Serialize;
use vkusno_commerce::cart::{Cart, CartPricing};
use vkusno_commerce::catalog::Catalog;
use vkusno_commerce::checkout::OrderDraft;
use vkusno_commerce::state::StoreAction;

use super::CartArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CartReport<'a> {
    cart: &'a Cart,
    pricing: CartPricing,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<&'a OrderDraft>,
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session();
    let actions = parse_actions(&args.actions, session.catalog())?;

    for action in actions {
        ctx.output.debug(&format!("apply {}", action));
        session.dispatch(action);
    }

    let order = if args.checkout {
        Some(session.checkout(Utc::now())?)
    } else {
        None
    };

    let pricing = session.pricing();
    let cart = &session.state().cart;

    if ctx.output.is_json() {
        ctx.output.json(&CartReport {
            cart,
            pricing,
            order: order.as_ref(),
        });
        return Ok(());
    }

    ctx.output.header("Корзина");
    if cart.is_empty() {
        ctx.output.info("Корзина пуста");
        return Ok(());
    }

    for item in cart.items() {
        let price = item.product.price_per_unit();
        let quantity = format!("x{}", item.quantity);
        let total = item.line_total().display();
        ctx.output.table_row(
            &[
                item.product.name.as_str(),
                price.as_str(),
                quantity.as_str(),
                total.as_str(),
            ],
            &[22, 12, 4, 8],
        );
    }

    ctx.output.header("Итого");
    ctx.output.kv("Товары", &pricing.subtotal.display());
    ctx.output.kv("Доставка", &pricing.delivery_label());
    ctx.output.kv("Итого", &pricing.grand_total.display());

    let missing = session.config().delivery.amount_until_free(pricing.subtotal);
    if missing.is_positive() {
        ctx.output
            .info(&format!("Добавьте ещё {} для бесплатной доставки", missing));
    }

    if let Some(order) = &order {
        ctx.output.success(&format!(
            "Order draft prepared: {} line(s), {} to pay",
            order.lines.len(),
            order.amount_due()
        ));
    }

    Ok(())
}

/// Parse every action before applying any, so a typo aborts the whole run.
/// Actions naming a product outside the catalog are rejected too.
fn parse_actions(raw: &[String], catalog: &Catalog) -> Result<Vec<StoreAction>> {
    raw.iter()
        .enumerate()
        .map(|(i, text)| {
            let action = text
                .parse::<StoreAction>()
                .and_then(|action| match action.product_id() {
                    Some(id) => catalog.require(id).map(|_| action),
                    None => Ok(action),
                })
                .with_context(|| format!("Action #{} ('{}') is invalid", i + 1, text))?;
            Ok(action)
        })
        .collect()
}
