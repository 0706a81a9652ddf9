//! Catalog browsing commands.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use vkusno_commerce::catalog::{CategoryFilter, ExpiryDate, Product};
use vkusno_commerce::state::StoreAction;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::expiry_badge;

#[derive(Serialize)]
struct ProductRow<'a> {
    #[serde(flatten)]
    product: &'a Product,
    expiring_soon: bool,
}

/// Run the categories command.
pub fn categories(ctx: &Context) -> Result<()> {
    let session = ctx.session();
    let catalog = session.catalog();

    if ctx.output.is_json() {
        ctx.output.json(&catalog.categories());
        return Ok(());
    }

    ctx.output.header("Categories");
    for tab in catalog.categories() {
        let count = catalog.visible(tab.filter).len().to_string();
        let icon = if ctx.output.is_term() { tab.icon.glyph() } else { tab.icon.name() };
        ctx.output
            .table_row(&[icon, tab.slug(), tab.name, count.as_str()], &[12, 12, 12, 3]);
    }
    Ok(())
}

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let now = resolve_today(args.today.as_deref())?;
    let mut session = ctx.session();

    // Unknown slugs show an empty grid, as the storefront does.
    let products: Vec<&Product> = match CategoryFilter::from_slug(&args.category) {
        Some(filter) => {
            session.dispatch(StoreAction::SelectCategory(filter));
            session.visible_products()
        }
        None => {
            ctx.output
                .warn(&format!("No category named '{}'", args.category));
            Vec::new()
        }
    };

    let rows: Vec<ProductRow<'_>> = products
        .into_iter()
        .map(|product| ProductRow {
            product,
            expiring_soon: session.is_expiring_soon(product, now),
        })
        .filter(|row| !args.expiring || row.expiring_soon)
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} ({})",
        session.config().store.name,
        args.category
    ));
    if rows.is_empty() {
        ctx.output.info("No products");
        return Ok(());
    }

    for row in &rows {
        let p = row.product;
        let id = p.id.to_string();
        let price = p.price.display();
        let unit = format!("за {}", p.unit);
        let expiry = format!("до {}", p.expiry);
        let badge = expiry_badge(row.expiring_soon);
        ctx.output.table_row(
            &[
                id.as_str(),
                p.name.as_str(),
                price.as_str(),
                unit.as_str(),
                expiry.as_str(),
                badge.as_str(),
            ],
            &[2, 22, 7, 8, 13, 0],
        );
        if ctx.output.is_verbose() {
            ctx.output.kv("description", &p.description);
        }
    }

    Ok(())
}

/// Midnight UTC of a `dd.mm.yyyy` day, or the current instant.
fn resolve_today(today: Option<&str>) -> Result<DateTime<Utc>> {
    match today {
        Some(literal) => {
            let date = ExpiryDate::parse(literal)?;
            Ok(date.date().and_time(chrono::NaiveTime::MIN).and_utc())
        }
        None => Ok(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_resolve_today_literal() {
        let today = resolve_today(Some("21.09.2025")).unwrap();
        assert_eq!(today, Utc.with_ymd_and_hms(2025, 9, 21, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_resolve_today_rejects_bad_literal() {
        assert!(resolve_today(Some("2025-09-21")).is_err());
    }
}
