//! Catalog browsing commands.

use anyhow::{bail, Result};
use fwh_commerce::prelude::*;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::output::price_cell;

const LIST_WIDTHS: [usize; 5] = [10, 34, 10, 10, 6];

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CatalogCommand::Show { ref id }) => show(id, ctx),
        Some(CatalogCommand::List) | None => list(&args, ctx),
    }
}

fn list(args: &CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let mut criteria = FilterCriteria::new();
    if let Some(ref query) = args.query {
        criteria = criteria.with_query(query);
    }
    if let Some(ref name) = args.category {
        match Category::from_str(name) {
            Some(category) => criteria = criteria.with_category(category),
            None => bail!(
                "Unknown category '{}'. Expected men, women, sports, or custom",
                name
            ),
        }
    }
    if let Some(ref name) = args.kind {
        match ProductKind::from_str(name) {
            Some(kind) => criteria = criteria.with_kind(kind),
            None => bail!("Unknown product type '{}'. Expected boutique or custom", name),
        }
    }
    if args.customizable {
        criteria = criteria.with_customizable(true);
    }

    let products = criteria.apply(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("{} catalog", ctx.config.store.name));

    if products.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    ctx.output.table_row(
        &["ID", "TITLE", "PRICE", "CATEGORY", "RATING"],
        &LIST_WIDTHS,
    );
    ctx.output.info(&"-".repeat(80));

    for product in &products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.title,
                &product.price.display(),
                product.category.display_name(),
                &format!("{:.1}", product.rating),
            ],
            &LIST_WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} product(s)", products.len()));

    Ok(())
}

fn show(id: &str, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let product = match catalog.find(&ProductId::new(id)) {
        Some(product) => product,
        None => bail!("Product '{}' not found", id),
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("Price", &price_cell(&product.price));
    ctx.output.kv("Category", product.category.display_name());
    ctx.output.kv("Type", product.kind.display_name());
    ctx.output.kv("Customizable", if product.customizable { "yes" } else { "no" });
    ctx.output.kv("Rating", &format!("{:.1} / 5", product.rating));
    ctx.output.kv("Image", product.image.as_str());

    if !product.tags.is_empty() {
        ctx.output.info("Tags:");
        for tag in &product.tags {
            ctx.output.list_item(tag);
        }
    }

    Ok(())
}
