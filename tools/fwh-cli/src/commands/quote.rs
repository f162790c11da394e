//! Price a bulk shirt order.

use anyhow::{bail, Result};
use fwh_commerce::prelude::*;

use super::QuoteArgs;
use crate::context::Context;
use crate::output::price_cell;

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    if !(BULK_QUANTITY_MIN..=BULK_QUANTITY_MAX).contains(&args.quantity) {
        bail!(
            "Bulk orders run from {} to {} shirts",
            BULK_QUANTITY_MIN,
            BULK_QUANTITY_MAX
        );
    }

    let quote = BulkQuote::for_quantity(args.quantity);

    if ctx.output.is_json() {
        ctx.output.json(&quote);
        return Ok(());
    }

    ctx.output.header("Bulk order quote");
    ctx.output.kv("Quantity", &quote.quantity.to_string());
    ctx.output.kv("Unit price", &price_cell(&quote.unit_price));
    ctx.output.kv("Order total", &price_cell(&quote.total));
    ctx.output.info("");
    ctx.output.info("Estimates only; our team confirms artwork and delivery.");

    Ok(())
}
