//! List advertised bulk deals.

use anyhow::Result;

use super::DealsArgs;
use crate::context::Context;

const WIDTHS: [usize; 3] = [18, 10, 16];

/// Run the deals command.
pub fn run(_args: DealsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    if ctx.output.is_json() {
        ctx.output.json(&catalog.deals());
        return Ok(());
    }

    ctx.output.header("Bulk deals");

    if catalog.deals().is_empty() {
        ctx.output.info("No deals advertised right now.");
        return Ok(());
    }

    ctx.output.table_row(&["DEAL", "PRICE", "NOTE"], &WIDTHS);
    ctx.output.info(&"-".repeat(50));

    for deal in catalog.deals() {
        ctx.output.table_row(
            &[&deal.label, &deal.price.display(), &deal.note],
            &WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.info("Run `fwh quote <quantity>` to price a custom quantity.");

    Ok(())
}
