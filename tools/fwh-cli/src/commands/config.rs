//! Manage CLI configuration.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(force, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");
    ctx.output.kv("Store name", &ctx.config.store.name);
    match ctx.config.store.catalog.as_deref() {
        Some(path) => ctx.output.kv("Catalog seed", path),
        None => ctx.output.kv("Catalog seed", "built-in demo catalog"),
    }

    Ok(())
}

fn init(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join("fwh.toml");

    if path.exists() && !force {
        bail!("fwh.toml already exists (use --force to overwrite)");
    }

    std::fs::write(&path, generate_default_config())?;
    ctx.output.success(&format!("Wrote {}", path.display()));
    ctx.output
        .info("Point `store.catalog` at a JSON seed to replace the demo catalog.");

    Ok(())
}
