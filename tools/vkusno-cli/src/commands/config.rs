//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{self as store_config, generate_default_config};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "defaults"),
    }

    let config = &ctx.config;

    ctx.output.info("[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output.kv("phone", &config.store.phone);
    ctx.output.kv("email", &config.store.email);
    ctx.output.kv("address", &config.store.address);

    ctx.output.info("[delivery]");
    ctx.output
        .kv("free_threshold", &config.delivery.free_threshold.display());
    ctx.output.kv("flat_fee", &config.delivery.flat_fee.display());

    ctx.output.info("[expiry]");
    ctx.output
        .kv("warning_days", &config.expiry.warning_days.to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("format", &format!("{:?}", config.logging.format).to_lowercase());
    ctx.output.kv("level", &config.logging.level.to_string().to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.default_config_path();

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::write(&path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    ctx.output
        .success(&format!("Wrote {}", path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        ctx.output
            .warn("No config file found; the built-in defaults are in effect");
        return Ok(());
    };

    // Loading already validated it; reload so edits since startup are seen.
    store_config::load(path)?;
    ctx.output
        .success(&format!("{} is valid", path.display()));
    Ok(())
}
