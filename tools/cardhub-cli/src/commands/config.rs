//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[search]");
    ctx.output.kv("page_size", &ctx.config.search.page_size.to_string());
    ctx.output
        .kv("default_category", ctx.config.search.default_category.as_str());

    ctx.output.info("");
    ctx.output.info("[ads]");
    if ctx.config.ads.store_weights.is_empty() {
        ctx.output.kv("store_weights", "(none, every store weighs 1)");
    }
    for w in &ctx.config.ads.store_weights {
        ctx.output
            .list_item(&format!("store {} → weight {}", w.store_id, w.effective()));
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("cardhub.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created {}", config_path.display()));

    Ok(())
}
