//! Ad rotation commands.

use std::collections::BTreeMap;

use anyhow::{Context as _, Result};
use cardhub_commerce::ads::{
    parse_ads, parse_store_weights, AdPosition, Advertisement, WeightedAdRotator,
};
use cardhub_commerce::StoreId;
use serde::Serialize;

use super::{AdsArgs, AdsCommand};
use crate::context::Context;

/// Run the ads command.
pub fn run(args: AdsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        AdsCommand::Rotate {
            ads,
            weights,
            count,
            seed,
            position,
        } => rotate(&ads, weights.as_deref(), count, seed, position.as_deref(), ctx),
    }
}

#[derive(Serialize)]
struct RotationReport {
    picks: Vec<Advertisement>,
    tallies: BTreeMap<StoreId, usize>,
}

fn rotate(
    ads_path: &str,
    weights_path: Option<&str>,
    count: usize,
    seed: Option<u64>,
    position: Option<&str>,
    ctx: &Context,
) -> Result<()> {
    let mut ads = parse_ads(&ctx.read_file(ads_path)?)
        .with_context(|| format!("Invalid ads payload: {}", ads_path))?;

    if let Some(position) = position {
        let position: AdPosition = position.parse()?;
        ads.retain(|ad| ad.position == position);
    }

    let weights = match weights_path {
        Some(path) => parse_store_weights(&ctx.read_file(path)?)
            .with_context(|| format!("Invalid store weights: {}", path))?,
        None => ctx.config.ads.store_weights.clone(),
    };

    let mut rotator = match seed {
        Some(seed) => WeightedAdRotator::with_seed(ads, &weights, seed),
        None => WeightedAdRotator::new(ads, &weights),
    };

    let mut report = RotationReport {
        picks: Vec::with_capacity(count),
        tallies: BTreeMap::new(),
    };
    for _ in 0..count {
        let ad = rotator.next_ad().context("Nothing to rotate")?;
        *report.tallies.entry(ad.store_id).or_insert(0) += 1;
        report.picks.push(ad);
    }

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Rotation");
    ctx.output.rotation_table(&report.picks);

    ctx.output.header("Picks per store");
    for (store_id, picks) in &report.tallies {
        ctx.output.kv(
            &format!("store {} (weight {})", store_id, rotator.store_weight(*store_id)),
            &picks.to_string(),
        );
    }

    Ok(())
}
