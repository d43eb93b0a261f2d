//! Search session commands.

use std::fs;

use anyhow::{Context as _, Result};
use cardhub_commerce::catalog::Category;
use cardhub_commerce::search::{
    parse_search_response, FetchOutcome, SearchAction, SearchRequestParams, SearchSession,
    SessionSnapshot,
};
use serde::Serialize;

use super::{SearchArgs, SearchCommand};
use crate::context::Context;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    match args.command {
        SearchCommand::Run {
            script,
            results,
            category,
            restore,
            save,
        } => run_script(
            &script,
            results.as_deref(),
            category.as_deref(),
            restore.as_deref(),
            save.as_deref(),
            ctx,
        ),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Step {
    action: SearchAction,
    params: SearchRequestParams,
}

fn open_session(
    category: Option<&str>,
    restore: Option<&str>,
    ctx: &Context,
) -> Result<SearchSession> {
    if let Some(path) = restore {
        let snapshot: SessionSnapshot = serde_json::from_str(&ctx.read_file(path)?)
            .with_context(|| format!("Invalid session snapshot: {}", path))?;
        ctx.output.info(&format!(
            "Restored session saved at {}",
            snapshot.saved_at.to_rfc3339()
        ));
        return Ok(SearchSession::restore(snapshot));
    }

    let category = match category {
        Some(name) => name.parse::<Category>()?,
        None => ctx.config.search.default_category,
    };
    Ok(SearchSession::new(category).with_page_size(ctx.config.search.page_size))
}

fn run_script(
    script_path: &str,
    results_path: Option<&str>,
    category: Option<&str>,
    restore: Option<&str>,
    save: Option<&str>,
    ctx: &Context,
) -> Result<()> {
    let actions: Vec<SearchAction> = serde_json::from_str(&ctx.read_file(script_path)?)
        .with_context(|| format!("Invalid action script: {}", script_path))?;

    let mut session = open_session(category, restore, ctx)?;

    ctx.output.header("Session");
    let mut steps = Vec::with_capacity(actions.len());
    let total = actions.len();
    for (i, action) in actions.into_iter().enumerate() {
        let resets = action.resets_page();
        session.dispatch(action.clone());
        let params = session.build_request_params();
        let note = if resets { " (page reset)" } else { "" };
        ctx.output.step(
            i + 1,
            total,
            &format!("{:?} → page {}{}", action, params.page, note),
        );
        if ctx.output.is_verbose() {
            ctx.output.kv("params", &serde_json::to_string(&params)?);
        }
        steps.push(Step { action, params });
    }

    if let Some(path) = results_path {
        let ticket = session.begin_fetch();
        let results = parse_search_response(&ctx.read_file(path)?)
            .with_context(|| format!("Invalid search response: {}", path))?;
        if session.apply_results(&ticket, results) == FetchOutcome::Stale {
            ctx.output.warn("Response was superseded and discarded");
        }
    }

    if let Some(path) = save {
        let resolved = ctx.resolve_path(path);
        fs::write(&resolved, serde_json::to_string_pretty(&session.snapshot())?)
            .with_context(|| format!("Failed to write snapshot: {}", resolved.display()))?;
        ctx.output
            .success(&format!("Saved snapshot to {}", resolved.display()));
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "steps": steps,
            "request": session.build_request_params(),
            "inert": session.inert_selections(),
            "facets": session.facet_groups(),
        }));
        return Ok(());
    }

    print_summary(&session, ctx);
    Ok(())
}

fn print_summary(session: &SearchSession, ctx: &Context) {
    ctx.output.header("Next request");
    let params = session.build_request_params();
    ctx.output.kv("query", &format!("{:?}", params.query));
    ctx.output.kv("category", params.category.display_name());
    ctx.output.kv("sort", params.sort_by.display_name());
    ctx.output.kv("page", &params.page.to_string());
    ctx.output.kv("page size", &params.page_size.to_string());
    for (field, values) in &params.filter_selections {
        ctx.output.list_item(&format!("{} = {}", field, values.join(", ")));
    }

    let inert = session.inert_selections();
    if !inert.is_empty() {
        ctx.output.warn(&format!(
            "{} selection(s) not offered by current facets",
            inert.len()
        ));
        for s in inert {
            ctx.output.list_item(&format!("{} = {}", s.field, s.value));
        }
    }

    if let Some(results) = session.results() {
        ctx.output.header("Results");
        let pagination = results.pagination;
        ctx.output.kv(
            "showing",
            &format!(
                "{}-{} of {}",
                pagination.start_item(session.page(), session.page_size()),
                pagination.end_item(session.page(), session.page_size()),
                pagination.num_results
            ),
        );
        ctx.output
            .page_window(&session.page_numbers(5), session.page());

        ctx.output.header("Facets");
        for group in session.facet_groups() {
            ctx.output.facet_group(&group);
        }
    }
}
