//! The appcast pipeline: configuration, fetch, selection, rendering, write.

use anyhow::Result;
use log::info;
use std::path::Path;

use crate::{
    appcast::{build_items, render_feed},
    asset::ExtensionPriorityPicker,
    runtime::Runtime,
    source::Source,
};

pub mod config;
mod services;
mod write;

pub use services::build_source;
pub use write::write_output;

use config::Config;

/// Generate the appcast for the repository named in the environment and
/// write it to `output`.
#[tracing::instrument(skip(runtime))]
pub async fn generate<R: Runtime>(runtime: R, output: &Path) -> Result<()> {
    let config = Config::from_env(&runtime)?;
    let source = build_source(&config)?;
    run(&runtime, &source, &config, output).await
}

/// Runs the pipeline against an already configured source.
///
/// Nothing is written unless the releases were fetched and parsed.
#[tracing::instrument(skip(runtime, source, config))]
pub async fn run<R: Runtime + ?Sized>(
    runtime: &R,
    source: &dyn Source,
    config: &Config,
    output: &Path,
) -> Result<()> {
    info!("Fetching releases for {}...", config.repo);
    let releases = source.get_releases(&config.repo).await?;

    let items = build_items(&releases, &ExtensionPriorityPicker::new());
    info!(
        "{} of {} releases have an update package",
        items.len(),
        releases.len()
    );

    let document = render_feed(&config.repo.to_string(), &config.repo_url(), &items);
    write_output(runtime, output, &document)?;

    println!("Wrote {}", output.display());
    Ok(())
}
