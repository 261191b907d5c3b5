mod args;
mod render;

use anyhow::{Context, Result};
use args::{Cli, Commands, FilterArgs, PolicyArgs};
use catalog::Catalog;
use clap::Parser;
use colored::Colorize;
use pipeline::FilterPipeline;
use std::time::Instant;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // All three files load or nothing is shown
    let start = Instant::now();
    let catalog = Catalog::load_from_dir(&cli.data_dir).with_context(|| {
        format!(
            "Camp data unavailable (could not load {})",
            cli.data_dir.display()
        )
    })?;
    tracing::debug!("Loaded catalog in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List { filters } => handle_list(&catalog, &filters)?,
        Commands::Show { id, policy } => handle_show(&catalog, &id, policy)?,
        Commands::Explain { id, filters } => handle_explain(&catalog, &id, &filters),
        Commands::Towns => handle_towns(&catalog),
        Commands::Categories => handle_categories(&catalog),
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(catalog: &Catalog, filters: &FilterArgs) -> Result<()> {
    let options = filters.policy.to_options();
    let pipeline = FilterPipeline::from_state(&filters.to_state(), &options);
    let matching = pipeline.apply(catalog.entries());

    print!("{}", render::listing(catalog, &matching, options.inference)?);
    Ok(())
}

/// Handle the 'show' command
///
/// An unknown id shows nothing.
fn handle_show(catalog: &Catalog, id: &str, policy: PolicyArgs) -> Result<()> {
    match render::detail_for(catalog, id, policy.to_options().inference)? {
        Some(detail) => print!("{}", detail),
        None => tracing::debug!("No camp with id {}", id),
    }
    Ok(())
}

/// Handle the 'explain' command
fn handle_explain(catalog: &Catalog, id: &str, filters: &FilterArgs) {
    let Some(entry) = catalog.get_entry(id) else {
        tracing::debug!("No camp with id {}", id);
        return;
    };

    let pipeline = FilterPipeline::from_state(&filters.to_state(), &filters.policy.to_options());
    if pipeline.is_empty() {
        println!("No filters given; {} matches.", entry.name.bold());
        return;
    }

    println!("Active filters: {}", pipeline.filter_names().join(", "));
    match pipeline.first_rejection(entry) {
        Some(filter) => println!("{} {} rejected by {}", "✗".red(), entry.name.bold(), filter),
        None => println!("{} {} matches every filter", "✓".green(), entry.name.bold()),
    }
}

/// Handle the 'towns' command
fn handle_towns(catalog: &Catalog) {
    for town in catalog.towns() {
        println!("{}", town);
    }
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog) {
    for category in catalog.categories() {
        println!("{:<16} {}", category.id.cyan(), category.name);
    }
}
