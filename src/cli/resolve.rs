//! Resolve command implementation.
//!
//! Loads item files in parallel and prints the link and output file of every
//! variant.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use super::args::ResolveArgs;
use super::common::{Batch, ItemReport, collect_item_files, plural_count, resolve_files};
use crate::config::SiteConfig;
use crate::log;
use crate::permalink::Link;

/// Execute resolve command
pub fn run_resolve(args: &ResolveArgs, config: &SiteConfig) -> Result<()> {
    let files = collect_item_files(&args.items.paths)?;
    log!("resolve"; "resolving {}", plural_count(files.len(), "item"));

    let mut batch = resolve_files(&files, args.items.collection.as_deref(), config);
    if args.skip_suppressed {
        for item in &mut batch.items {
            item.variants.retain(|v| *v.link() != Link::Suppressed);
        }
    }

    if args.json {
        print_json(&batch.items, args.pretty)?;
    } else {
        for item in &batch.items {
            print_item(item);
        }
    }

    report_failures(&batch)
}

fn print_json(items: &[ItemReport], pretty: bool) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(items)?
    } else {
        serde_json::to_string(items)?
    };
    println!("{formatted}");
    Ok(())
}

fn print_item(item: &ItemReport) {
    println!("{} {}", item.source.bold(), format!("({})", item.collection).dimmed());

    let width = item
        .variants
        .iter()
        .map(|v| v.label().len())
        .max()
        .unwrap_or(0);

    for variant in &item.variants {
        let label = format!("{:width$}", variant.label());
        match variant.link() {
            Link::Path { url, file } => {
                let shown = variant.absolute_url.as_deref().unwrap_or(url.as_str());
                println!(
                    "  {} {} {} {}",
                    label.cyan(),
                    shown,
                    "→".dimmed(),
                    file.display().dimmed()
                );
            }
            Link::Empty => println!("  {} {}", label.cyan(), "empty path".red()),
            Link::Suppressed => println!("  {} {}", label.cyan(), "suppressed".dimmed()),
        }
    }
}

/// Log load failures; any failure fails the command.
pub(super) fn report_failures(batch: &Batch) -> Result<()> {
    for (path, err) in &batch.failures {
        log!("error"; "{}: {:#}", path.display(), err);
    }
    if !batch.failures.is_empty() {
        bail!("failed to load {}", plural_count(batch.failures.len(), "item"));
    }
    Ok(())
}
