//! Check command implementation.
//!
//! Resolves like `resolve` and reports variants whose permalink produced an
//! empty path. Suppressed variants are intentional and pass.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use super::args::ItemArgs;
use super::common::{ItemReport, collect_item_files, plural_count, resolve_files};
use super::resolve::report_failures;
use crate::config::SiteConfig;
use crate::log;

/// Empty variants grouped by source file.
#[derive(Debug, Default)]
pub struct CheckReport {
    empty: BTreeMap<String, Vec<String>>,
}

impl CheckReport {
    pub fn from_items(items: &[ItemReport]) -> Self {
        let mut report = Self::default();
        for item in items {
            for variant in item.variants.iter().filter(|v| v.link().is_empty()) {
                report
                    .empty
                    .entry(item.source.clone())
                    .or_default()
                    .push(variant.label().to_owned());
            }
        }
        report
    }

    pub fn is_empty(&self) -> bool {
        self.empty.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.empty.values().map(Vec::len).sum()
    }

    fn print(&self) {
        for (source, labels) in &self.empty {
            eprintln!("{}", source.bold());
            for label in labels {
                eprintln!("  {} {} resolved to an empty path", "✗".red(), label.cyan());
            }
        }
    }
}

/// Execute check command
pub fn run_check(args: &ItemArgs, config: &SiteConfig) -> Result<()> {
    let files = collect_item_files(&args.paths)?;
    log!("check"; "checking {}", plural_count(files.len(), "item"));

    let batch = resolve_files(&files, args.collection.as_deref(), config);
    report_failures(&batch)?;

    let report = CheckReport::from_items(&batch.items);
    if !report.is_empty() {
        report.print();
        bail!(
            "{} with an empty permalink",
            plural_count(report.error_count(), "variant")
        );
    }

    log!("check"; "all {} resolved", plural_count(batch.items.len(), "item"));
    Ok(())
}
