//! Command-line surface and run orchestration.
//!
//! Two behaviors are exposed: `--config` prints the configuration file's
//! location and exits, and the default action organizes the user's
//! `Downloads` folder. Configuration loading degrades to the built-in
//! defaults with a single warning; per-file move failures are reported
//! and never abort the run.

use clap::Parser;
use std::collections::HashMap;
use std::path::Path;

use crate::config::{self, Configuration};
use crate::file_organizer::{FileOrganizer, OrganizeOutcome};
use crate::output::OutputFormatter;

/// Sort your Downloads folder by file type.
#[derive(Debug, Parser)]
#[command(name = "downsort", version, about)]
pub struct Cli {
    /// Print the location of the configuration file
    #[arg(long)]
    pub config: bool,
}

/// Runs the selected top-level action.
///
/// # Errors
///
/// Returns an error only for fatal conditions: an unresolvable home
/// directory or a target directory that cannot be enumerated.
pub fn run_cli(cli: &Cli) -> Result<(), String> {
    if cli.config {
        println!(
            "Configuration file location: {}",
            config::config_file_path().display()
        );
        return Ok(());
    }

    let home = config::home_dir()
        .ok_or_else(|| "Could not determine the user's home directory".to_string())?;

    organize_directory(&home.join("Downloads"), None)
}

/// Organizes `target_dir` using the configuration at `config_path` (or
/// the well-known path when `None`). Split out from [`run_cli`] so tests
/// can inject both the directory and the configuration.
pub fn organize_directory(target_dir: &Path, config_path: Option<&Path>) -> Result<(), String> {
    let configuration = load_or_default(config_path);

    let outcomes = FileOrganizer::organize(target_dir, configuration.categories())
        .map_err(|e| e.to_string())?;

    report_outcomes(&outcomes);
    Ok(())
}

/// Loads the configuration, warning once and falling back to the
/// defaults on any error. A bad config file never stops a run.
fn load_or_default(config_path: Option<&Path>) -> Configuration {
    let loaded = match config_path {
        Some(path) => Configuration::load_from(path),
        None => Configuration::load(),
    };

    loaded.unwrap_or_else(|e| {
        OutputFormatter::warning(&format!("{}. Using default settings.", e));
        Configuration::default()
    })
}

/// Renders the outcome sequence: one line per processed file, a closing
/// per-category summary when anything moved, or the nothing-to-do notice.
fn report_outcomes(outcomes: &[OrganizeOutcome]) {
    if outcomes.is_empty() {
        OutputFormatter::plain("There is nothing to do.");
        return;
    }

    let mut category_counts: HashMap<&str, usize> = HashMap::new();

    for outcome in outcomes {
        match outcome {
            OrganizeOutcome::Moved {
                file_name,
                category,
            } => {
                OutputFormatter::moved(file_name, category);
                *category_counts.entry(category.as_str()).or_insert(0) += 1;
            }
            OrganizeOutcome::Failed { error, .. } => {
                OutputFormatter::error(&error.to_string());
            }
        }
    }

    if category_counts.is_empty() {
        return;
    }

    let moved_total: usize = category_counts.values().sum();
    let mut categories: Vec<_> = category_counts.into_iter().collect();
    categories.sort_by_key(|&(name, _)| name);

    OutputFormatter::plain(&format!(
        "\nOrganized {} {}:",
        moved_total,
        if moved_total == 1 { "file" } else { "files" }
    ));
    for (category, count) in categories {
        OutputFormatter::plain(&format!(
            "  {}: {} {}",
            category,
            count,
            if count == 1 { "file" } else { "files" }
        ));
    }
}
