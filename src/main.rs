//! `ingredient-normalizr` — normalize free-text ingredient lists in a
//! spreadsheet column into canonical dictionary forms.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load column names and the unit vocabulary ([`config::load_config`]).
//! 3. Build the lemmatizer once ([`morph::DictLemmatizer`]).
//! 4. Read the input spreadsheet ([`sheet::read_sheet`]).
//! 5. Normalize every cell of the ingredients column ([`normalizer`]).
//! 6. Append the normalized column and write the output ([`sheet::write_sheet`]).
//! 7. Render the run summary ([`report`]).
//! 8. Exit `0`, or `1` when the input file or source column is missing.

mod cli;
mod config;
mod models;
mod morph;
mod normalizer;
mod report;
mod sheet;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cli::{Cli, ReportFormat};
use config::load_config;
use models::Summary;
use morph::DictLemmatizer;
use normalizer::IngredientNormalizer;

/// Number of entries shown in the top-ingredients table.
const TOP_INGREDIENTS: usize = 10;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    if !cli.input.exists() {
        eprintln!("Input spreadsheet not found: {}", cli.input.display());
        std::process::exit(1);
    }

    // Built once per process; read-only afterwards.
    let mut morph = DictLemmatizer::new();
    if let Some(path) = &cli.lemmas {
        let loaded = morph.merge_file(path)?;
        if !cli.quiet {
            eprintln!(
                "  {} merged {} lemma entries from {}",
                "→".cyan(),
                loaded,
                path.display()
            );
        }
    }

    let mut sheet = sheet::read_sheet(&cli.input)?;

    let Some(source_idx) = sheet.column_index(&config.columns.source) else {
        eprintln!(
            "Column '{}' not found in {}",
            config.columns.source,
            cli.input.display()
        );
        std::process::exit(1);
    };

    if !cli.quiet {
        eprintln!(
            "  {} {} rows from {}",
            "→".cyan(),
            sheet.rows.len(),
            cli.input.display()
        );
    }

    let normalizer = IngredientNormalizer::new(config.unit_vocabulary(), &morph)?;

    let pb = if !cli.quiet {
        let pb = ProgressBar::new(sheet.rows.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut normalized: Vec<String> = Vec::with_capacity(sheet.rows.len());
    for row in &sheet.rows {
        normalized.push(normalizer.normalize(&row[source_idx]));
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let summary = Summary::tally(&normalized, TOP_INGREDIENTS);
    sheet.push_column(&config.columns.target, normalized);

    let output = cli.output_path();
    sheet::write_sheet(&sheet, &output)?;

    match cli.report {
        ReportFormat::Terminal => {
            report::render(&summary, &output, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
