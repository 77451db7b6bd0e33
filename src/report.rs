use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::models::Summary;

/// Render a colored terminal summary of the run.
pub fn render(summary: &Summary, output: &Path, verbose: bool, quiet: bool) -> Result<()> {
    if quiet {
        println!(
            "Rows: {}  Normalized: {}  Empty: {}  Distinct: {}",
            summary.rows,
            summary.normalized.to_string().green(),
            summary.empty.to_string().yellow(),
            summary.distinct_ingredients,
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "ingredient-normalizr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Output: {}\n", output.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Rows processed       : {}", summary.rows)
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Normalized        : {:>4}",
            "✓".green(),
            summary.normalized
        )
    );
    println!(
        " │  {:<48} │",
        format!("{}  Empty result      : {:>4}", "⚠".yellow(), summary.empty)
    );
    println!(
        " │  {:<48} │",
        format!("Distinct ingredients : {}", summary.distinct_ingredients)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if verbose && !summary.top_ingredients.is_empty() {
        println!(" {} Most frequent ingredients:\n", "[TOP]".green().bold());
        render_top_table(summary);
        println!();
    }

    Ok(())
}

fn render_top_table(summary: &Summary) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Ingredient").add_attribute(Attribute::Bold),
            Cell::new("Cells").add_attribute(Attribute::Bold),
        ]);

    for entry in &summary.top_ingredients {
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}
