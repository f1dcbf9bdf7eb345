use anyhow::{Context, Result};
use colored::*;
use honocoroko_core::{LookupIndex, MappingCategory};
use serde::Serialize;
use std::fs;
use tracing::info;

#[derive(Serialize)]
struct TableRow {
    category: MappingCategory,
    latin: &'static str,
    javanese: &'static str,
    codepoints: String,
    decodes_to: Option<&'static str>,
}

/// Print the mapping tables, or write them as JSON to `output`
pub fn execute(category: Option<MappingCategory>, output: Option<&str>) -> Result<()> {
    let categories: Vec<MappingCategory> = match category {
        Some(c) => vec![c],
        None => MappingCategory::all().to_vec(),
    };

    let index = LookupIndex::global();
    let rows: Vec<TableRow> = categories
        .iter()
        .flat_map(|&category| {
            category.table().iter().map(move |m| TableRow {
                category,
                latin: m.latin,
                javanese: m.javanese,
                codepoints: codepoints(m.javanese),
                decodes_to: index.reverse(m.javanese),
            })
        })
        .collect();

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&rows)
            .with_context(|| "Failed to serialize mapping table")?;
        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;
        info!("{} mappings written to: {}", rows.len(), output_path);
        return Ok(());
    }

    for category in &categories {
        println!("\n=== {} ===", category.name().bold());
        for row in rows.iter().filter(|r| r.category == *category) {
            let decoded = match row.decodes_to {
                Some(latin) if latin == row.latin => "✓".green(),
                Some(latin) => format!("→ {}", latin).as_str().yellow(),
                None => "✗".red(),
            };
            println!(
                "{:<4} {:<4} {:<24} {}",
                row.latin, row.javanese, row.codepoints, decoded
            );
        }
    }

    println!(
        "\nForward keys: {}  Reverse keys: {}",
        index.forward_len(),
        index.reverse_len()
    );

    Ok(())
}

fn codepoints(s: &str) -> String {
    s.chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoints() {
        assert_eq!(codepoints("\u{A9BA}\u{A9B4}"), "U+A9BA U+A9B4");
        assert_eq!(codepoints(""), "");
    }
}
