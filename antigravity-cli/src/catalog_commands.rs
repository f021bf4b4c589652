use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

use antigravity_core::modules::opencode_sync::{variant, ModelCatalog};
use antigravity_types::models::ModelCatalogEntry;

fn variant_list(entry: &ModelCatalogEntry) -> String {
    if !entry.has_variants() {
        return "-".to_string();
    }
    variant::supported_tokens(entry.variant_type)
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn list_models(json: bool) -> Result<()> {
    let catalog = ModelCatalog::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Family", "Context", "Output", "Variants"]);

    for entry in catalog.entries() {
        let family = if entry.family.is_claude() {
            Cell::new(entry.family).fg(Color::Magenta)
        } else {
            Cell::new(entry.family).fg(Color::Blue)
        };
        table.add_row(vec![
            Cell::new(&entry.id),
            Cell::new(&entry.name),
            family,
            Cell::new(entry.limit.context),
            Cell::new(entry.limit.output),
            Cell::new(variant_list(entry)),
        ]);
    }

    println!("{table}");
    println!("\n{} models", catalog.len());
    Ok(())
}

pub fn preview_variant(model: &str, token: &str) -> Result<()> {
    let catalog = ModelCatalog::builtin();
    let entry = catalog
        .get(model)
        .ok_or_else(|| anyhow::anyhow!("Unknown model: {} (see `antigravity models`)", model))?;

    match variant::resolve(entry.variant_type, token)? {
        Some(param) => {
            println!("{} {}:{} -> {}", "✓".green(), model, token, param);
            println!("{}", serde_json::to_string_pretty(&param)?);
        }
        None => println!(
            "{} {} has no variants; '{}' adds no parameters",
            "!".yellow(),
            model,
            token
        ),
    }
    Ok(())
}
