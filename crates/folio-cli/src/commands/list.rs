use std::path::Path;

use anyhow::{Context, Result};
use folio_core::gallery::load_items;

pub async fn run(content: &Path) -> Result<()> {
    let items = load_items(content)
        .await
        .with_context(|| format!("failed to load {}", content.display()))?;

    if items.is_empty() {
        println!("No achievements in {}.", content.display());
        return Ok(());
    }

    println!("Achievements ({}):\n", items.len());
    for (index, item) in items.iter().enumerate() {
        println!("  {:>2}. {}", index + 1, item.text);
        println!("      {}", item.image);
    }

    Ok(())
}
