//! The `codex categories` command: list the category facets.

use anyhow::Result;

use crate::config::Config;
use crate::session::bootstrap;

pub async fn run_categories(config: &Config) -> Result<()> {
    let (mut session, mut coordinator, sink) = bootstrap(config)?;

    let report = coordinator.load(session.catalog_mut()).await;
    if let Some(failure) = report.failure {
        println!("{failure}");
        return Ok(());
    }
    if let Some(glyph_error) = report.glyph_error {
        println!("{glyph_error}");
        return Ok(());
    }

    let categories = session.categories();
    if categories.is_empty() {
        println!("No categories available.");
    } else {
        for category in &categories {
            let count = session
                .catalog()
                .glyphs()
                .iter()
                .filter(|glyph| glyph.category.as_deref() == Some(category.as_str()))
                .count();
            println!("  {category}  ({count})");
        }
        println!();
        println!("{} sacred categories", categories.len());
    }

    sink.flush().await;
    Ok(())
}
