//! The `codex stats` command: catalogue overview.
//!
//! Gives quick confidence that the backend is reachable and what the
//! session would be working with: record counts, category facets, and a
//! per-category breakdown.

use anyhow::Result;

use crate::config::Config;
use crate::session::bootstrap;

pub async fn run_stats(config: &Config) -> Result<()> {
    let (mut session, mut coordinator, sink) = bootstrap(config)?;

    let report = coordinator.load(session.catalog_mut()).await;
    if let Some(failure) = report.failure {
        println!("{failure}");
        return Ok(());
    }

    let stats = session.statistics();

    println!("Glyph Codex — Catalogue Stats");
    println!("=============================");
    println!();
    println!("  Backend:     {}", config.api.base_url);
    println!("  Glyphs:      {}", stats.total_glyphs);
    println!("  Ideals:      {}", stats.total_ideals);
    println!("  Categories:  {}", stats.categories);

    let categories = session.categories();
    if !categories.is_empty() {
        println!();
        println!("  By category:");
        println!("  {:<32} {:>6}", "CATEGORY", "GLYPHS");
        println!("  {}", "-".repeat(40));
        for category in &categories {
            let count = session
                .catalog()
                .glyphs()
                .iter()
                .filter(|glyph| glyph.category.as_deref() == Some(category.as_str()))
                .count();
            println!("  {:<32} {:>6}", category, count);
        }
    }

    println!();

    sink.flush().await;
    Ok(())
}
