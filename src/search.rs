//! The `codex search` command: one-shot fetch, filter, render cycle.

use anyhow::Result;

use glyph_codex_core::models::GlyphRecord;

use crate::config::Config;
use crate::session::bootstrap;

/// Explicit empty-result state; an empty container is never shown bare.
pub(crate) const NO_RESULTS: &str =
    "The sacred knowledge remains hidden. Adjust your search or filters to unveil the mysteries.";

pub async fn run_search(
    config: &Config,
    term: &str,
    category: Option<String>,
    limit: Option<usize>,
) -> Result<()> {
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

    if let Some(category) = category.as_deref() {
        session.on_category_changed(category);
    }
    let view = session.on_search_changed(term);

    if view.is_empty() {
        println!("{NO_RESULTS}");
    } else {
        let shown = limit.unwrap_or(view.len()).min(view.len());
        for glyph in &view[..shown] {
            print_glyph_card(glyph);
        }
        if shown < view.len() {
            println!("  ... and {} more", view.len() - shown);
            println!();
        }
        println!("Found {} sacred glyphs", view.len());
    }

    sink.flush().await;
    Ok(())
}

pub(crate) fn print_glyph_card(glyph: &GlyphRecord) {
    println!("{}  {}", glyph.display_symbol(), glyph.display_name());
    println!("    Transliteration: {}", glyph.display_transliteration());
    println!("    Meaning:         {}", glyph.display_meaning());
    println!("    Category:        {}", glyph.display_category());
    if !glyph.layered_interpretations.is_empty() {
        println!("    Layered meanings:");
        for interpretation in &glyph.layered_interpretations {
            println!("      - {interpretation}");
        }
    }
    println!("    {}", glyph.display_significance());
    println!();
}
