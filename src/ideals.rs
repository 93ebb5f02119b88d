//! The `codex ideals` command: list the thematic principles.
//!
//! Activating this surface is what triggers the lazy ideals re-fetch when
//! the startup load left the collection empty.

use anyhow::Result;

use crate::config::Config;
use crate::session::bootstrap;

pub async fn run_ideals(config: &Config, show_keywords: bool) -> Result<()> {
    let (mut session, mut coordinator, sink) = bootstrap(config)?;

    let report = coordinator.load(session.catalog_mut()).await;
    if let Some(failure) = report.failure {
        println!("{failure}");
        return Ok(());
    }

    coordinator.ensure_ideals(session.catalog_mut()).await;

    let ideals = session.catalog().ideals();
    if ideals.is_empty() {
        println!("No ideals available.");
    } else {
        for (index, ideal) in ideals.iter().enumerate() {
            if show_keywords && !ideal.keywords.is_empty() {
                println!(
                    "{:>3}. {}  [{}]",
                    index + 1,
                    ideal.text,
                    ideal.keywords.join(", ")
                );
            } else {
                println!("{:>3}. {}", index + 1, ideal.text);
            }
        }
        println!();
        println!("{} sacred ideals", ideals.len());
    }

    sink.flush().await;
    Ok(())
}
