//! The `codex browse` command: an interactive, debounced search loop.
//!
//! Plain input lines drive the debounced filter cycle — each
//! keystroke-equivalent supersedes any pending cycle, and only the last
//! line inside the quiet window runs a search. Slash commands switch
//! surfaces, tab-style.

use anyhow::Result;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use glyph_codex_core::debounce::Ticket;
use glyph_codex_core::models::GlyphRecord;

use crate::config::Config;
use crate::loader::LoadCoordinator;
use crate::search::NO_RESULTS;
use crate::session::{bootstrap, CodexSession};
use crate::telemetry::InteractionEvent;

enum BrowseMsg {
    Input(String),
    Run(Ticket, String),
    Eof,
}

pub async fn run_browse(config: &Config) -> Result<()> {
    let (mut session, mut coordinator, sink) = bootstrap(config)?;

    let report = coordinator.load(session.catalog_mut()).await;
    if let Some(failure) = report.failure {
        println!("{failure}");
        return Ok(());
    }
    if let Some(glyph_error) = &report.glyph_error {
        println!("{glyph_error}");
    }

    println!(
        "{} glyphs loaded. Type to search; /category <name>, /categories, /ideals, /stats, /clear, /quit.",
        session.catalog().glyphs().len()
    );

    let window = Duration::from_millis(config.search.debounce_ms);
    let gate = session.gate();
    let (tx, mut rx) = mpsc::unbounded_channel::<BrowseMsg>();

    // Stdin reader; a closed pipe ends the session after pending cycles drain.
    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if input_tx.send(BrowseMsg::Input(line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(BrowseMsg::Eof);
    });

    while let Some(msg) = rx.recv().await {
        match msg {
            BrowseMsg::Input(line) => {
                let line = line.trim().to_string();
                if let Some(command) = line.strip_prefix('/') {
                    if handle_command(command, &mut session, &coordinator).await {
                        break;
                    }
                } else {
                    // Schedule a filter cycle; a newer line discards it.
                    let ticket = gate.issue();
                    let run_tx = tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(window).await;
                        let _ = run_tx.send(BrowseMsg::Run(ticket, line));
                    });
                }
            }
            BrowseMsg::Run(ticket, term) => {
                if session.ticket_current(ticket) {
                    let view = session.on_search_changed(&term);
                    print_view(&view);
                }
            }
            BrowseMsg::Eof => {
                // Let the last debounced cycle fire before leaving.
                tokio::time::sleep(window + Duration::from_millis(50)).await;
                while let Ok(msg) = rx.try_recv() {
                    if let BrowseMsg::Run(ticket, term) = msg {
                        if session.ticket_current(ticket) {
                            let view = session.on_search_changed(&term);
                            print_view(&view);
                        }
                    }
                }
                break;
            }
        }
    }

    sink.flush().await;
    Ok(())
}

/// Dispatch a slash command. Returns true when the session should end.
async fn handle_command(
    command: &str,
    session: &mut CodexSession,
    coordinator: &LoadCoordinator,
) -> bool {
    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "quit" | "q" => return true,
        "clear" => {
            session.on_search_changed("");
            session.on_category_changed("");
            println!("Search cleared.");
        }
        "category" => {
            let view = session.on_category_changed(arg);
            if arg.is_empty() {
                println!("Category filter cleared.");
            } else {
                println!("Category: {arg}");
            }
            print_view(&view);
        }
        "categories" => {
            for category in session.categories() {
                println!("  {category}");
            }
        }
        "ideals" => {
            session.track(InteractionEvent::new(
                "tab_switch",
                "ideals",
                "Entered the realm of ideals",
                Vec::new(),
            ));
            coordinator.ensure_ideals(session.catalog_mut()).await;
            let ideals = session.catalog().ideals();
            if ideals.is_empty() {
                println!("No ideals available.");
            } else {
                for ideal in ideals {
                    println!("  {}", ideal.text);
                }
            }
        }
        "stats" => {
            let stats = session.statistics();
            println!(
                "  glyphs: {} total, {} in view; ideals: {}; categories: {}",
                stats.total_glyphs, stats.filtered_glyphs, stats.total_ideals, stats.categories
            );
            if !stats.search_term.is_empty() {
                println!("  search: {:?}", stats.search_term);
            }
            if !stats.category.is_empty() {
                println!("  category: {:?}", stats.category);
            }
        }
        _ => {
            println!("Unknown command: /{name}");
        }
    }
    false
}

fn print_view(view: &[&GlyphRecord]) {
    if view.is_empty() {
        println!("{NO_RESULTS}");
        return;
    }
    for glyph in view {
        println!(
            "  {}  {} — {}",
            glyph.display_symbol(),
            glyph.display_name(),
            glyph.display_meaning()
        );
    }
    println!("Found {} sacred glyphs", view.len());
}
