//! Session context — explicit application state, no ambient global.
//!
//! A [`CodexSession`] bundles the catalog, the current [`SearchState`], the
//! debounce gate, and the injected interaction sink. UI binding layers (the
//! CLI commands, the browse REPL, tests) construct one and drive it through
//! the explicit transitions [`on_search_changed`](CodexSession::on_search_changed)
//! and [`on_category_changed`](CodexSession::on_category_changed), each of
//! which overwrites the search state wholesale and returns the freshly
//! derived view. Filtering is synchronous and reentrant-safe; overlapping
//! renders resolve last-write-wins.

use anyhow::Result;
use std::sync::Arc;

use glyph_codex_core::catalog::Catalog;
use glyph_codex_core::debounce::{DebounceGate, Ticket};
use glyph_codex_core::filter::{filter_glyphs, SearchState};
use glyph_codex_core::models::GlyphRecord;

use crate::client::{CodexApi, CodexClient};
use crate::config::Config;
use crate::loader::LoadCoordinator;
use crate::telemetry::{HttpSink, InteractionEvent, InteractionSink, NullSink};

/// Wire a session to a configured backend: client, sink per the telemetry
/// setting, and a fresh coordinator. The sink handle is returned separately
/// so commands can flush in-flight events at shutdown.
pub fn bootstrap(
    config: &Config,
) -> Result<(CodexSession, LoadCoordinator, Arc<dyn InteractionSink>)> {
    let api: Arc<dyn CodexApi> = Arc::new(CodexClient::new(&config.api)?);
    let sink: Arc<dyn InteractionSink> = if config.telemetry.enabled {
        Arc::new(HttpSink::new(api.clone()))
    } else {
        Arc::new(NullSink)
    };
    let session = CodexSession::new(sink.clone());
    let coordinator = LoadCoordinator::new(api);
    Ok((session, coordinator, sink))
}

/// Session counters for display surfaces and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub total_glyphs: usize,
    pub filtered_glyphs: usize,
    pub total_ideals: usize,
    pub categories: usize,
    pub search_term: String,
    pub category: String,
}

pub struct CodexSession {
    catalog: Catalog,
    search_state: SearchState,
    gate: Arc<DebounceGate>,
    sink: Arc<dyn InteractionSink>,
}

impl CodexSession {
    pub fn new(sink: Arc<dyn InteractionSink>) -> Self {
        Self {
            catalog: Catalog::new(),
            search_state: SearchState::new(),
            gate: Arc::new(DebounceGate::new()),
            sink,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search_state
    }

    pub fn gate(&self) -> Arc<DebounceGate> {
        self.gate.clone()
    }

    /// True iff no newer input has superseded this debounced cycle.
    pub fn ticket_current(&self, ticket: Ticket) -> bool {
        self.gate.is_current(ticket)
    }

    /// Emit an interaction event through the injected sink. Never blocks,
    /// never fails from the caller's point of view.
    pub fn track(&self, event: InteractionEvent) {
        self.sink.record(event);
    }

    /// The search text changed: store it lowercased and recompute the view.
    pub fn on_search_changed(&mut self, term: &str) -> Vec<&GlyphRecord> {
        self.search_state.search_term = term.to_lowercase();
        self.refresh()
    }

    /// The category selection changed: store it verbatim (the exact-match
    /// comparison is case-sensitive) and recompute the view.
    pub fn on_category_changed(&mut self, category: &str) -> Vec<&GlyphRecord> {
        self.search_state.category = category.to_string();
        self.refresh()
    }

    /// The view for the current state, recomputed — never cached.
    pub fn current_view(&self) -> Vec<&GlyphRecord> {
        filter_glyphs(self.catalog.glyphs(), &self.search_state)
    }

    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    pub fn statistics(&self) -> SessionStats {
        SessionStats {
            total_glyphs: self.catalog.glyphs().len(),
            filtered_glyphs: self.current_view().len(),
            total_ideals: self.catalog.ideals().len(),
            categories: self.catalog.categories().len(),
            search_term: self.search_state.search_term.clone(),
            category: self.search_state.category.clone(),
        }
    }

    /// Shared tail of both transitions: recompute, and for a non-empty term
    /// emit the search event carrying the text-matched symbols (the category
    /// step does not narrow what gets reported).
    fn refresh(&mut self) -> Vec<&GlyphRecord> {
        let term = self.search_state.search_term.clone();

        if !term.is_empty() {
            let text_only = SearchState {
                search_term: term.clone(),
                category: String::new(),
            };
            let matched = filter_glyphs(self.catalog.glyphs(), &text_only);
            let symbols: Vec<String> = matched
                .iter()
                .map(|glyph| glyph.display_symbol().to_string())
                .collect();
            self.sink.record(InteractionEvent::new(
                "glyph_search",
                term.clone(),
                format!("Sought wisdom: {term}"),
                symbols,
            ));
        }

        self.current_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::MemorySink;

    fn glyph(name: &str, category: &str) -> GlyphRecord {
        GlyphRecord {
            unicode_char: Some(format!("<{name}>")),
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    fn session_with(sink: Arc<MemorySink>) -> CodexSession {
        let mut session = CodexSession::new(sink);
        session
            .catalog_mut()
            .load_glyphs(vec![glyph("Ankh", "Life"), glyph("Was", "Power")]);
        session
    }

    #[test]
    fn search_transition_filters_and_tracks() {
        let sink = Arc::new(MemorySink::new());
        let mut session = session_with(sink.clone());

        let view = session.on_search_changed("Ankh");
        assert_eq!(view.len(), 1);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action_type, "glyph_search");
        assert_eq!(events[0].user_input, "ankh");
        assert_eq!(events[0].related_glyphs, vec!["<Ankh>".to_string()]);
    }

    #[test]
    fn empty_search_does_not_track() {
        let sink = Arc::new(MemorySink::new());
        let mut session = session_with(sink.clone());
        let view = session.on_search_changed("");
        assert_eq!(view.len(), 2);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn category_change_reapplies_active_search() {
        let sink = Arc::new(MemorySink::new());
        let mut session = session_with(sink.clone());

        session.on_search_changed("a");
        let view = session.on_category_changed("Power");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].display_name(), "Was");

        // Both transitions ran the shared handler with a non-empty term.
        assert_eq!(sink.events().len(), 2);
        // The tracked set is the text-matched one, not narrowed by category.
        assert_eq!(sink.events()[1].related_glyphs.len(), 2);
    }

    #[test]
    fn state_is_overwritten_wholesale() {
        let sink = Arc::new(MemorySink::new());
        let mut session = session_with(sink);
        session.on_search_changed("LIFE");
        assert_eq!(session.search_state().search_term, "life");
        session.on_search_changed("");
        assert_eq!(session.search_state().search_term, "");
    }

    #[test]
    fn statistics_reflect_current_state() {
        let sink = Arc::new(MemorySink::new());
        let mut session = session_with(sink);
        session.on_category_changed("Life");
        let stats = session.statistics();
        assert_eq!(stats.total_glyphs, 2);
        assert_eq!(stats.filtered_glyphs, 1);
        assert_eq!(stats.categories, 2);
        assert_eq!(stats.category, "Life");
    }
}
