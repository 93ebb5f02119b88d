//! Load coordinator — startup fetch orchestration and its state machine.
//!
//! States run `Idle → Loading → {Ready, Failed}`. Entering `Loading` starts
//! the glyph and ideal fetches concurrently with no ordering between them.
//! Each fetch handles its own failure: a glyph failure surfaces a degraded
//! glyph-specific message, an ideals failure is logged and leaves that
//! collection silently empty. `Failed` is reserved for an error escaping the
//! aggregate wait itself, which surfaces one generic disrupted-connection
//! message regardless of cause. There is no automatic retry on any path.

use std::sync::Arc;

use glyph_codex_core::catalog::Catalog;
use glyph_codex_core::models::{GlyphRecord, IdealRecord};

use crate::client::CodexApi;

/// Degraded state shown when the glyph fetch itself fails.
pub const GLYPHS_VEILED: &str = "The glyphs remain veiled. Please try again.";

/// Generic failure shown when the aggregate load fails as a whole.
pub const CONNECTION_DISRUPTED: &str =
    "The cosmic connection has been disrupted. Please refresh to restore the link.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// What a load attempt produced, for the display layer.
#[derive(Debug)]
pub struct LoadReport {
    pub state: LoadState,
    /// Glyph-specific degraded message; the glyph collection stayed empty.
    pub glyph_error: Option<String>,
    /// Aggregate failure message; neither collection is usable.
    pub failure: Option<String>,
}

/// Orchestrates the startup fetches and the one lazy ideals re-fetch.
pub struct LoadCoordinator {
    api: Arc<dyn CodexApi>,
    state: LoadState,
}

struct GlyphLoad {
    records: Vec<GlyphRecord>,
    error: Option<String>,
}

struct IdealLoad {
    records: Vec<IdealRecord>,
}

impl LoadCoordinator {
    pub fn new(api: Arc<dyn CodexApi>) -> Self {
        Self {
            api,
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Run the startup load: both fetches concurrently, then populate the
    /// catalog from whatever arrived. Exactly one automatic attempt per
    /// record kind.
    pub async fn load(&mut self, catalog: &mut Catalog) -> LoadReport {
        self.state = LoadState::Loading;

        let glyph_api = self.api.clone();
        let ideal_api = self.api.clone();
        let glyph_task = tokio::spawn(async move { load_glyphs(glyph_api.as_ref()).await });
        let ideal_task = tokio::spawn(async move { load_ideals(ideal_api.as_ref()).await });

        let (glyph_join, ideal_join) = tokio::join!(glyph_task, ideal_task);

        match (glyph_join, ideal_join) {
            (Ok(glyph_load), Ok(ideal_load)) => {
                catalog.load_glyphs(glyph_load.records);
                catalog.load_ideals(ideal_load.records);
                self.state = LoadState::Ready;
                LoadReport {
                    state: LoadState::Ready,
                    glyph_error: glyph_load.error,
                    failure: None,
                }
            }
            (glyph_join, ideal_join) => {
                if let Err(err) = glyph_join {
                    tracing::error!(error = %err, "glyph load task failed");
                }
                if let Err(err) = ideal_join {
                    tracing::error!(error = %err, "ideal load task failed");
                }
                self.state = LoadState::Failed;
                LoadReport {
                    state: LoadState::Failed,
                    glyph_error: None,
                    failure: Some(CONNECTION_DISRUPTED.to_string()),
                }
            }
        }
    }

    /// Lazy ideals re-fetch: runs only while the collection is still empty,
    /// when a surface that consumes ideals is activated. Failure is logged
    /// and leaves the collection empty, same as the startup path.
    pub async fn ensure_ideals(&self, catalog: &mut Catalog) {
        if catalog.ideals_loaded() {
            return;
        }
        let loaded = load_ideals(self.api.as_ref()).await;
        catalog.load_ideals(loaded.records);
    }
}

/// Glyph fetch with its local failure handling: an error is caught here and
/// reported as the degraded glyph state, never propagated to the aggregate.
async fn load_glyphs(api: &dyn CodexApi) -> GlyphLoad {
    match api.fetch_glyphs().await {
        Ok(records) => {
            tracing::info!(count = records.len(), "glyph collection loaded");
            GlyphLoad {
                records,
                error: None,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "glyph load failed");
            GlyphLoad {
                records: Vec::new(),
                error: Some(GLYPHS_VEILED.to_string()),
            }
        }
    }
}

/// Ideals fetch; failure produces no user-visible state change, only an
/// empty collection and a log line.
async fn load_ideals(api: &dyn CodexApi) -> IdealLoad {
    match api.fetch_ideals().await {
        Ok(records) => {
            tracing::info!(count = records.len(), "ideal collection loaded");
            IdealLoad { records }
        }
        Err(err) => {
            tracing::warn!(error = %err, "ideal load failed");
            IdealLoad {
                records: Vec::new(),
            }
        }
    }
}
