//! Catalog — the session's record store.
//!
//! Holds the two once-loaded collections. The catalog is the single source
//! of truth; views are always derived from it, never stored back into it.
//! Collections are immutable once loaded: there is no create/update/delete
//! of individual records at runtime. Nothing here prevents a forced reload,
//! but the load coordinator only performs one per kind per session (plus the
//! one lazy ideals re-fetch while that collection is still empty).

use crate::filter::distinct_categories;
use crate::models::{GlyphRecord, IdealRecord};

/// In-memory store for the glyph and ideal collections.
#[derive(Debug, Default)]
pub struct Catalog {
    glyphs: Vec<GlyphRecord>,
    ideals: Vec<IdealRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the glyph collection. No shape validation happens here;
    /// optional-field fallbacks are applied at display and filter time.
    pub fn load_glyphs(&mut self, records: Vec<GlyphRecord>) {
        self.glyphs = records;
    }

    /// Install the ideals collection.
    pub fn load_ideals(&mut self, records: Vec<IdealRecord>) {
        self.ideals = records;
    }

    pub fn glyphs(&self) -> &[GlyphRecord] {
        &self.glyphs
    }

    pub fn ideals(&self) -> &[IdealRecord] {
        &self.ideals
    }

    /// Guard for the lazy ideals re-fetch: an empty collection reads as
    /// "not loaded", so a failed or empty fetch stays eligible for one
    /// more attempt when an ideals surface activates.
    pub fn ideals_loaded(&self) -> bool {
        !self.ideals.is_empty()
    }

    /// Category facets of the current glyph collection.
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.glyphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let catalog = Catalog::new();
        assert!(catalog.glyphs().is_empty());
        assert!(catalog.ideals().is_empty());
        assert!(!catalog.ideals_loaded());
    }

    #[test]
    fn load_installs_collections_in_order() {
        let mut catalog = Catalog::new();
        catalog.load_glyphs(vec![
            GlyphRecord {
                name: Some("Ankh".into()),
                category: Some("Life".into()),
                ..Default::default()
            },
            GlyphRecord {
                name: Some("Was".into()),
                category: Some("Power".into()),
                ..Default::default()
            },
        ]);
        catalog.load_ideals(vec![IdealRecord {
            text: "I live in truth.".into(),
            keywords: vec![],
        }]);

        let names: Vec<&str> = catalog.glyphs().iter().map(|g| g.display_name()).collect();
        assert_eq!(names, vec!["Ankh", "Was"]);
        assert!(catalog.ideals_loaded());
        assert_eq!(catalog.categories(), vec!["Life", "Power"]);
    }

    #[test]
    fn empty_ideals_payload_still_reads_as_unloaded() {
        let mut catalog = Catalog::new();
        catalog.load_ideals(Vec::new());
        assert!(!catalog.ideals_loaded());
    }
}
