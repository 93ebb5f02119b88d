//! Filter engine — text search and category faceting over the glyph
//! collection.
//!
//! Filtering is a pure, stable subsequence computation: the result is always
//! recomputed from the full collection and preserves its relative order,
//! never patched incrementally. Text matching is case-insensitive substring
//! containment over the record's searchable fields; category matching is a
//! case-sensitive exact comparison. The asymmetry is deliberate — category
//! selections come from values derived from the collection itself.

use crate::models::GlyphRecord;

/// The current search request: free text plus a category facet. An empty
/// string means "no filter" for either component.
///
/// Overwritten wholesale on every user-driven filter request; only the
/// session entry points mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub search_term: String,
    pub category: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither the text nor the category filter is active.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.category.is_empty()
    }
}

/// Compute the filtered view of `glyphs` for `state`.
///
/// Both filters, when active, must pass (logical AND). With both empty this
/// is the identity view. The returned sequence is a subsequence of `glyphs`
/// in the original relative order.
pub fn filter_glyphs<'a>(glyphs: &'a [GlyphRecord], state: &SearchState) -> Vec<&'a GlyphRecord> {
    let term = state.search_term.to_lowercase();

    glyphs
        .iter()
        .filter(|glyph| term.is_empty() || matches_term(glyph, &term))
        .filter(|glyph| {
            state.category.is_empty() || glyph.category.as_deref() == Some(state.category.as_str())
        })
        .collect()
}

/// True iff `term` (already lowercased) is a substring of any present
/// searchable field.
fn matches_term(glyph: &GlyphRecord, term: &str) -> bool {
    glyph
        .searchable_fields()
        .any(|field| field.to_lowercase().contains(term))
}

/// Distinct category facets of the collection: sorted ascending, no
/// duplicates, with null/empty/whitespace-only values excluded.
///
/// Recomputed from the loaded collection on demand rather than cached
/// across load cycles.
pub fn distinct_categories(glyphs: &[GlyphRecord]) -> Vec<String> {
    let mut categories: Vec<String> = glyphs
        .iter()
        .filter_map(|glyph| glyph.category.as_deref())
        .filter(|category| !category.trim().is_empty())
        .map(str::to_string)
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(name: &str, category: &str, meaning: &str) -> GlyphRecord {
        GlyphRecord {
            name: Some(name.to_string()),
            category: if category.is_empty() {
                None
            } else {
                Some(category.to_string())
            },
            primary_meaning: Some(meaning.to_string()),
            ..Default::default()
        }
    }

    fn sample() -> Vec<GlyphRecord> {
        vec![
            glyph("Ankh", "Life", "eternal life"),
            glyph("Was", "Power", "dominion"),
            glyph("Djed", "Stability", "endurance"),
        ]
    }

    fn state(term: &str, category: &str) -> SearchState {
        SearchState {
            search_term: term.to_string(),
            category: category.to_string(),
        }
    }

    fn names<'a>(view: &[&'a GlyphRecord]) -> Vec<&'a str> {
        view.iter().map(|g| g.display_name()).collect()
    }

    #[test]
    fn both_empty_is_identity() {
        let glyphs = sample();
        let view = filter_glyphs(&glyphs, &SearchState::new());
        assert_eq!(names(&view), vec!["Ankh", "Was", "Djed"]);
    }

    #[test]
    fn term_matches_meaning_or_category() {
        // "life" matches Ankh through primary_meaning "eternal life" and
        // category "Life" — either suffices.
        let glyphs = sample();
        let view = filter_glyphs(&glyphs, &state("life", ""));
        assert_eq!(names(&view), vec!["Ankh"]);
    }

    #[test]
    fn term_match_is_case_insensitive() {
        let glyphs = sample();
        assert_eq!(filter_glyphs(&glyphs, &state("DOMINION", "")).len(), 1);
        assert_eq!(filter_glyphs(&glyphs, &state("AnKh", "")).len(), 1);
    }

    #[test]
    fn term_matches_each_field_kind() {
        let record = GlyphRecord {
            name: Some("Reed Leaf".into()),
            transliteration: Some("i".into()),
            primary_meaning: Some("presence".into()),
            category: Some("Consciousness".into()),
            mystical_significance: Some("The reed bends with cosmic winds.".into()),
            layered_interpretations: vec!["Self-identification".into()],
            ..Default::default()
        };
        let glyphs = vec![record];
        for term in [
            "reed leaf",
            "presence",
            "consciousness",
            "cosmic winds",
            "self-ident",
        ] {
            assert_eq!(
                filter_glyphs(&glyphs, &state(term, "")).len(),
                1,
                "term {term:?} should match"
            );
        }
    }

    #[test]
    fn term_matches_meaning_alias_when_primary_missing() {
        let glyphs = vec![GlyphRecord {
            meaning: Some("dominion".into()),
            ..Default::default()
        }];
        assert_eq!(filter_glyphs(&glyphs, &state("dominion", "")).len(), 1);
    }

    #[test]
    fn missing_fields_never_match_or_error() {
        let glyphs = vec![GlyphRecord::default()];
        assert!(filter_glyphs(&glyphs, &state("anything", "")).is_empty());
    }

    #[test]
    fn unmatched_term_yields_empty_view() {
        let glyphs = sample();
        assert!(filter_glyphs(&glyphs, &state("zzz", "")).is_empty());
    }

    #[test]
    fn category_filter_is_exact() {
        let glyphs = sample();
        let view = filter_glyphs(&glyphs, &state("", "Power"));
        assert_eq!(names(&view), vec!["Was"]);
    }

    #[test]
    fn category_filter_is_case_sensitive() {
        let glyphs = sample();
        assert!(filter_glyphs(&glyphs, &state("", "power")).is_empty());
    }

    #[test]
    fn uncategorized_records_never_match_a_selection() {
        let mut glyphs = sample();
        glyphs.push(glyph("Seba", "", "star"));
        assert!(filter_glyphs(&glyphs, &state("", "star")).is_empty());
        // ...but are still included when the category filter is empty.
        let view = filter_glyphs(&glyphs, &state("star", ""));
        assert_eq!(names(&view), vec!["Seba"]);
    }

    #[test]
    fn filters_compose_by_intersection() {
        let mut glyphs = sample();
        glyphs.push(glyph("Sa", "Life", "protection"));

        let term_only = filter_glyphs(&glyphs, &state("life", ""));
        let category_only = filter_glyphs(&glyphs, &state("", "Life"));
        let both = filter_glyphs(&glyphs, &state("life", "Life"));

        let expected: Vec<&GlyphRecord> = term_only
            .iter()
            .filter(|g| category_only.iter().any(|c| std::ptr::eq::<GlyphRecord>(**g, *c)))
            .copied()
            .collect();
        assert_eq!(names(&both), names(&expected));
        assert_eq!(names(&both), vec!["Ankh"]);
    }

    #[test]
    fn result_preserves_source_order() {
        let glyphs = vec![
            glyph("B", "X", "shared"),
            glyph("A", "X", "shared"),
            glyph("C", "X", "shared"),
        ];
        let view = filter_glyphs(&glyphs, &state("shared", ""));
        assert_eq!(names(&view), vec!["B", "A", "C"]);
    }

    #[test]
    fn filtering_is_idempotent_for_fixed_inputs() {
        let glyphs = sample();
        let first = names(&filter_glyphs(&glyphs, &state("life", "Life")));
        let second = names(&filter_glyphs(&glyphs, &state("life", "Life")));
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_categories_sorted_deduped_and_clean() {
        let glyphs = vec![
            glyph("A", "Power", ""),
            glyph("B", "Life", ""),
            glyph("C", "Power", ""),
            glyph("D", "", ""),
            glyph("E", "   ", ""),
        ];
        assert_eq!(distinct_categories(&glyphs), vec!["Life", "Power"]);
    }

    #[test]
    fn distinct_categories_empty_collection() {
        assert!(distinct_categories(&[]).is_empty());
    }
}
