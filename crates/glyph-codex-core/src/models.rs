//! Record models for the glyph catalogue.
//!
//! These types mirror the backend's wire format. The backend is loose about
//! field presence — the display symbol may arrive under `unicode_char`,
//! `unicode`, or `symbol`, and the primary meaning under `primary_meaning`
//! or `meaning` — so every descriptive field is optional here and resolved
//! to a defined fallback at display time. Records are immutable once
//! fetched; nothing in the client creates or mutates individual records.

use serde::Deserialize;

/// Fallback display symbol for records with no symbol field at all.
pub const FALLBACK_SYMBOL: &str = "\u{13216}";

/// A single symbolic record: a display character plus descriptive text
/// fields used by the filter engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GlyphRecord {
    /// Display character, preferred wire name.
    #[serde(default)]
    pub unicode_char: Option<String>,
    /// Display character, first wire alias.
    #[serde(default)]
    pub unicode: Option<String>,
    /// Display character, second wire alias.
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub transliteration: Option<String>,
    #[serde(default)]
    pub primary_meaning: Option<String>,
    /// Legacy alias for [`primary_meaning`](Self::primary_meaning); some
    /// records carry only this field and must still be matchable by it.
    #[serde(default)]
    pub meaning: Option<String>,
    /// Facet key for exact-match category filtering.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub mystical_significance: Option<String>,
    /// Ordered layered interpretations, possibly empty.
    #[serde(default)]
    pub layered_interpretations: Vec<String>,
}

impl GlyphRecord {
    /// The display symbol, resolved in wire-priority order.
    pub fn display_symbol(&self) -> &str {
        self.unicode_char
            .as_deref()
            .or(self.unicode.as_deref())
            .or(self.symbol.as_deref())
            .unwrap_or(FALLBACK_SYMBOL)
    }

    /// Display name, falling back to the primary meaning.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.primary_meaning.as_deref())
            .unwrap_or("Unknown Glyph")
    }

    pub fn display_transliteration(&self) -> &str {
        self.transliteration.as_deref().unwrap_or("Unknown")
    }

    /// Primary meaning with the legacy `meaning` alias as second choice.
    pub fn display_meaning(&self) -> &str {
        self.primary_meaning
            .as_deref()
            .or(self.meaning.as_deref())
            .unwrap_or("Ancient mystery")
    }

    pub fn display_category(&self) -> &str {
        self.category.as_deref().unwrap_or("Uncategorized")
    }

    pub fn display_significance(&self) -> &str {
        self.mystical_significance
            .as_deref()
            .unwrap_or("This glyph holds ancient wisdom waiting to be discovered.")
    }

    /// All text fields the search step matches against, in the fixed
    /// evaluation order. Missing fields are simply absent from the
    /// iteration — they never match and never error.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.name.as_deref(),
            self.primary_meaning.as_deref(),
            self.meaning.as_deref(),
            self.transliteration.as_deref(),
            self.category.as_deref(),
            self.mystical_significance.as_deref(),
        ]
        .into_iter()
        .flatten()
        .chain(self.layered_interpretations.iter().map(String::as_str))
    }
}

/// A thematic principle record. Opaque to the filter engine; only the
/// presentation layer consumes it.
///
/// The backend sends either a bare string or an object with `text` and
/// derived `keywords`; both forms deserialize into this type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "IdealWire")]
pub struct IdealRecord {
    pub text: String,
    pub keywords: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdealWire {
    Text(String),
    Entry {
        text: String,
        #[serde(default)]
        keywords: Vec<String>,
    },
}

impl From<IdealWire> for IdealRecord {
    fn from(wire: IdealWire) -> Self {
        match wire {
            IdealWire::Text(text) => IdealRecord {
                text,
                keywords: Vec::new(),
            },
            IdealWire::Entry { text, keywords } => IdealRecord { text, keywords },
        }
    }
}
