//! String table materialisation.
//!
//! Turns a validated catalog into a flat, identifier-indexed array of text for
//! one language. Tables are built whole and never patched afterwards.

use crate::i18n::catalog::{selector_for, Catalog, PLACEHOLDER};
use crate::i18n::ids::StringId;
use crate::i18n::{LanguageId, LanguageRegistry};
use tracing::{debug, warn};

/// Resolved text for one language, indexed by identifier ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStringTable {
    language: LanguageId,
    texts: Box<[&'static str]>,
    placeholders: usize,
}

impl ResolvedStringTable {
    /// Text for `id`.
    ///
    /// # Panics
    /// Panics if `id` is outside the identifier space of the catalog this
    /// table was built from.
    pub fn get(&self, id: StringId) -> &'static str {
        self.texts[id.index()]
    }

    /// Language this table was resolved for.
    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// All texts in ordinal order.
    pub fn texts(&self) -> &[&'static str] {
        &self.texts
    }

    /// Number of entries filled with the placeholder.
    pub fn placeholders(&self) -> usize {
        self.placeholders
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Build the resolved table for `language`.
///
/// Expects a catalog that passed [`crate::i18n::validate`], so record `i`
/// describes identifier `i`. A registered language with no wired text column
/// gets [`PLACEHOLDER`] for every entry.
pub fn materialize(
    catalog: &Catalog,
    registry: &LanguageRegistry,
    language: LanguageId,
) -> ResolvedStringTable {
    let code = registry.config(language).code;

    let (texts, placeholders): (Box<[&'static str]>, usize) = match selector_for(code) {
        Some(select) => {
            let texts = catalog
                .records()
                .iter()
                .enumerate()
                .map(|(position, record)| {
                    debug_assert_eq!(record.id.index(), position);
                    select(record)
                })
                .collect();
            (texts, 0)
        }
        None => {
            warn!(
                "Language '{}' has no wired catalog column, using placeholder text",
                code
            );
            (vec![PLACEHOLDER; catalog.len()].into_boxed_slice(), catalog.len())
        }
    };

    debug!("Materialized {} strings for '{}'", texts.len(), code);

    ResolvedStringTable {
        language,
        texts,
        placeholders,
    }
}
