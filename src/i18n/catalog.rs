//! Translation catalog: one record of per-language text for every identifier.
//!
//! Records carry one text column per wired language. Selecting the column for
//! a language goes through a dispatch table keyed by language code, so wiring
//! a new language means adding a column and one table entry.

use crate::i18n::ids::{self, StringId};
use crate::i18n::strings::RECORDS;
use std::sync::{Arc, OnceLock};

/// Text returned for a registered language that has no wired column.
pub const PLACEHOLDER: &str = "?";

/// Per-language text for one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationRecord {
    /// Identifier this record claims to describe
    pub id: StringId,

    /// English (default language)
    pub en: &'static str,

    /// French
    pub fr: &'static str,

    /// German
    pub de: &'static str,
}

/// Picks one language's text out of a record.
pub type Selector = fn(&TranslationRecord) -> &'static str;

fn select_en(record: &TranslationRecord) -> &'static str {
    record.en
}

fn select_fr(record: &TranslationRecord) -> &'static str {
    record.fr
}

fn select_de(record: &TranslationRecord) -> &'static str {
    record.de
}

/// Language code to text column.
const SELECTORS: [(&str, Selector); 3] = [("en", select_en), ("fr", select_fr), ("de", select_de)];

/// Find the column selector for a language code.
///
/// Returns `None` when the language has no wired column; callers substitute
/// [`PLACEHOLDER`].
pub fn selector_for(code: &str) -> Option<Selector> {
    SELECTORS
        .iter()
        .find(|(wired, _)| wired.eq_ignore_ascii_case(code))
        .map(|(_, selector)| *selector)
}

/// The full set of translation records in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<TranslationRecord>,
}

static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();

impl Catalog {
    /// Build a catalog from records in declaration order.
    ///
    /// The order is not checked here; run the catalog through
    /// [`crate::i18n::validate`] before materialising it.
    pub fn new(records: Vec<TranslationRecord>) -> Self {
        Self { records }
    }

    /// The shared built-in catalog.
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(BUILTIN.get_or_init(|| Arc::new(Catalog::new(RECORDS.to_vec()))))
    }

    /// Number of identifiers the built-in catalog covers.
    pub fn builtin_count() -> usize {
        ids::COUNT
    }

    /// Records in declaration order.
    pub fn records(&self) -> &[TranslationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
